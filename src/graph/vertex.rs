use std::fmt::{self, Display};

use crate::graph::Weight;

/// Index of a vertex in its owning graph's vertex table
///
/// Ids are handed out in first-reference order and stay valid for the
/// lifetime of the graph (there is no deletion API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Traversal progress of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not yet discovered
    #[default]
    Unvisited,
    /// Discovered, adjacent vertices still being explored
    Frontier,
    /// All adjacent vertices explored
    Finished,
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Unvisited => "unvisited",
            Color::Frontier => "frontier",
            Color::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// A vertex of graph G = (V, E) together with its search metadata
#[derive(Debug, Clone)]
pub struct Vertex<W> {
    pub(crate) label: String,

    /// Outgoing adjacency: (target, weight), in insertion order
    pub(crate) adjacency: Vec<(VertexId, W)>,

    pub(crate) color: Color,
    pub(crate) distance: W,
    pub(crate) predecessor: Option<VertexId>,
    pub(crate) discovered: usize,
    pub(crate) finished: usize,
}

impl<W: Weight> Vertex<W> {
    pub(crate) fn new(label: &str) -> Self {
        Vertex {
            label: label.to_string(),
            adjacency: Vec::new(),
            color: Color::Unvisited,
            distance: W::zero(),
            predecessor: None,
            discovered: 0,
            finished: 0,
        }
    }

    /// Clears all search metadata, keeping label and adjacency
    pub(crate) fn reset(&mut self) {
        self.color = Color::Unvisited;
        self.distance = W::zero();
        self.predecessor = None;
        self.discovered = 0;
        self.finished = 0;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Edge count from BFS, or best known path weight after Dijkstra
    pub fn distance(&self) -> W {
        self.distance
    }

    /// Vertex this one was discovered from in the last search, if any
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// DFS discovery timestamp (0 if never discovered)
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// DFS finish timestamp (0 if never finished)
    pub fn finished(&self) -> usize {
        self.finished
    }

    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing (target, weight) entries, parallel edges included
    pub fn adjacency(&self) -> &[(VertexId, W)] {
        &self.adjacency
    }
}

/// Edge (u, v) with weight w, identified by endpoint labels
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: String,
    pub to: String,
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    pub fn new(from: &str, to: &str, weight: W) -> Self {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }
}

impl<W: Weight> Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}), w({})", self.from, self.to, self.weight)
    }
}
