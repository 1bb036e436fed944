use std::collections::HashMap;
use std::fmt::{self, Display};

use log::debug;

use crate::graph::{Edge, Vertex, VertexId, Weight};
use crate::{Error, Result};

/// A labeled directed graph implementation using adjacency lists
///
/// The graph exclusively owns its vertices. Adjacency entries and
/// predecessor links are plain [`VertexId`]s into the vertex table, and the
/// edge list refers to endpoints by label, so a transposed copy shares no
/// references with its source.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W = i64> {
    /// Vertex table in first-reference order
    vertices: Vec<Vertex<W>>,

    /// Label -> position in `vertices`
    index: HashMap<String, VertexId>,

    /// Every recorded edge, one entry per occurrence
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Default for DirectedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> DirectedGraph<W> {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edges: Vec::new(),
        }
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Looks up the id of a labeled vertex
    pub fn id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex<W>> {
        self.id(label).map(|id| &self.vertices[id.0])
    }

    /// Returns the vertex with the given id
    ///
    /// Panics if the id does not belong to this graph.
    pub fn get(&self, id: VertexId) -> &Vertex<W> {
        &self.vertices[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> &mut Vertex<W> {
        &mut self.vertices[id.0]
    }

    /// Iterates over vertices in first-reference order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<W>> + '_ {
        self.vertices.iter()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.label())
    }

    /// Labels of a vertex's neighbors, in insertion order
    pub fn adjacency(&self, label: &str) -> Option<Vec<&str>> {
        self.vertex(label).map(|v| {
            v.adjacency
                .iter()
                .map(|&(target, _)| self.vertices[target.0].label())
                .collect()
        })
    }

    /// The vertex `label` was discovered from during the last search
    pub fn predecessor(&self, label: &str) -> Option<&Vertex<W>> {
        self.vertex(label)
            .and_then(|v| v.predecessor)
            .map(|p| &self.vertices[p.0])
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the id for `label`, creating an isolated vertex on first reference
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(label));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Inserts a brand new vertex, failing if the label is already taken
    pub fn insert_vertex(&mut self, label: &str) -> Result<VertexId> {
        if self.contains(label) {
            return Err(Error::DuplicateVertex(label.to_string()));
        }
        Ok(self.add_vertex(label))
    }

    /// Adds a directed edge (from, to) with the given weight
    ///
    /// Both endpoints are created if absent. An empty `to` label only
    /// materialises `from` and records no edge; the return value tells
    /// whether an edge was recorded.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> bool {
        let u = self.add_vertex(from);
        if to.is_empty() {
            return false;
        }
        let v = self.add_vertex(to);
        self.push_edge(u, v, weight);
        true
    }

    /// Records (u, v) between existing vertices, whatever their labels
    fn push_edge(&mut self, u: VertexId, v: VertexId, weight: W) {
        self.vertices[u.0].adjacency.push((v, weight));
        let edge = Edge::new(self.vertices[u.0].label(), self.vertices[v.0].label(), weight);
        self.edges.push(edge);
    }

    /// Adds (a, b) and (b, a); a self-loop is recorded once
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: W) -> bool {
        if !self.add_edge(a, b, weight) {
            return false;
        }
        if a != b {
            self.add_edge(b, a, weight);
        }
        true
    }

    /// Returns every vertex to its unvisited state
    pub fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset();
        }
    }

    /// First edge carrying a negative weight, if any
    pub fn first_negative_edge(&self) -> Option<&Edge<W>> {
        self.edges.iter().find(|e| e.weight < W::zero())
    }

    /// Displays a one-line summary of the vertex with the given id
    pub fn summary(&self, id: VertexId) -> VertexSummary<'_, W> {
        VertexSummary { graph: self, id }
    }
}

/// One-line rendering of a vertex and its search metadata
///
/// `π` is the predecessor label (`NIL` for roots and undiscovered vertices).
pub struct VertexSummary<'g, W> {
    graph: &'g DirectedGraph<W>,
    id: VertexId,
}

impl<W: Weight> Display for VertexSummary<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.graph.get(self.id);
        let pred = v
            .predecessor
            .map(|p| self.graph.get(p).label())
            .unwrap_or("NIL");
        write!(f, "{}[c: {}, d: ", v.label, v.color)?;
        if v.distance.is_infinite() {
            f.write_str("∞")?;
        } else {
            write!(f, "{}", v.distance)?;
        }
        write!(
            f,
            ", π: {}, adj: {}, dstamp: {}, fstamp: {}]",
            pred,
            v.adjacency.len(),
            v.discovered,
            v.finished
        )
    }
}

impl<W: Weight> Display for DirectedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---Vertex Set---")?;
        for id in self.ids() {
            writeln!(f, "{}", self.summary(id))?;
        }
        writeln!(f)?;
        writeln!(f, "---Edge Set---")?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

/// Builds an unweighted graph from (u, v) label pairs
///
/// Each pair appends `v` to `u`'s adjacency list. Vertices are created on
/// first reference; a pair whose second label is empty creates an isolated
/// `u` and records no edge.
pub fn build_graph<I, A, B>(pairs: I) -> DirectedGraph
where
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut graph = DirectedGraph::new();
    for (u, v) in pairs {
        graph.add_edge(u.as_ref(), v.as_ref(), 0);
    }
    debug!(
        "built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

/// Builds a weighted graph from (u, v, w) triples
pub fn build_weighted_graph<W, I, A, B>(triples: I) -> DirectedGraph<W>
where
    W: Weight,
    I: IntoIterator<Item = (A, B, W)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut graph = DirectedGraph::new();
    for (u, v, w) in triples {
        graph.add_edge(u.as_ref(), v.as_ref(), w);
    }
    debug!(
        "built weighted graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

/// Builds an undirected graph by inserting every pair in both directions
pub fn build_undirected_graph<I, A, B>(pairs: I) -> DirectedGraph
where
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut graph = DirectedGraph::new();
    for (a, b) in pairs {
        graph.add_undirected_edge(a.as_ref(), b.as_ref(), 0);
    }
    graph
}

/// Transpose of G = (V, E) is Gt = (V, Et) with every edge reversed
///
/// Vertex labels keep their order and weights are preserved. The result
/// starts with fresh, unvisited search state.
pub fn transpose<W: Weight>(graph: &DirectedGraph<W>) -> DirectedGraph<W> {
    let mut gt = DirectedGraph::with_capacity(graph.vertex_count());
    for label in graph.labels() {
        gt.add_vertex(label);
    }
    // Ids line up because the vertex order is copied
    for (u, vertex) in graph.ids().zip(graph.vertices()) {
        for &(v, weight) in &vertex.adjacency {
            gt.push_edge(v, u, weight);
        }
    }
    debug!("transposed graph with {} edges", gt.edge_count());
    gt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_vertex_rejects_duplicates() {
        let mut g: DirectedGraph = DirectedGraph::new();
        assert!(g.insert_vertex("A").is_ok());
        assert!(matches!(g.insert_vertex("A"), Err(Error::DuplicateVertex(l)) if l == "A"));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_empty_target_creates_isolated_vertex() {
        let g = build_graph([("A", ""), ("A", "B"), ("C", "")]);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacency("C"), Some(vec![]));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let g = build_graph([("A", "B"), ("A", "B")]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.adjacency("A"), Some(vec!["B", "B"]));
    }

    #[test]
    fn test_undirected_insertion_is_symmetric() {
        let g = build_undirected_graph([("A", "B"), ("B", "C"), ("C", "C")]);
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.adjacency("B"), Some(vec!["A", "C"]));
        assert_eq!(g.adjacency("C"), Some(vec!["B", "C"]));
    }

    #[test]
    fn test_transpose_keeps_edges_into_empty_label() {
        let mut g: DirectedGraph = DirectedGraph::new();
        g.add_edge("", "B", 3);
        let gt = transpose(&g);
        assert_eq!(gt.edge_count(), 1);
        assert_eq!(gt.adjacency("B"), Some(vec![""]));
        assert_eq!(gt.edges(), &[Edge::new("B", "", 3)]);

        let back = transpose(&gt);
        assert_eq!(back.edges(), g.edges());
    }

    #[test]
    fn test_display_lists_vertices_and_edges() {
        let g = build_weighted_graph([("s", "a", 4)]);
        let text = g.to_string();
        assert!(text.contains("---Vertex Set---"));
        assert!(text.contains("s[c: unvisited, d: 0, π: NIL, adj: 1"));
        assert!(text.contains("(s, a), w(4)"));
    }
}
