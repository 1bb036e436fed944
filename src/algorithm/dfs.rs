//! Depth-first search with discovery/finish timestamps
//!
//! The search explores edges out of the most recently discovered vertex
//! that still has unexplored edges, backtracking once all of them are
//! explored. If undiscovered vertices remain, a new tree is started from
//! the next one, so the predecessor links form a forest.
//!
//! Every discovery and every finish advances a clock owned by the
//! traversal context of a single run; the first discovery is time 1 and a
//! run over n fresh vertices ends at time 2n.
//!
//! When an edge (u, v) is first explored, the color of v classifies it:
//! unvisited means a tree edge, frontier a back edge, finished a forward
//! or cross edge (forward if u was discovered before v).

use log::{debug, trace};

use crate::graph::{Color, DirectedGraph, Vertex, VertexId, Weight};

/// How a DFS walks the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DfsStrategy {
    /// Recursive visit; depth bounded by the longest search-tree path
    #[default]
    Recursive,
    /// Explicit stack; safe on very deep graphs
    Iterative,
}

/// Classification of an explored edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Tree,
    Back,
    Forward,
    Cross,
}

/// An adjacency entry examined during DFS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitedEdge<'g, W> {
    pub from: &'g str,
    pub to: &'g str,
    pub weight: W,
    pub kind: EdgeKind,
}

/// Hooks called by a depth-first search
pub trait DfsVisitor<W> {
    /// Called when a vertex turns frontier, after its discovery time is set
    fn discover_vertex(&mut self, _vertex: &Vertex<W>) {}

    /// Called once per vertex when it turns finished, after all its
    /// descendants have finished
    fn finish_vertex(&mut self, _vertex: &Vertex<W>) {}

    /// Called for every adjacency entry, in the order examined
    fn examine_edge(&mut self, _edge: VisitedEdge<'_, W>) {}
}

impl<W> DfsVisitor<W> for () {}

struct OnFinish<F>(F);

impl<W, F> DfsVisitor<W> for OnFinish<F>
where
    F: FnMut(&Vertex<W>),
{
    fn finish_vertex(&mut self, vertex: &Vertex<W>) {
        (self.0)(vertex)
    }
}

struct OnEdge<F>(F);

impl<W, F> DfsVisitor<W> for OnEdge<F>
where
    F: FnMut(VisitedEdge<'_, W>),
{
    fn examine_edge(&mut self, edge: VisitedEdge<'_, W>) {
        (self.0)(edge)
    }
}

/// Per-run traversal state: the clock and the visitor
struct Traversal<'v, V> {
    time: usize,
    visitor: &'v mut V,
}

impl<V> Traversal<'_, V> {
    fn discover<W: Weight>(&mut self, graph: &mut DirectedGraph<W>, u: VertexId)
    where
        V: DfsVisitor<W>,
    {
        self.time += 1;
        let vertex = graph.get_mut(u);
        vertex.color = Color::Frontier;
        vertex.discovered = self.time;
        trace!("dfs: discovered {} at {}", vertex.label, self.time);
        self.visitor.discover_vertex(vertex);
    }

    fn finish<W: Weight>(&mut self, graph: &mut DirectedGraph<W>, u: VertexId)
    where
        V: DfsVisitor<W>,
    {
        self.time += 1;
        let vertex = graph.get_mut(u);
        vertex.color = Color::Finished;
        vertex.finished = self.time;
        self.visitor.finish_vertex(vertex);
    }

    /// Reports the edge to the visitor and returns its kind
    fn examine<W: Weight>(
        &mut self,
        graph: &DirectedGraph<W>,
        u: VertexId,
        v: VertexId,
        weight: W,
    ) -> EdgeKind
    where
        V: DfsVisitor<W>,
    {
        let (from, to) = (graph.get(u), graph.get(v));
        let kind = match to.color {
            Color::Unvisited => EdgeKind::Tree,
            Color::Frontier => EdgeKind::Back,
            Color::Finished if from.discovered < to.discovered => EdgeKind::Forward,
            Color::Finished => EdgeKind::Cross,
        };
        self.visitor.examine_edge(VisitedEdge {
            from: from.label(),
            to: to.label(),
            weight,
            kind,
        });
        kind
    }
}

fn visit_recursive<W, V>(graph: &mut DirectedGraph<W>, u: VertexId, cx: &mut Traversal<'_, V>)
where
    W: Weight,
    V: DfsVisitor<W>,
{
    cx.discover(graph, u);
    for i in 0..graph.get(u).adjacency.len() {
        let (v, weight) = graph.get(u).adjacency[i];
        if cx.examine(graph, u, v, weight) == EdgeKind::Tree {
            graph.get_mut(v).predecessor = Some(u);
            visit_recursive(graph, v, cx);
        }
    }
    cx.finish(graph, u);
}

fn visit_iterative<W, V>(graph: &mut DirectedGraph<W>, root: VertexId, cx: &mut Traversal<'_, V>)
where
    W: Weight,
    V: DfsVisitor<W>,
{
    cx.discover(graph, root);
    // (vertex, index of the next adjacency entry to examine)
    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (u, i) = *frame;
        if i < graph.get(u).adjacency.len() {
            frame.1 += 1;
            let (v, weight) = graph.get(u).adjacency[i];
            if cx.examine(graph, u, v, weight) == EdgeKind::Tree {
                graph.get_mut(v).predecessor = Some(u);
                cx.discover(graph, v);
                stack.push((v, 0));
            }
        } else {
            stack.pop();
            cx.finish(graph, u);
        }
    }
}

/// Depth-first search options
#[derive(Debug, Clone, Default)]
pub struct Dfs {
    strategy: DfsStrategy,
}

impl Dfs {
    /// Create a new DFS with the recursive strategy
    pub fn new() -> Self {
        Dfs::default()
    }

    /// Set the traversal strategy
    pub fn with_strategy(mut self, strategy: DfsStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> DfsStrategy {
        self.strategy
    }

    /// Searches from every unvisited vertex in first-reference order and
    /// returns the final clock value
    pub fn run<W, V>(&self, graph: &mut DirectedGraph<W>, visitor: &mut V) -> usize
    where
        W: Weight,
        V: DfsVisitor<W>,
    {
        let roots: Vec<VertexId> = graph.ids().collect();
        self.run_in_order(graph, &roots, visitor)
    }

    /// Like [`Dfs::run`], but tries tree roots in the given order
    ///
    /// Vertices missing from `roots` are only reached through edges.
    pub fn run_in_order<W, V>(
        &self,
        graph: &mut DirectedGraph<W>,
        roots: &[VertexId],
        visitor: &mut V,
    ) -> usize
    where
        W: Weight,
        V: DfsVisitor<W>,
    {
        let mut cx = Traversal { time: 0, visitor };
        let mut trees = 0;
        for &root in roots {
            if graph.get(root).color != Color::Unvisited {
                continue;
            }
            trees += 1;
            match self.strategy {
                DfsStrategy::Recursive => visit_recursive(graph, root, &mut cx),
                DfsStrategy::Iterative => visit_iterative(graph, root, &mut cx),
            }
        }
        debug!(
            "{:?} dfs built {} trees, clock stopped at {}",
            self.strategy(), trees, cx.time
        );
        cx.time
    }
}

/// Recursive depth-first search over the whole graph
///
/// Expects every vertex to be unvisited; returns `2 * vertex_count` in
/// that case.
pub fn dfs<W: Weight>(graph: &mut DirectedGraph<W>) -> usize {
    Dfs::new().run(graph, &mut ())
}

/// Depth-first search with an explicit stack instead of recursion
pub fn dfs_iterative<W: Weight>(graph: &mut DirectedGraph<W>) -> usize {
    Dfs::new()
        .with_strategy(DfsStrategy::Iterative)
        .run(graph, &mut ())
}

/// Runs DFS, calling `on_finish` once per vertex as it finishes
pub fn walk_vertices<W, F>(graph: &mut DirectedGraph<W>, on_finish: F) -> usize
where
    W: Weight,
    F: FnMut(&Vertex<W>),
{
    Dfs::new().run(graph, &mut OnFinish(on_finish))
}

/// Runs DFS, calling `on_edge` for every adjacency entry examined
pub fn walk_edges<W, F>(graph: &mut DirectedGraph<W>, on_edge: F) -> usize
where
    W: Weight,
    F: FnMut(VisitedEdge<'_, W>),
{
    Dfs::new().run(graph, &mut OnEdge(on_edge))
}
