use log::{debug, trace};

use crate::data_structures::{BinaryHeap, HeapKeys};
use crate::graph::{Color, DirectedGraph, VertexId, Weight};
use crate::{Error, Result};

/// Min-heap storage of (distance, vertex) keys that remembers where each
/// vertex currently sits, so a relaxed vertex can be sifted up directly
#[derive(Debug)]
struct DistanceQueue<W> {
    entries: Vec<(W, VertexId)>,
    /// vertex index -> position in `entries`, `None` once extracted
    positions: Vec<Option<usize>>,
}

impl<W: Weight> DistanceQueue<W> {
    fn with_capacity(n: usize) -> Self {
        DistanceQueue {
            entries: Vec::with_capacity(n),
            positions: vec![None; n],
        }
    }

    fn position(&self, v: VertexId) -> Option<usize> {
        self.positions[v.index()]
    }
}

impl<W: Weight> HeapKeys for DistanceQueue<W> {
    type Key = (W, VertexId);

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, i: usize) -> &Self::Key {
        &self.entries[i]
    }

    fn set(&mut self, i: usize, key: Self::Key) {
        self.positions[key.1.index()] = Some(i);
        self.entries[i] = key;
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.positions[self.entries[i].1.index()] = Some(i);
        self.positions[self.entries[j].1.index()] = Some(j);
    }

    fn push(&mut self, key: Self::Key) {
        self.positions[key.1.index()] = Some(self.entries.len());
        self.entries.push(key);
    }

    fn pop(&mut self) -> Option<Self::Key> {
        let key = self.entries.pop()?;
        self.positions[key.1.index()] = None;
        Some(key)
    }
}

/// Sets every distance to infinity except the source's, which becomes 0
fn init_single_source<W: Weight>(graph: &mut DirectedGraph<W>, source: VertexId) {
    let ids: Vec<VertexId> = graph.ids().collect();
    for id in ids {
        let vertex = graph.get_mut(id);
        vertex.color = Color::Unvisited;
        vertex.distance = W::infinity();
        vertex.predecessor = None;
    }
    graph.get_mut(source).distance = W::zero();
}

/// Improves the estimate for `v` through `u` if the edge (u, v) gives a
/// shorter path, keeping the queue key in step
fn relax<W: Weight>(
    graph: &mut DirectedGraph<W>,
    queue: &mut BinaryHeap<DistanceQueue<W>>,
    u: VertexId,
    v: VertexId,
    weight: W,
) {
    let candidate = graph.get(u).distance.saturating_add(weight);
    let target = graph.get_mut(v);
    if candidate >= target.distance {
        return;
    }
    trace!(
        "relax: {} from {} to {}",
        target.label,
        target.distance,
        candidate
    );
    target.distance = candidate;
    target.predecessor = Some(u);
    if let Some(pos) = queue.keys().position(v) {
        queue.decrease_key(pos, (candidate, v));
    }
}

/// Dijkstra's single-source shortest paths from the vertex labeled `source`
///
/// Every vertex is extracted from a min-heap keyed by its current distance
/// and its outgoing edges are relaxed. Returns the labels in extraction
/// order; afterwards each vertex holds its shortest distance and the
/// predecessor on one shortest path. Unreachable vertices come last and
/// keep the infinite sentinel ([`Weight::infinity`]).
///
/// Relaxations move the affected vertex within the heap directly, so the
/// run is O((V + E) log V).
///
/// Fails if the source is absent or any edge weight is negative.
pub fn dijkstra<W: Weight>(graph: &mut DirectedGraph<W>, source: &str) -> Result<Vec<String>> {
    let s = graph
        .id(source)
        .ok_or_else(|| Error::VertexNotFound(source.to_string()))?;
    if let Some(edge) = graph.first_negative_edge() {
        return Err(Error::NegativeWeight(edge.from.clone(), edge.to.clone()));
    }

    init_single_source(graph, s);

    let n = graph.vertex_count();
    let mut keys = DistanceQueue::with_capacity(n);
    for id in graph.ids() {
        keys.push((graph.get(id).distance, id));
    }
    let mut queue = BinaryHeap::new(keys);
    queue.build_min_heap();

    let mut order = Vec::with_capacity(n);
    while let Some((_, u)) = queue.extract_min() {
        let vertex = graph.get_mut(u);
        vertex.color = Color::Finished;
        order.push(vertex.label.clone());

        for i in 0..graph.get(u).adjacency.len() {
            let (v, weight) = graph.get(u).adjacency[i];
            relax(graph, &mut queue, u, v, weight);
        }
    }

    debug!(
        "dijkstra from {} settled {} of {} vertices",
        source,
        graph.vertices().filter(|v| !v.distance().is_infinite()).count(),
        n
    );
    Ok(order)
}
