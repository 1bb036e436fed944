use std::collections::VecDeque;
use std::io::Write;

use log::{debug, trace};

use crate::graph::{Color, DirectedGraph, VertexId, Weight};
use crate::Result;

/// Breadth-first search from the vertex labeled `source`
///
/// Discovers every vertex reachable from the source in non-decreasing
/// order of edge count, recording `distance` (edges from the source) and
/// `predecessor` the first time each vertex is reached. Returns false if
/// the source is not in the graph.
///
/// Only `Unvisited` vertices are discovered, so a second search without
/// [`DirectedGraph::reset`] silently skips everything the first one finished.
pub fn bfs<W: Weight>(graph: &mut DirectedGraph<W>, source: &str) -> bool {
    let Some(s) = graph.id(source) else {
        return false;
    };

    {
        let root = graph.get_mut(s);
        root.color = Color::Frontier;
        root.distance = W::zero();
        root.predecessor = None;
    }

    let mut queue = VecDeque::from([s]);
    let mut reached = 1;
    while let Some(u) = queue.pop_front() {
        let next = graph.get(u).distance.saturating_add(W::one());
        for i in 0..graph.get(u).adjacency.len() {
            let v = graph.get(u).adjacency[i].0;
            let target = graph.get_mut(v);
            if target.color == Color::Unvisited {
                target.color = Color::Frontier;
                target.distance = next;
                target.predecessor = Some(u);
                trace!("bfs: discovered {} at distance {}", target.label, next);
                queue.push_back(v);
                reached += 1;
            }
        }
        graph.get_mut(u).color = Color::Finished;
    }

    debug!("bfs from {} reached {} vertices", source, reached);
    true
}

/// Vertices on the predecessor chain from `source` to `dest`
fn path_ids<W: Weight>(
    graph: &DirectedGraph<W>,
    source: VertexId,
    dest: VertexId,
) -> Option<Vec<VertexId>> {
    let mut chain = vec![dest];
    let mut current = dest;
    while current != source {
        current = graph.get(current).predecessor?;
        chain.push(current);
        // A chain longer than |V| means the links are stale and cyclic
        if chain.len() > graph.vertex_count() {
            return None;
        }
    }
    chain.reverse();
    Some(chain)
}

/// Labels on a shortest path from `source` to `dest`, in order
///
/// Reads the predecessor links left by the last BFS (or Dijkstra) run.
/// Returns `None` if either label is unknown or `dest` is not linked back
/// to `source`.
pub fn path<W: Weight>(graph: &DirectedGraph<W>, source: &str, dest: &str) -> Option<Vec<String>> {
    let ids = path_ids(graph, graph.id(source)?, graph.id(dest)?)?;
    Some(
        ids.into_iter()
            .map(|id| graph.get(id).label().to_string())
            .collect(),
    )
}

/// Writes the vertices on the path from `source` to `dest`, one summary
/// line per vertex, or a "no path" line if `dest` is not linked back
///
/// Returns `Ok(false)` without writing anything if either label is absent.
pub fn print_path<O: Write, W: Weight>(
    out: &mut O,
    graph: &DirectedGraph<W>,
    source: &str,
    dest: &str,
) -> Result<bool> {
    let (Some(s), Some(d)) = (graph.id(source), graph.id(dest)) else {
        return Ok(false);
    };

    match path_ids(graph, s, d) {
        Some(ids) => {
            for id in ids {
                writeln!(out, "{}", graph.summary(id))?;
            }
        }
        None => writeln!(out, "no path from {} to {}", source, dest)?,
    }
    Ok(true)
}

/// Largest `distance` over all vertices
///
/// After a BFS from one endpoint of a longest path in a tree this is the
/// tree's diameter; the function does not pick the source itself.
pub fn diameter<W: Weight>(graph: &DirectedGraph<W>) -> W {
    graph
        .vertices()
        .map(|v| v.distance())
        .fold(W::zero(), |max, d| if d > max { d } else { max })
}
