use std::collections::VecDeque;

use log::debug;

use crate::algorithm::dfs::{walk_edges, walk_vertices, EdgeKind};
use crate::graph::{DirectedGraph, Weight};

/// Topological sort of a DAG: a linear ordering of all vertices such that
/// for every edge (u, v), u appears before v
///
/// Each vertex is prepended to the output as it finishes in a DFS. No
/// cycle check is made; on a cyclic graph the result is a plausible
/// looking but meaningless order. Check [`is_dag`] first when the input is
/// not known to be acyclic. Expects every vertex to be unvisited.
pub fn topological_sort<W: Weight>(graph: &mut DirectedGraph<W>) -> Vec<String> {
    let mut order = VecDeque::with_capacity(graph.vertex_count());
    walk_vertices(graph, |v| order.push_front(v.label().to_string()));
    debug!("topological sort ordered {} vertices", order.len());
    order.into()
}

/// Returns true if the graph has no cycle, i.e. DFS finds no back edge
///
/// Runs on a scratch copy, so the caller's search state is left as is.
pub fn is_dag<W: Weight>(graph: &DirectedGraph<W>) -> bool {
    let mut scratch = graph.clone();
    scratch.reset();

    let mut acyclic = true;
    walk_edges(&mut scratch, |edge| {
        if edge.kind == EdgeKind::Back {
            acyclic = false;
        }
    });
    acyclic
}
