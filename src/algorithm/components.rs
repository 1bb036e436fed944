use std::collections::HashMap;

use log::debug;

use crate::algorithm::dfs::{Dfs, DfsStrategy};
use crate::graph::directed::transpose;
use crate::graph::{DirectedGraph, VertexId, Weight};

/// Strongly connected components, Kosaraju style
///
/// Resets `graph` and runs a DFS on it to obtain finish times, then runs a
/// second DFS on the transpose, trying roots in decreasing order of those
/// finish times. Each tree of the second search is one component.
///
/// Both passes use the explicit-stack search, so deep graphs are safe.
///
/// Returns the transposed graph with the second search's forest in its
/// predecessor links; `graph` is left holding the first search's state.
pub fn scc<W: Weight>(graph: &mut DirectedGraph<W>) -> DirectedGraph<W> {
    let search = Dfs::new().with_strategy(DfsStrategy::Iterative);
    graph.reset();
    search.run(graph, &mut ());

    let mut by_finish: Vec<VertexId> = graph.ids().collect();
    by_finish.sort_by(|a, b| graph.get(*b).finished().cmp(&graph.get(*a).finished()));

    let mut gt = transpose(graph);
    let roots: Vec<VertexId> = by_finish
        .iter()
        .filter_map(|&id| gt.id(graph.get(id).label()))
        .collect();
    search.run_in_order(&mut gt, &roots, &mut ());
    gt
}

/// Partitions the vertices into strongly connected components
///
/// Components come in the order the second search found them and list
/// their vertices by discovery time, root first.
pub fn strongly_connected_components<W: Weight>(graph: &mut DirectedGraph<W>) -> Vec<Vec<String>> {
    let gt = scc(graph);

    let mut by_discovery: Vec<VertexId> = gt.ids().collect();
    by_discovery.sort_by_key(|&id| gt.get(id).discovered());

    let mut components: Vec<Vec<String>> = Vec::new();
    let mut component_of: HashMap<VertexId, usize> = HashMap::new();
    for id in by_discovery {
        let label = gt.get(id).label().to_string();
        // A predecessor is always discovered first, so its component exists
        let component = match gt.get(id).predecessor() {
            Some(parent) => component_of[&parent],
            None => {
                components.push(Vec::new());
                components.len() - 1
            }
        };
        component_of.insert(id, component);
        components[component].push(label);
    }

    debug!(
        "found {} strongly connected components over {} vertices",
        components.len(),
        gt.vertex_count()
    );
    components
}
