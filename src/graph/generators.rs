use rand::Rng;

use crate::graph::DirectedGraph;

/// Label used for the i-th generated vertex
pub fn vertex_label(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a random directed graph with n vertices and about
/// `edge_factor * n` edges (self-loops and parallel edges allowed)
pub fn random_graph<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> DirectedGraph {
    random_weighted_graph(n, edge_factor, 0, rng)
}

/// Generates a random directed graph whose edge weights are drawn
/// uniformly from `0..=max_weight`
pub fn random_weighted_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(&vertex_label(i));
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = if max_weight > 0 {
            rng.gen_range(0..=max_weight)
        } else {
            0
        };
        graph.add_edge(&vertex_label(u), &vertex_label(v), weight);
    }

    graph
}

/// Generates a random DAG: each forward pair (i, j) with i < j is
/// connected with probability p, so the labels v0..vn are already a
/// topological order
pub fn random_dag<R: Rng>(n: usize, p: f64, rng: &mut R) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(&vertex_label(i));
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(&vertex_label(i), &vertex_label(j), 0);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_graph_has_all_vertices() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_graph(50, 2.0, &mut rng);
        assert_eq!(g.vertex_count(), 50);
        assert_eq!(g.edge_count(), 100);
    }

    #[test]
    fn test_random_dag_edges_point_forward() {
        let mut rng = StdRng::seed_from_u64(11);
        let g = random_dag(30, 0.2, &mut rng);
        for edge in g.edges() {
            let from: usize = edge.from[1..].parse().unwrap();
            let to: usize = edge.to[1..].parse().unwrap();
            assert!(from < to);
        }
    }
}
