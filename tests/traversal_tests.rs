use algor::graph::generators::{random_dag, random_graph, vertex_label};
use algor::{
    bfs, build_graph, dfs, dfs_iterative, is_dag, scc, strongly_connected_components,
    topological_sort, walk_edges, walk_vertices, Dfs, DfsStrategy, DfsVisitor, DirectedGraph,
    EdgeKind, Vertex, VisitedEdge,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

fn reachable_from(graph: &DirectedGraph, source: &str) -> HashSet<String> {
    let mut scratch = graph.clone();
    scratch.reset();
    bfs(&mut scratch, source);
    scratch
        .vertices()
        .filter(|v| v.label() == source || v.predecessor().is_some())
        .map(|v| v.label().to_string())
        .collect()
}

#[test]
fn test_bfs_chain() {
    let mut g = build_graph([("A", "B"), ("B", "C"), ("C", "D")]);
    assert!(bfs(&mut g, "A"));
    assert_eq!(g.vertex("A").unwrap().distance(), 0);
    assert_eq!(g.vertex("D").unwrap().distance(), 3);
    assert_eq!(g.predecessor("D").unwrap().label(), "C");
}

#[test]
fn test_bfs_distances_are_shortest() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut g = random_graph(60, 2.0, &mut rng);
    assert!(bfs(&mut g, "v0"));

    // No edge can shorten a discovered distance by more than one hop
    for v in g.vertices() {
        if v.predecessor().is_none() && v.label() != "v0" {
            continue;
        }
        for &(target, _) in v.adjacency() {
            let t = g.get(target);
            assert!(t.distance() <= v.distance() + 1);
        }
        if let Some(p) = v.predecessor() {
            assert_eq!(g.get(p).distance() + 1, v.distance());
        }
    }
}

#[test]
fn test_dfs_timestamps_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..10 {
        let mut g = random_graph(50, 1.5, &mut rng);
        assert_eq!(dfs(&mut g), 2 * g.vertex_count());

        let mut seen = HashSet::new();
        for v in g.vertices() {
            assert!(v.discovered() < v.finished());
            assert!(seen.insert(v.discovered()));
            assert!(seen.insert(v.finished()));
            // A tree child is nested inside its parent's interval
            if let Some(p) = v.predecessor() {
                let parent = g.get(p);
                assert!(parent.discovered() < v.discovered());
                assert!(v.finished() < parent.finished());
            }
        }
    }
}

#[test]
fn test_iterative_dfs_equivalent() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..10 {
        let g = random_graph(80, 2.0, &mut rng);
        let mut recursive = g.clone();
        let mut iterative = g.clone();
        assert_eq!(dfs(&mut recursive), dfs_iterative(&mut iterative));

        let roots = |graph: &DirectedGraph| -> HashSet<String> {
            graph
                .vertices()
                .filter(|v| v.predecessor().is_none())
                .map(|v| v.label().to_string())
                .collect()
        };
        assert_eq!(roots(&recursive), roots(&iterative));
    }
}

// Records every hook call of a search
#[derive(Default)]
struct Recorder {
    discovered: Vec<String>,
    edges: Vec<(String, String, EdgeKind)>,
}

impl DfsVisitor<i64> for Recorder {
    fn discover_vertex(&mut self, vertex: &Vertex<i64>) {
        self.discovered.push(vertex.label().to_string());
    }

    fn examine_edge(&mut self, edge: VisitedEdge<'_, i64>) {
        self.edges
            .push((edge.from.to_string(), edge.to.to_string(), edge.kind));
    }
}

#[test]
fn test_iterative_dfs_classifies_edges_like_recursive() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..10 {
        let g = random_graph(60, 2.0, &mut rng);

        let mut expected = Vec::new();
        walk_edges(&mut g.clone(), |e| {
            expected.push((e.from.to_string(), e.to.to_string(), e.kind))
        });

        let search = Dfs::new().with_strategy(DfsStrategy::Iterative);
        assert_eq!(search.strategy(), DfsStrategy::Iterative);
        let mut searched = g.clone();
        let mut recorder = Recorder::default();
        search.run(&mut searched, &mut recorder);
        assert_eq!(recorder.edges, expected);

        // Discovery hook fires in timestamp order, once per vertex
        assert_eq!(recorder.discovered.len(), g.vertex_count());
        let stamps: Vec<usize> = recorder
            .discovered
            .iter()
            .map(|l| searched.vertex(l).unwrap().discovered())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_iterative_dfs_on_deep_chain() {
    let n = 200_000;
    let mut g: DirectedGraph = DirectedGraph::with_capacity(n);
    for i in 1..n {
        g.add_edge(&vertex_label(i - 1), &vertex_label(i), 0);
    }
    assert_eq!(g.vertex_count(), n);

    let mut searched = g.clone();
    assert_eq!(dfs_iterative(&mut searched), 2 * n);
    let last = searched.vertex(&vertex_label(n - 1)).unwrap();
    assert_eq!(last.discovered(), n);
    assert_eq!(last.finished(), n + 1);

    let components = strongly_connected_components(&mut g);
    assert_eq!(components.len(), n);
}

#[test]
fn test_walk_hooks_cover_graph() {
    let mut rng = StdRng::seed_from_u64(17);
    let g = random_graph(40, 2.0, &mut rng);

    let mut finished = Vec::new();
    walk_vertices(&mut g.clone(), |v| finished.push(v.label().to_string()));
    assert_eq!(finished.len(), g.vertex_count());
    let unique: HashSet<_> = finished.iter().collect();
    assert_eq!(unique.len(), g.vertex_count());

    let mut examined = 0;
    let mut tree_edges = 0;
    walk_edges(&mut g.clone(), |e| {
        examined += 1;
        if e.kind == EdgeKind::Tree {
            tree_edges += 1;
        }
    });
    assert_eq!(examined, g.edge_count());

    let mut searched = g.clone();
    dfs(&mut searched);
    let roots = searched.vertices().filter(|v| v.predecessor().is_none()).count();
    assert_eq!(tree_edges + roots, g.vertex_count());
}

#[test]
fn test_topological_sort_dressing() {
    let mut g = build_graph([
        ("undershorts", "pants"),
        ("pants", "belt"),
        ("pants", "shoes"),
        ("belt", "jacket"),
        ("undershorts", "shoes"),
        ("socks", "shoes"),
        ("shirt", "tie"),
        ("tie", "jacket"),
    ]);
    let order = topological_sort(&mut g);
    let pos: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    assert!(pos["undershorts"] < pos["pants"]);
    for successor in ["belt", "shoes"] {
        assert!(pos["pants"] < pos[successor]);
    }
    assert!(pos["belt"] < pos["jacket"]);
    assert!(pos["tie"] < pos["jacket"]);
}

#[test]
fn test_topological_sort_random_dags() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..10 {
        let mut g = random_dag(40, 0.1, &mut rng);
        assert!(is_dag(&g));
        let order = topological_sort(&mut g);
        assert_eq!(order.len(), g.vertex_count());

        let pos: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i))
            .collect();
        for e in g.edges() {
            assert!(pos[e.from.as_str()] < pos[e.to.as_str()]);
        }
    }
}

#[test]
fn test_scc_on_dag_gives_singletons() {
    let mut rng = StdRng::seed_from_u64(25);
    let mut g = random_dag(30, 0.15, &mut rng);
    let components = strongly_connected_components(&mut g);
    assert_eq!(components.len(), g.vertex_count());
    assert!(components.iter().all(|c| c.len() == 1));

    let gt = scc(&mut g);
    assert!(gt.vertices().all(|v| v.predecessor().is_none()));
}

#[test]
fn test_scc_matches_mutual_reachability() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..5 {
        let mut g = random_graph(30, 1.3, &mut rng);
        let components = strongly_connected_components(&mut g);

        let mut component_of = HashMap::new();
        for (i, c) in components.iter().enumerate() {
            for label in c {
                component_of.insert(label.clone(), i);
            }
        }
        assert_eq!(component_of.len(), g.vertex_count());

        let reach: HashMap<String, HashSet<String>> = g
            .labels()
            .map(|l| (l.to_string(), reachable_from(&g, l)))
            .collect();
        for u in g.labels() {
            for v in g.labels() {
                let mutual = reach[u].contains(v) && reach[v].contains(u);
                assert_eq!(mutual, component_of[u] == component_of[v], "{} {}", u, v);
            }
        }
    }
}
