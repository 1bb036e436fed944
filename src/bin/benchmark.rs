use std::env;
use std::time::{Duration, Instant};

use algor::graph::generators::{random_weighted_graph, vertex_label};
use algor::{bfs, dfs, dfs_iterative, dijkstra, strongly_connected_components, DirectedGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark parameters, overridable positionally: `benchmark [max_size] [edge_factor] [seed]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    sizes: Vec<usize>,
    edge_factor: f64,
    max_weight: i64,
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 5_000, 20_000],
            edge_factor: 2.0,
            max_weight: 100,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    fn from_args(args: &[String]) -> Self {
        let mut config = Self::default();
        if let Some(max) = args.get(1).and_then(|a| a.parse::<usize>().ok()) {
            config.sizes.retain(|&s| s < max);
            config.sizes.push(max);
        }
        if let Some(factor) = args.get(2).and_then(|a| a.parse().ok()) {
            config.edge_factor = factor;
        }
        if let Some(seed) = args.get(3).and_then(|a| a.parse().ok()) {
            config.seed = seed;
        }
        config
    }
}

// Times one algorithm run on a fresh copy of the graph
fn time_run<F>(name: &str, graph: &DirectedGraph, run: F) -> Duration
where
    F: FnOnce(&mut DirectedGraph),
{
    let mut scratch = graph.clone();
    let start = Instant::now();
    run(&mut scratch);
    let duration = start.elapsed();
    println!("  - {:<14} {:?}", name, duration);
    duration
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);
    let mut rng = StdRng::seed_from_u64(config.seed);

    println!("=====================================================");
    println!("Benchmark: BFS, DFS, SCC and Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", config.edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &config.sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_weighted_graph(size, config.edge_factor, config.max_weight, &mut rng);
        let source = vertex_label(0);
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let bfs_time = time_run("bfs", &graph, |g| {
            bfs(g, &source);
        });
        let dfs_time = time_run("dfs", &graph, |g| {
            dfs(g);
        });
        let dfs_iter_time = time_run("dfs (stack)", &graph, |g| {
            dfs_iterative(g);
        });
        let scc_time = time_run("scc", &graph, |g| {
            let components = strongly_connected_components(g);
            println!("    {} components", components.len());
        });
        let dijkstra_time = time_run("dijkstra", &graph, |g| {
            if let Err(e) = dijkstra(g, &source) {
                eprintln!("    dijkstra failed: {}", e);
            }
        });

        results.push((size, bfs_time, dfs_time, dfs_iter_time, scc_time, dijkstra_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<12} | {:<10} | {:<10}",
        "Vertices", "BFS (ms)", "DFS (ms)", "DFS-Stk (ms)", "SCC (ms)", "Dijk (ms)"
    );
    println!("-----------------------------------------------------");
    for (size, bfs_time, dfs_time, dfs_iter_time, scc_time, dijkstra_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<10} | {:<12} | {:<10} | {:<10}",
            size,
            bfs_time.as_millis(),
            dfs_time.as_millis(),
            dfs_iter_time.as_millis(),
            scc_time.as_millis(),
            dijkstra_time.as_millis()
        );
    }
}
