//! Algor - classic graph algorithms over a labeled adjacency-list graph
//!
//! This library implements the textbook traversal and shortest-path toolkit:
//! breadth-first search, depth-first search with discovery/finish timestamps,
//! transpose, topological sort, strongly connected components and Dijkstra's
//! algorithm driven by a generic array-backed binary heap.
//!
//! Graphs are built once from edge-pair lists and then mutated in place by
//! successive algorithm calls, which overwrite each vertex's color, distance,
//! predecessor and timestamps. Call [`DirectedGraph::reset`] between runs that
//! expect a clean state.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    components::{scc, strongly_connected_components},
    dfs::{
        dfs, dfs_iterative, walk_edges, walk_vertices, Dfs, DfsStrategy, DfsVisitor, EdgeKind,
        VisitedEdge,
    },
    dijkstra::dijkstra,
    ordering::{is_dag, topological_sort},
    traversal::{bfs, diameter, path, print_path},
};
pub use data_structures::{BinaryHeap, HeapKeys};
/// Re-export main types for convenient use
pub use graph::directed::{
    build_graph, build_undirected_graph, build_weighted_graph, transpose, DirectedGraph,
};
pub use graph::{Color, Edge, Vertex, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("Vertex not found in graph: {0}")]
    VertexNotFound(String),

    #[error("Negative edge weight on ({0}, {1})")]
    NegativeWeight(String, String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
