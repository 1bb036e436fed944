pub mod traversal;
pub mod dfs;
pub mod ordering;
pub mod components;
pub mod dijkstra;

pub use dfs::{Dfs, DfsStrategy, DfsVisitor, EdgeKind, VisitedEdge};
