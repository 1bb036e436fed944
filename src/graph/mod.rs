pub mod traits;
pub mod vertex;
pub mod directed;
pub mod generators;
pub mod input;

pub use traits::Weight;
pub use vertex::{Color, Edge, Vertex, VertexId};
pub use directed::DirectedGraph;
