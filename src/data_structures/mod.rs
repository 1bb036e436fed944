pub mod binary_heap;

pub use binary_heap::{BinaryHeap, HeapKeys};
