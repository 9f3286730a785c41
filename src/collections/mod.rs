//! Collections provided by the crate.
//!
//! - `binary_heap`: vector-backed max-priority queue

pub mod binary_heap;

pub use binary_heap::BinaryHeap;
