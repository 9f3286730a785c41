//! # `maxheap` - Vector-Backed Max-Priority Queue
//!
//! A generic max-priority queue stored as a binary heap in one contiguous
//! `Vec<T>`. The greatest element is always at the front, insertion and
//! extraction cost O(log n), and bulk loading rebuilds the heap in linear
//! time.
//!
//! ## Guarantees
//!
//! - **Heap property**: after every public operation, each element is `>=`
//!   its children at indices `2i + 1` and `2i + 2`.
//! - **Explicit emptiness errors**: [`BinaryHeap::peek_max`] and
//!   [`BinaryHeap::extract_max`] return [`HeapError::Empty`] rather than
//!   panicking; they are the only fallible operations.
//! - **No hidden copies**: [`BinaryHeap::swap_with`] exchanges storage
//!   handles; elements are moved in and out, never cloned.
//!
//! The container is not synchronized. Wrap it in a lock to share it across
//! threads.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for bulk rebuilds, swaps and
//!   empty-heap errors.
//! - `proptest`: implement `proptest::arbitrary::Arbitrary` for
//!   [`BinaryHeap`].
//!
//! ## Example
//!
//! ```rust
//! use maxheap::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(10);
//! heap.insert(20);
//! heap.insert_range([5, 15]);
//!
//! assert_eq!(heap.peek_max(), Ok(&20));
//! assert_eq!(heap.extract_max(), Ok(20));
//!
//! heap.clear();
//! assert_eq!(heap.extract_max(), Err(HeapError::Empty { op: "extract_max" }));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
mod trace;

pub use collections::binary_heap::{self, BinaryHeap};
pub use error::{HeapError, Result};
