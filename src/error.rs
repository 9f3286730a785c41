//! Error type for heap operations.

use core::fmt;

/// The error type for heap operations that need at least one element.
///
/// Only [`peek_max`](crate::BinaryHeap::peek_max) and
/// [`extract_max`](crate::BinaryHeap::extract_max) can fail; every other
/// operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs a root element but the heap holds none.
    Empty {
        /// Name of the operation that was attempted.
        op: &'static str,
    },
}

impl HeapError {
    pub(crate) fn empty(op: &'static str) -> Self {
        crate::trace::heap_debug!(op, "operation on empty heap");
        HeapError::Empty { op }
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty { op } => write!(f, "{op} called on an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Result alias used by fallible heap operations.
pub type Result<T, E = HeapError> = core::result::Result<T, E>;
