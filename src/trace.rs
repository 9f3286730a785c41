//! Feature-gated structured logging.
//!
//! With the `tracing` feature enabled these macros forward to the `tracing`
//! crate; without it they expand to nothing and their arguments are never
//! evaluated.

#[cfg(feature = "tracing")]
macro_rules! heap_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "maxheap", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! heap_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! heap_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "maxheap", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! heap_debug {
    ($($arg:tt)*) => {};
}

pub(crate) use heap_debug;
pub(crate) use heap_trace;
