//! Index arithmetic and re-balancing procedures over a heap-ordered slice.
//!
//! All functions operate on `&mut [T]` so the same code serves the live heap,
//! the bulk-load rebuild and the in-place heapsort of `into_sorted_vec`.
//!
//! Indices are `usize` throughout. A `Vec<T>` never holds more than
//! `isize::MAX` bytes, so for any valid index `i` the child index `2 * i + 2`
//! cannot overflow.

/// Parent of `node`. Callers guarantee `node > 0`.
#[inline]
pub(crate) const fn parent(node: usize) -> usize {
    (node - 1) / 2
}

#[inline]
pub(crate) const fn left(node: usize) -> usize {
    2 * node + 1
}

#[inline]
pub(crate) const fn right(node: usize) -> usize {
    2 * node + 2
}

/// Moves the element at `node` towards the root until its parent is no
/// longer smaller. Returns the final position.
pub(crate) fn sift_up<T: Ord>(data: &mut [T], mut node: usize) -> usize {
    while node > 0 {
        let up = parent(node);
        if data[up] < data[node] {
            data.swap(up, node);
            node = up;
        } else {
            break;
        }
    }
    node
}

/// Moves the element at `node` towards the leaves, considering only the
/// first `end` elements of `data`.
///
/// Children are compared with strict `>`, so an equal child never displaces
/// its parent.
pub(crate) fn sift_down_range<T: Ord>(data: &mut [T], mut node: usize, end: usize) {
    loop {
        let l = left(node);
        let r = right(node);
        let mut largest = node;

        if l < end && data[l] > data[largest] {
            largest = l;
        }
        if r < end && data[r] > data[largest] {
            largest = r;
        }

        if largest == node {
            return;
        }
        data.swap(node, largest);
        node = largest;
    }
}

#[inline]
pub(crate) fn sift_down<T: Ord>(data: &mut [T], node: usize) {
    let end = data.len();
    sift_down_range(data, node, end);
}

/// Restores the max-heap property over the whole slice in linear time by
/// sifting down every internal node, last one first.
pub(crate) fn heapify<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for node in (0..len / 2).rev() {
        sift_down_range(data, node, len);
    }
}

/// Returns `true` if every parent is `>=` each of its children.
pub(crate) fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|child| data[parent(child)] >= data[child])
}

/// Debug-asserts the heap invariant. No-op in release builds.
#[inline(always)]
pub(crate) fn debug_assert_heap<T: Ord>(data: &[T]) {
    debug_assert!(is_max_heap(data), "max-heap invariant violated");
}
