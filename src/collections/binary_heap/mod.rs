//! `BinaryHeap`: a max-priority queue implemented with a binary heap.
//!
//! Elements live in a single `Vec<T>` laid out in heap order: the children of
//! index `i` sit at `2i + 1` and `2i + 2`, and every parent is `>=` its
//! children. The root (index 0) is therefore always a greatest element.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | [`insert`](BinaryHeap::insert), [`emplace`](BinaryHeap::emplace) | O(log n) amortized |
//! | [`extract_max`](BinaryHeap::extract_max) | O(log n) |
//! | [`peek_max`](BinaryHeap::peek_max) | O(1) |
//! | [`insert_range`](BinaryHeap::insert_range) | O(n + k) |
//! | [`swap_with`](BinaryHeap::swap_with) | O(1) |
//!
//! # Concurrency
//!
//! The heap has no internal synchronization. Share it between threads by
//! wrapping it in a lock such as `std::sync::Mutex`.
//!
//! # Maximum size
//!
//! Indices are `usize`. The heap holds at most as many elements as a
//! `Vec<T>` can, and every child index computed for a valid parent fits in
//! `usize`.

mod iter;
mod serde_impl;
mod sift;

#[cfg(feature = "proptest")]
mod arbitrary;

pub use iter::{Drain, IntoIter, IntoSorted, Iter};

use crate::error::{HeapError, Result};
use crate::trace::heap_trace;
use core::fmt;

/// A max-priority queue implemented with a binary heap.
///
/// This structure guarantees that the first element is always a greatest
/// element. Fallible access to the root goes through
/// [`peek_max`](Self::peek_max) and [`extract_max`](Self::extract_max), which
/// return [`HeapError::Empty`] instead of panicking.
///
/// # Examples
///
/// ```
/// use maxheap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(10);
/// heap.insert(20);
/// heap.insert(5);
///
/// assert_eq!(heap.peek_max(), Ok(&20));
/// assert_eq!(heap.extract_max(), Ok(20));
/// assert_eq!(heap.size(), 2);
/// ```
pub struct BinaryHeap<T> {
    data: Vec<T>,
}

impl<T> BinaryHeap<T> {
    /// Creates an empty binary heap.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty binary heap with space for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the capacity as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Drops all elements. Calling it on an empty heap does nothing.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchanges the contents of two heaps.
    ///
    /// Only the storage handles move; no element is copied, so the cost does
    /// not depend on either heap's size. Both heaps stay valid since each
    /// receives a complete heap from the other.
    pub fn swap_with(&mut self, other: &mut Self) {
        heap_trace!(
            self_len = self.data.len(),
            other_len = other.data.len(),
            "swapping heap storage"
        );
        core::mem::swap(&mut self.data, &mut other.data);
    }

    /// Returns the elements in internal array order.
    ///
    /// This is heap order, not sorted order: only the first element is
    /// guaranteed to be a maximum.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in internal array order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Removes every element, yielding them in internal array order.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.data.drain(..),
        }
    }

    /// Consumes the heap and returns its storage in internal array order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> BinaryHeap<T> {
    /// Copies the elements in internal array order into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Inserts `value`, then sifts it up to its place.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift::sift_up(&mut self.data, last);
    }

    /// Builds a new element from `args` at the end of the storage and sifts
    /// it up.
    ///
    /// Ordering behaviour is identical to [`insert`](Self::insert); the only
    /// difference is that the caller hands over construction arguments
    /// instead of a finished `T`.
    ///
    /// ```
    /// use maxheap::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<String> = BinaryHeap::new();
    /// heap.emplace("pear");
    /// heap.emplace("apple");
    /// assert_eq!(heap.peek_max().map(String::as_str), Ok("pear"));
    /// ```
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.insert(T::from(args));
    }

    /// Appends every element of `elements` in iteration order, then rebuilds
    /// the heap bottom-up.
    ///
    /// The rebuild sifts down every internal node from `len / 2 - 1` to `0`,
    /// which is linear in the final size. Prefer this over repeated
    /// [`insert`](Self::insert) calls when loading many elements.
    pub fn insert_range<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.data.len();
        self.data.extend(elements);
        if self.data.len() == before {
            return;
        }
        heap_trace!(
            added = self.data.len() - before,
            len = self.data.len(),
            "rebuilding heap after bulk load"
        );
        self.rebuild();
    }

    /// Removes and returns a greatest element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty; the heap is left
    /// unchanged.
    pub fn extract_max(&mut self) -> Result<T> {
        self.pop().ok_or_else(|| HeapError::empty("extract_max"))
    }

    /// Returns a greatest element without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek_max(&self) -> Result<&T> {
        self.peek().ok_or_else(|| HeapError::empty("peek_max"))
    }

    /// Removes and returns a greatest element, or `None` if the heap is
    /// empty.
    ///
    /// The last element takes the root's place and is sifted down.
    pub fn pop(&mut self) -> Option<T> {
        let mut item = self.data.pop()?;
        if !self.data.is_empty() {
            core::mem::swap(&mut item, &mut self.data[0]);
            sift::sift_down(&mut self.data, 0);
        }
        Some(item)
    }

    /// Returns a greatest element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        if other.data.len() > self.data.len() {
            self.swap_with(other);
        }
        let moved = core::mem::take(&mut other.data);
        self.insert_range(moved);
    }

    /// Keeps only the elements for which `keep` returns `true`, then
    /// rebuilds the heap.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.data.len();
        self.data.retain(keep);
        if self.data.len() != before {
            heap_trace!(
                removed = before - self.data.len(),
                len = self.data.len(),
                "rebuilding heap after retain"
            );
            self.rebuild();
        }
    }

    /// Returns `true` if every parent is `>=` each of its children.
    ///
    /// Always `true` for a heap built through this type's API.
    pub fn is_valid(&self) -> bool {
        sift::is_max_heap(&self.data)
    }

    /// Consumes the heap and returns its elements in ascending order.
    ///
    /// Sorts in place with heapsort; no extra allocation.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            sift::sift_down_range(&mut self.data, 0, end);
        }
        self.data
    }

    /// Consumes the heap and returns an iterator yielding elements in
    /// non-increasing order.
    pub fn into_iter_sorted(self) -> IntoSorted<T> {
        IntoSorted { heap: self }
    }

    fn rebuild(&mut self) {
        sift::heapify(&mut self.data);
        sift::debug_assert_heap(&self.data);
    }
}

impl<T> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Prints the elements in internal array order separated by single spaces.
impl<T: fmt::Display> fmt::Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.data.iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Heapifies `vec` in place in linear time.
    fn from(vec: Vec<T>) -> Self {
        let mut heap = Self { data: vec };
        heap_trace!(len = heap.data.len(), "heapifying vector");
        heap.rebuild();
        heap
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinaryHeap<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from(Vec::from(arr))
    }
}

impl<T> From<BinaryHeap<T>> for Vec<T> {
    fn from(heap: BinaryHeap<T>) -> Self {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_range(iter);
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_range(iter.into_iter().copied());
    }
}
