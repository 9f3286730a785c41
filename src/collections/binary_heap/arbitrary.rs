//! `proptest` strategies for downstream property tests.

use super::BinaryHeap;
use core::fmt;
use proptest::arbitrary::{any_with, Arbitrary};
use proptest::collection::{vec, SizeRange, VecStrategy};
use proptest::strategy::{Map, Strategy};

impl<T> Arbitrary for BinaryHeap<T>
where
    T: Arbitrary + Ord + fmt::Debug,
{
    type Parameters = (SizeRange, T::Parameters);
    type Strategy = Map<VecStrategy<T::Strategy>, fn(Vec<T>) -> Self>;

    fn arbitrary_with((size, element): Self::Parameters) -> Self::Strategy {
        vec(any_with::<T>(element), size).prop_map(<Self as From<Vec<T>>>::from as fn(Vec<T>) -> Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_arbitrary_heaps_are_valid(heap in any::<BinaryHeap<i16>>()) {
            prop_assert!(heap.is_valid());
        }
    }
}
