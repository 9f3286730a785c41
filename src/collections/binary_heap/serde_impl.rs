//! Serde support.
//!
//! A heap serializes as a plain sequence in internal array order. Any
//! sequence deserializes into a valid heap because the loaded elements are
//! heapified, so hand-written or reordered input is accepted.

use super::BinaryHeap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for BinaryHeap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for BinaryHeap<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(BinaryHeap::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_array_order() {
        let heap = BinaryHeap::from(vec![10, 20, 5, 15]);
        let json = serde_json::to_string(&heap).unwrap();
        let expected = serde_json::to_string(heap.as_slice()).unwrap();
        assert_eq!(json, expected);
    }

    #[test]
    fn test_deserialize_unordered_input_heapifies() {
        let heap: BinaryHeap<i32> = serde_json::from_str("[1, 2, 3, 4, 5, 6, 7]").unwrap();
        assert!(heap.is_valid());
        assert_eq!(heap.peek_max(), Ok(&7));
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_deserialize_empty() {
        let heap: BinaryHeap<u8> = serde_json::from_str("[]").unwrap();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_non_sequence() {
        let res: Result<BinaryHeap<i32>, _> = serde_json::from_str("{\"a\": 1}");
        assert!(res.is_err());
    }
}
