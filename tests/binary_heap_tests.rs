use maxheap::{BinaryHeap, HeapError};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::thread;

fn extract_all<T: Ord>(heap: &mut BinaryHeap<T>) -> Vec<T> {
    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.extract_max().unwrap());
    }
    out
}

#[test]
fn test_insert_peek_extract_scenario() {
    let mut heap = BinaryHeap::new();
    heap.insert(10);
    heap.insert(20);
    heap.insert(5);
    heap.insert(15);

    assert_eq!(*heap.peek_max().unwrap(), 20);
    assert_eq!(heap.extract_max().unwrap(), 20);
    assert_eq!(extract_all(&mut heap), vec![15, 10, 5]);
}

#[test]
fn test_swap_scenario() {
    let mut a = BinaryHeap::new();
    a.insert_range([10, 20, 5, 15]);
    let mut b = BinaryHeap::new();
    b.insert_range([50, 60, 40]);

    a.swap_with(&mut b);

    assert_eq!(extract_all(&mut a), vec![60, 50, 40]);
    assert_eq!(extract_all(&mut b), vec![20, 15, 10, 5]);
}

#[test]
fn test_empty_error_scenario() {
    let mut fresh: BinaryHeap<String> = BinaryHeap::new();
    assert!(matches!(fresh.peek_max(), Err(HeapError::Empty { .. })));
    assert!(matches!(fresh.extract_max(), Err(HeapError::Empty { .. })));
    assert_eq!(fresh.size(), 0);

    let mut cleared = BinaryHeap::from(vec!["a".to_string(), "b".to_string()]);
    cleared.clear();
    assert!(matches!(cleared.peek_max(), Err(HeapError::Empty { .. })));
    assert!(matches!(cleared.extract_max(), Err(HeapError::Empty { .. })));
    assert_eq!(cleared.size(), 0);
}

#[test]
fn test_error_propagates_through_anyhow() {
    fn take_two(heap: &mut BinaryHeap<i32>) -> anyhow::Result<(i32, i32)> {
        let first = heap.extract_max()?;
        let second = heap.extract_max()?;
        Ok((first, second))
    }

    let mut heap = BinaryHeap::from(vec![3]);
    let err = take_two(&mut heap).unwrap_err();
    assert_eq!(err.to_string(), "extract_max called on an empty heap");
    assert_eq!(
        err.downcast_ref::<HeapError>(),
        Some(&HeapError::Empty { op: "extract_max" })
    );
}

#[test]
fn test_demo_sequence() {
    let mut pq = BinaryHeap::new();
    for x in [10, 20, 5, 15] {
        pq.insert(x);
    }
    assert_eq!(pq.to_string(), "20 15 5 10");

    pq.extract_max().unwrap();
    assert_eq!(pq.to_string(), "15 10 5");
    assert!(!pq.is_empty());
    assert_eq!(pq.size(), 3);

    pq.emplace(25);
    pq.emplace(8);
    assert_eq!(pq.peek_max(), Ok(&25));

    pq.insert_range(vec![30, 12, 18]);
    assert_eq!(pq.size(), 8);
    assert_eq!(pq.peek_max(), Ok(&30));
    assert!(pq.is_valid());

    pq.clear();
    assert_eq!(pq.to_string(), "");
}

#[test]
fn test_shared_behind_mutex() {
    let heap = Arc::new(Mutex::new(BinaryHeap::new()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let heap = Arc::clone(&heap);
            thread::spawn(move || {
                for i in 0..250 {
                    heap.lock().unwrap().insert(t * 1000 + i);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut heap = Arc::try_unwrap(heap).unwrap().into_inner().unwrap();
    assert_eq!(heap.size(), 1000);
    assert!(heap.is_valid());
    assert_eq!(heap.extract_max(), Ok(3249));
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
struct Task {
    priority: u32,
    name: String,
}

#[test]
fn test_serde_json_round_trip_keeps_multiset() {
    let mut heap = BinaryHeap::new();
    heap.insert(Task { priority: 3, name: "compile".into() });
    heap.insert(Task { priority: 7, name: "deploy".into() });
    heap.insert(Task { priority: 1, name: "lint".into() });

    let json = serde_json::to_string(&heap).unwrap();
    let back: BinaryHeap<Task> = serde_json::from_str(&json).unwrap();

    assert!(back.is_valid());
    assert_eq!(back.as_slice(), heap.as_slice());
    let names: Vec<_> = back.into_iter_sorted().map(|t| t.name).collect();
    assert_eq!(names, vec!["deploy", "compile", "lint"]);
}

#[test]
fn test_deserialize_from_unordered_json() {
    let json = r#"[
        {"priority": 1, "name": "a"},
        {"priority": 5, "name": "b"},
        {"priority": 3, "name": "c"}
    ]"#;
    let heap: BinaryHeap<Task> = serde_json::from_str(json).unwrap();
    assert!(heap.is_valid());
    assert_eq!(heap.peek_max().unwrap().name, "b");
}
