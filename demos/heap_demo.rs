//! Walks through the `BinaryHeap` API, printing the heap after each step.
//!
//! Heaps print in internal array order, not sorted order.

use anyhow::{Context, Result};
use maxheap::BinaryHeap;
use serde::Serialize;

#[derive(Serialize)]
struct Snapshot<'a> {
    label: &'a str,
    size: usize,
    heap: &'a BinaryHeap<i32>,
}

fn main() -> Result<()> {
    println!("BinaryHeap Demo");
    println!("===============");

    let mut pq1 = BinaryHeap::new();

    for value in [10, 20, 5, 15] {
        pq1.insert(value);
    }
    println!("After insert: {pq1}");

    let top = pq1.peek_max().context("heap should hold the inserted values")?;
    println!("Max element: {top}");

    let removed = pq1.extract_max()?;
    println!("Extracted {removed}, heap is now: {pq1}");

    println!("Is empty? {}", if pq1.is_empty() { "Yes" } else { "No" });
    println!("Size: {}", pq1.size());

    pq1.emplace(25);
    pq1.emplace(8);
    println!("After emplace: {pq1}");

    pq1.insert_range(vec![30, 12, 18]);
    println!("After insert_range: {pq1}");

    pq1.clear();
    println!("After clear: {pq1}");
    if let Err(err) = pq1.extract_max() {
        println!("Extract on cleared heap: {err}");
    }

    let mut pq2 = BinaryHeap::new();
    pq2.insert(50);
    pq2.insert(60);
    pq2.insert(40);

    println!("Before swap - PQ1: {pq1}");
    println!("Before swap - PQ2: {pq2}");

    pq1.swap_with(&mut pq2);

    println!("After swap - PQ1: {pq1}");
    println!("After swap - PQ2: {pq2}");

    let snapshots = [
        Snapshot {
            label: "pq1",
            size: pq1.size(),
            heap: &pq1,
        },
        Snapshot {
            label: "pq2",
            size: pq2.size(),
            heap: &pq2,
        },
    ];
    let json = serde_json::to_string_pretty(&snapshots).context("serializing heap snapshots")?;
    println!("\nSnapshot:\n{json}");

    Ok(())
}
