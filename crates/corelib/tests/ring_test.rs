//! Integration tests for the hash ring.
//!
//! # Test Strategy
//!
//! 1. **Determinism**: identical inputs produce identical rings and walks
//! 2. **Walk guarantees**: uniqueness, completeness, early-stop prefixes
//! 3. **Node set**: deduplication and ordering fidelity
//! 4. **Consistent hashing**: minimal disruption when a node leaves
//! 5. **Hand-computed scenario**: exact table and fold results
//! 6. **Degenerate ring**: empty node list
//! 7. **Concurrency**: shared read-only access from multiple threads

use std::ops::ControlFlow;
use std::sync::Arc;
use std::thread;

use corelib::{HashAlgorithm, HashRing, RingBuilder};

/// Collects the full successor walk for `item`.
fn full_walk<'a>(ring: &'a HashRing<&'static str>, item: &str) -> Vec<&'a str> {
    ring.fold(item, Vec::new(), |mut acc, node| {
        acc.push(*node);
        ControlFlow::Continue(acc)
    })
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_determinism_across_input_orderings() {
    let first = RingBuilder::new()
        .virtual_nodes(64)
        .build(["c", "a", "b", "a"])
        .unwrap();
    let second = RingBuilder::new()
        .virtual_nodes(64)
        .build(["a", "b", "c", "c", "b"])
        .unwrap();

    assert_eq!(first.nodes(), second.nodes());

    let first_table: Vec<(u64, &str)> =
        first.virtual_nodes().map(|vn| (vn.hash, *vn.node)).collect();
    let second_table: Vec<(u64, &str)> =
        second.virtual_nodes().map(|vn| (vn.hash, *vn.node)).collect();
    assert_eq!(first_table, second_table);

    for item in ["alpha", "beta", "gamma", ""] {
        assert_eq!(full_walk(&first, item), full_walk(&second, item));
    }
}

#[test]
fn test_repeated_folds_are_identical() {
    let ring = RingBuilder::new()
        .virtual_nodes(32)
        .build(["n1", "n2", "n3", "n4"])
        .unwrap();

    let baseline = full_walk(&ring, "some-item");
    for _ in 0..10 {
        assert_eq!(full_walk(&ring, "some-item"), baseline);
    }
}

// ============================================================================
// Walk Guarantees
// ============================================================================

#[test]
fn test_full_walk_is_unique_and_complete() {
    let nodes = ["n1", "n2", "n3", "n4", "n5"];
    let ring = RingBuilder::new().virtual_nodes(32).build(nodes).unwrap();

    for i in 0..50 {
        let item = format!("item-{i}");
        let walk = full_walk(&ring, &item);

        // Every physical node exactly once.
        assert_eq!(walk.len(), ring.node_count());
        let mut sorted = walk.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ring.nodes());
    }
}

#[test]
fn test_early_stop_returns_prefix() {
    let ring = RingBuilder::new()
        .virtual_nodes(32)
        .build(["n1", "n2", "n3", "n4", "n5"])
        .unwrap();

    for item in ["x", "y", "z"] {
        let walk = full_walk(&ring, item);
        for count in 0..=walk.len() {
            let stopped = ring.successors(item, count);
            let stopped: Vec<&str> = stopped.into_iter().copied().collect();
            assert_eq!(stopped, walk[..count]);
        }
        // Asking for more than exists yields everything, nothing extra.
        let all = ring.successors(item, 99);
        assert_eq!(all.len(), ring.node_count());
    }
}

#[test]
fn test_lookup_matches_walk_head() {
    let ring = RingBuilder::new()
        .virtual_nodes(32)
        .build(["n1", "n2", "n3"])
        .unwrap();

    for item in ["a", "b", "c", "d", "e"] {
        assert_eq!(ring.lookup(item).copied(), full_walk(&ring, item).first().copied());
    }
}

// ============================================================================
// Node Set Fidelity
// ============================================================================

#[test]
fn test_nodes_are_sorted_and_deduplicated() {
    let ring = RingBuilder::new()
        .virtual_nodes(8)
        .build(["zeta", "alpha", "mu", "alpha", "zeta", "zeta"])
        .unwrap();
    assert_eq!(ring.nodes(), &["alpha", "mu", "zeta"]);
}

// ============================================================================
// Minimal Disruption
// ============================================================================

#[test]
fn test_removing_one_node_remaps_only_its_items() {
    let all_nodes: Vec<String> = (0..10).map(|i| format!("node-{i:02}")).collect();
    let removed = "node-05";
    let survivors: Vec<String> = all_nodes
        .iter()
        .filter(|node| node.as_str() != removed)
        .cloned()
        .collect();

    let before = RingBuilder::new()
        .virtual_nodes(64)
        .build(all_nodes)
        .unwrap();
    let after = RingBuilder::new()
        .virtual_nodes(64)
        .build(survivors)
        .unwrap();

    let total = 2000;
    let mut displaced = 0usize;
    for i in 0..total {
        let item = format!("item-{i:04}");
        let primary_before = before.lookup(&item).unwrap();
        let primary_after = after.lookup(&item).unwrap();
        if primary_before.as_str() == removed {
            displaced += 1;
        } else {
            // Items not owned by the removed node must stay put.
            assert_eq!(primary_before, primary_after, "item {item} moved needlessly");
        }
    }

    // Expected remap fraction is ~1/10; allow generous statistical slack.
    let fraction = displaced as f64 / total as f64;
    assert!(
        (0.01..=0.30).contains(&fraction),
        "displaced fraction out of range: {fraction:.3}"
    );
}

// ============================================================================
// Hand-Computed Scenario
// ============================================================================

/// Deterministic test algorithm with hand-computable output.
///
/// Virtual-node seeds (8-byte replica index followed by a 1-byte node) map to
/// `node_byte * 100 + replica`; bare 1-byte items map to
/// `item_byte * 100 + 50`, landing between two replicas of the same node.
#[derive(Debug)]
struct TableAlgorithm;

impl HashAlgorithm for TableAlgorithm {
    fn digest_size(&self) -> usize {
        8
    }

    fn hash(&self, data: &[u8]) -> u64 {
        if data.len() > 8 {
            let replica = u64::from_be_bytes(data[..8].try_into().unwrap());
            u64::from(data[8]) * 100 + replica
        } else {
            u64::from(data[0]) * 100 + 50
        }
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

#[test]
fn test_hand_computed_table_and_fold() {
    let ring = RingBuilder::new()
        .virtual_nodes(4)
        .algorithm(Arc::new(TableAlgorithm))
        .build(["a", "b", "c"])
        .unwrap();

    // "a" = 0x61 = 97, "b" = 98, "c" = 99; four replicas each.
    let mut expected = Vec::new();
    for (byte, node) in [(97u64, "a"), (98, "b"), (99, "c")] {
        for replica in 0..4 {
            expected.push((byte * 100 + replica, node));
        }
    }
    let table: Vec<(u64, &str)> = ring.virtual_nodes().map(|vn| (vn.hash, *vn.node)).collect();
    assert_eq!(table, expected);

    // Item "a" hashes to 9750, between a's replicas (9700..=9703) and b's
    // (9800..=9803): the walk starts at b.
    assert_eq!(ring.successors("a", 2), vec![&"b", &"c"]);
    assert_eq!(full_walk(&ring, "a"), vec!["b", "c", "a"]);

    // Item "c" hashes to 9950, past every virtual node: the walk wraps to
    // the start of the ring.
    assert_eq!(ring.successors("c", 2), vec![&"a", &"b"]);
    assert_eq!(ring.lookup("b"), Some(&"c"));
}

// ============================================================================
// Degenerate Ring
// ============================================================================

#[test]
fn test_empty_ring_fold_returns_initial() {
    let ring: HashRing<&str> = HashRing::new([]).unwrap();
    let acc = ring.fold("item", 42u32, |_, _| panic!("accumulator must not run"));
    assert_eq!(acc, 42);
    assert_eq!(ring.lookup("item"), None);
    assert!(ring.nodes().is_empty());
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_readers_agree() {
    let nodes: Vec<String> = (0..8).map(|i| format!("node-{i}")).collect();
    let ring = Arc::new(
        RingBuilder::new()
            .virtual_nodes(64)
            .build(nodes)
            .unwrap(),
    );

    let expected: Vec<Vec<String>> = (0..100)
        .map(|i| {
            ring.successors(&format!("key-{i}"), 3)
                .into_iter()
                .cloned()
                .collect()
        })
        .collect();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let ring = Arc::clone(&ring);
        let expected = expected.clone();
        handles.push(thread::spawn(move || {
            for (i, want) in expected.iter().enumerate() {
                let got: Vec<String> = ring
                    .successors(&format!("key-{i}"), 3)
                    .into_iter()
                    .cloned()
                    .collect();
                assert_eq!(&got, want);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
