//! Priority Queue Claims - Falsifiable Behavior Tests
//!
//! Each test states a claim about the public queue API that a broken
//! implementation would refute.
//!
//! Run: cargo test --test priority_queue_claims

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::HashMap;

use fastheap::collections::{Handle, IndexedPriorityQueue};
use fastheap::Error;
use proptest::prelude::*;

// ============================================================================
// SECTION 1: ORDERING CLAIMS
// ============================================================================

/// Claim 1: The documented scenario dequeues B, C, A.
#[test]
fn claim_01_update_reorders_scenario() {
    let mut queue = IndexedPriorityQueue::new(5);
    let a = queue.enqueue('A', 5.0).unwrap();
    let _b = queue.enqueue('B', 1.0).unwrap();
    let c = queue.enqueue('C', 3.0).unwrap();

    assert_eq!(queue.dequeue().unwrap(), 'B');
    queue.update_priority(c, 0.5).unwrap();
    assert_eq!(queue.dequeue().unwrap(), 'C');
    assert_eq!(queue.dequeue().unwrap(), 'A');
    assert!(!queue.contains(a));
    assert!(queue.is_empty());
}

/// Claim 2: Negative and infinite priorities order correctly.
#[test]
fn claim_02_extreme_priorities() {
    let mut queue = IndexedPriorityQueue::new(4);
    queue.enqueue("inf", f32::INFINITY).unwrap();
    queue.enqueue("neg", -1.0e30).unwrap();
    queue.enqueue("ninf", f32::NEG_INFINITY).unwrap();
    queue.enqueue("zero", 0.0).unwrap();

    let order: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(order, vec!["ninf", "neg", "zero", "inf"]);
}

// ============================================================================
// SECTION 2: CAPACITY CLAIMS
// ============================================================================

/// Claim 3: Exactly `capacity` enqueues succeed; the next is rejected and
/// leaves the queue untouched.
#[test]
fn claim_03_capacity_boundary() {
    let mut queue = IndexedPriorityQueue::new(3);
    for i in 0..3 {
        queue.enqueue(i, i as f32).unwrap();
    }
    assert!(queue.is_full());

    assert_eq!(queue.enqueue(99, -1.0), Err(Error::CapacityExceeded { capacity: 3 }));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek_priority().unwrap(), 0.0);
    assert!(queue.validate());
}

/// Claim 4: Reset yields an empty, valid queue of the requested capacity.
#[test]
fn claim_04_reset_is_idempotent() {
    let mut queue = IndexedPriorityQueue::new(2);
    let h = queue.enqueue("x", 1.0).unwrap();

    for _ in 0..2 {
        queue.reset(7);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 7);
        assert!(queue.validate());
    }
    assert!(!queue.contains(h));
}

/// Claim 5: Growing keeps every live handle valid.
#[test]
fn claim_05_resize_preserves_handles() {
    let mut queue = IndexedPriorityQueue::new(2);
    let a = queue.enqueue("a", 2.0).unwrap();
    let b = queue.enqueue("b", 1.0).unwrap();

    queue.resize(10).unwrap();
    assert_eq!(queue.capacity(), 10);
    assert_eq!(*queue.get(a).unwrap(), "a");
    assert_eq!(queue.priority(b).unwrap(), 1.0);
    assert_eq!(queue.resize(1), Err(Error::CapacityBelowLen { requested: 1, len: 2 }));
}

// ============================================================================
// SECTION 3: HANDLE CLAIMS
// ============================================================================

/// Claim 6: A handle is dead after its element leaves, even if the storage
/// cell is reused.
#[test]
fn claim_06_stale_handle_after_reuse() {
    let mut queue = IndexedPriorityQueue::new(1);
    let old = queue.enqueue(1, 1.0).unwrap();
    queue.dequeue().unwrap();
    let new = queue.enqueue(2, 2.0).unwrap();

    assert!(!queue.contains(old));
    assert!(queue.contains(new));
    assert_eq!(queue.remove(old), Err(Error::StaleHandle));
    assert_eq!(queue.update_priority(old, 0.0), Err(Error::StaleHandle));
    assert_eq!(*queue.get(new).unwrap(), 2);
}

/// Claim 7: Handles never cross queues.
#[test]
fn claim_07_foreign_handle_rejected() {
    let mut first = IndexedPriorityQueue::new(2);
    let mut second = IndexedPriorityQueue::new(2);
    let h = first.enqueue("first", 1.0).unwrap();
    second.enqueue("second", 1.0).unwrap();

    assert!(!second.contains(h));
    assert_eq!(second.get(h), Err(Error::StaleHandle));
}

// ============================================================================
// SECTION 4: PROPERTY CLAIMS
// ============================================================================

#[derive(Debug, Clone)]
enum Step {
    Enqueue(f32),
    Dequeue,
    Remove(usize),
    Update(usize, f32),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (-1000.0f32..1000.0).prop_map(Step::Enqueue),
        1 => Just(Step::Dequeue),
        1 => any::<usize>().prop_map(Step::Remove),
        2 => (any::<usize>(), -1000.0f32..1000.0).prop_map(|(i, p)| Step::Update(i, p)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Claim 8: The queue agrees with a map-based model after any sequence.
    #[test]
    fn claim_08_matches_model(steps in prop::collection::vec(step(), 1..120)) {
        let mut queue = IndexedPriorityQueue::new(32);
        let mut model: HashMap<u32, f32> = HashMap::new();
        let mut handles: Vec<(u32, Handle)> = Vec::new();
        let mut next_id = 0u32;

        for step in steps {
            match step {
                Step::Enqueue(p) => match queue.enqueue(next_id, p) {
                    Ok(h) => {
                        model.insert(next_id, p);
                        handles.push((next_id, h));
                        next_id += 1;
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::CapacityExceeded { capacity: 32 });
                        prop_assert_eq!(model.len(), 32);
                    }
                },
                Step::Dequeue => match queue.dequeue_with_priority() {
                    Ok((id, p)) => {
                        let min = model.values().copied().fold(f32::INFINITY, f32::min);
                        prop_assert_eq!(p, min);
                        prop_assert_eq!(model.remove(&id), Some(p));
                        handles.retain(|&(i, _)| i != id);
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::EmptyQueue);
                        prop_assert!(model.is_empty());
                    }
                },
                Step::Remove(i) if !handles.is_empty() => {
                    let (id, h) = handles.swap_remove(i % handles.len());
                    prop_assert_eq!(queue.remove(h), Ok(id));
                    model.remove(&id);
                    prop_assert!(!queue.contains(h));
                }
                Step::Update(i, p) if !handles.is_empty() => {
                    let (id, h) = handles[i % handles.len()];
                    queue.update_priority(h, p).unwrap();
                    model.insert(id, p);
                    prop_assert_eq!(queue.priority(h), Ok(p));
                }
                Step::Remove(_) | Step::Update(..) => {}
            }

            prop_assert!(queue.validate());
            prop_assert_eq!(queue.len(), model.len());
            for &(id, h) in &handles {
                prop_assert!(queue.contains(h));
                prop_assert_eq!(queue.get(h), Ok(&id));
            }
        }
    }

    /// Claim 9: Draining yields priorities in non-decreasing order.
    #[test]
    fn claim_09_sorted_drain(prios in prop::collection::vec(-1.0e6f32..1.0e6, 0..200)) {
        let mut queue = IndexedPriorityQueue::new(prios.len());
        for (i, &p) in prios.iter().enumerate() {
            queue.enqueue(i, p).unwrap();
        }

        let mut last = f32::NEG_INFINITY;
        while let Ok((_, p)) = queue.dequeue_with_priority() {
            prop_assert!(p >= last);
            last = p;
        }
    }
}
