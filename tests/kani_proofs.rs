//! Kani verification proofs for the linked heap
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use linked_heap::linked::NodeHeap;

/// Proof that push always increments the length and keeps the tree valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_push_increments_len() {
    let mut heap: NodeHeap<u8> = NodeHeap::new();
    heap.push(kani::any());
    heap.push(kani::any());
    let initial_len = heap.len();

    heap.push(kani::any());

    assert!(heap.len() == initial_len + 1);
    assert!(heap.validate().is_ok());
}

/// Proof that pop decrements the length (when not empty)
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_decrements_len() {
    let mut heap: NodeHeap<u8> = NodeHeap::new();
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());

    let initial_len = heap.len();
    let popped = heap.pop();

    assert!(popped.is_some());
    assert!(heap.len() == initial_len - 1);
    assert!(heap.validate().is_ok());
}

/// Proof that the popped element is a maximum of what was inserted
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_returns_maximum() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    let d: u8 = kani::any();

    let mut heap = NodeHeap::new();
    heap.push(a);
    heap.push(b);
    heap.push(c);
    heap.push(d);

    let max = a.max(b).max(c).max(d);
    assert!(heap.peek() == Some(&max));
    assert!(heap.pop() == Some(max));
}

/// Proof that draining yields a non-increasing sequence
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_drain_is_non_increasing() {
    let mut heap: NodeHeap<u8> = NodeHeap::new();
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());

    let first = heap.pop().unwrap();
    let second = heap.pop().unwrap();
    let third = heap.pop().unwrap();
    let fourth = heap.pop().unwrap();

    assert!(first >= second && second >= third && third >= fourth);
    assert!(heap.pop().is_none());
    assert!(heap.is_empty());
}

/// Proof that a single-element shrink followed by a grow stays valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_shrink_to_empty_then_grow() {
    let mut heap: NodeHeap<u8> = NodeHeap::new();
    let first: u8 = kani::any();
    heap.push(first);
    assert!(heap.pop() == Some(first));
    assert!(heap.pop().is_none());

    heap.push(kani::any());
    heap.push(kani::any());
    assert!(heap.len() == 2);
    assert!(heap.validate().is_ok());
}
