//! Differential property tests: NodeHeap against VecHeap
//!
//! Both heaps receive the same random sequence of operations. After every
//! operation they must agree on `peek()` and `len()`, and at the end both
//! must drain to identical sequences. Payloads are plain integers, so equal
//! priorities are indistinguishable and tie-breaking cannot cause spurious
//! differences.

use linked_heap::compare::{Compare, MaxFirst, MinFirst};
use linked_heap::linked::NodeHeap;
use linked_heap::vec_heap::VecHeap;
use linked_heap::PriorityQueue;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Apply `ops` to both heaps, comparing them after each step
///
/// `op % 3 == 0` pops, `op % 3 == 1` peeks, anything else pushes `value`.
fn test_heaps_identical_behavior<C: Compare<i32> + Clone>(
    compare: C,
    initial: Vec<i32>,
    ops: Vec<(u8, i32)>,
) -> Result<(), TestCaseError> {
    let mut linked = NodeHeap::with_comparator(compare.clone());
    let mut reference = VecHeap::with_comparator(compare);

    for value in initial {
        linked.push(value);
        reference.push(value);
    }

    for (op, value) in ops {
        match op % 3 {
            0 => {
                prop_assert_eq!(linked.pop(), reference.pop());
            }
            1 => {
                prop_assert_eq!(linked.peek(), reference.peek());
            }
            _ => {
                linked.push(value);
                reference.push(value);
            }
        }

        prop_assert_eq!(linked.len(), reference.len());
        prop_assert_eq!(linked.is_empty(), reference.is_empty());
        prop_assert!(linked.validate().is_ok());
    }

    let linked_drained: Vec<i32> = std::iter::from_fn(|| linked.pop()).collect();
    let reference_drained: Vec<i32> = std::iter::from_fn(|| reference.pop()).collect();
    prop_assert_eq!(linked_drained, reference_drained);

    Ok(())
}

/// Same comparison, driven only through the PriorityQueue trait
fn drain_via_trait<H: PriorityQueue<i32>>(heap: &mut H) -> Vec<i32> {
    std::iter::from_fn(|| heap.pop()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn node_heap_vs_vec_heap_max_first(
        initial in prop::collection::vec(-100i32..100, 0..50),
        ops in prop::collection::vec((0u8..3, -100i32..100), 0..150)
    ) {
        test_heaps_identical_behavior(MaxFirst, initial, ops)?;
    }

    #[test]
    fn node_heap_vs_vec_heap_min_first(
        initial in prop::collection::vec(-100i32..100, 0..50),
        ops in prop::collection::vec((0u8..3, -100i32..100), 0..150)
    ) {
        test_heaps_identical_behavior(MinFirst, initial, ops)?;
    }

    #[test]
    fn node_heap_vs_vec_heap_closure(
        initial in prop::collection::vec(-1000i32..1000, 0..50),
        ops in prop::collection::vec((0u8..3, -1000i32..1000), 0..150)
    ) {
        // Orders by value modulo 10, so many distinct values tie.
        let by_last_digit = |a: &i32, b: &i32| a.rem_euclid(10).cmp(&b.rem_euclid(10));
        let mut linked = NodeHeap::with_comparator(by_last_digit);
        let mut reference = VecHeap::with_comparator(by_last_digit);

        for value in initial {
            linked.push(value);
            reference.push(value);
        }
        for (op, value) in ops {
            if op == 0 {
                let a = linked.pop().map(|v| v.rem_euclid(10));
                let b = reference.pop().map(|v| v.rem_euclid(10));
                prop_assert_eq!(a, b);
            } else {
                linked.push(value);
                reference.push(value);
            }
            prop_assert_eq!(linked.len(), reference.len());
            prop_assert!(linked.validate().is_ok());
        }

        let a: Vec<i32> = drain_via_trait(&mut linked).into_iter().map(|v| v.rem_euclid(10)).collect();
        let b: Vec<i32> = drain_via_trait(&mut reference).into_iter().map(|v| v.rem_euclid(10)).collect();
        prop_assert_eq!(a, b);
    }
}
