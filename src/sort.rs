//! Heap sort on top of [`NodeHeap`]
//!
//! These functions use nothing but the heap's public `push` and `pop`: every
//! element goes into a fresh heap, then comes back out into the same vector
//! starting at index 0. The result is ordered by **descending** priority,
//! which for [`MaxFirst`] means largest first.
//!
//! The sort is not stable; elements that compare equal may be reordered.
//!
//! # Example
//!
//! ```rust
//! use linked_heap::sort::{heap_sort, heap_sort_by};
//!
//! let mut values = vec![5, 1, 8, 1, 9, 3];
//! heap_sort(&mut values);
//! assert_eq!(values, vec![9, 8, 5, 3, 1, 1]);
//!
//! let mut words = vec!["pear", "fig", "banana"];
//! heap_sort_by(&mut words, |a: &&str, b: &&str| b.len().cmp(&a.len()));
//! assert_eq!(words, vec!["fig", "pear", "banana"]);
//! ```

use crate::compare::{Compare, MaxFirst};
use crate::linked::NodeHeap;

/// Sorts `elements` in place into descending natural order
pub fn heap_sort<T: Ord>(elements: &mut Vec<T>) {
    heap_sort_by(elements, MaxFirst);
}

/// Sorts `elements` in place into descending priority order under `compare`
pub fn heap_sort_by<T, C: Compare<T>>(elements: &mut Vec<T>, compare: C) {
    let mut heap = NodeHeap::with_comparator(compare);
    heap.extend(elements.drain(..));
    while let Some(item) = heap.pop() {
        elements.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::MinFirst;

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        heap_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        heap_sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_duplicates() {
        let mut values = vec![2, 7, 2, 7, 7, 0, 2];
        heap_sort(&mut values);
        assert_eq!(values, vec![7, 7, 7, 2, 2, 2, 0]);
    }

    #[test]
    fn test_reverse_comparator_sorts_ascending() {
        let mut values: Vec<i32> = (0..50).rev().collect();
        heap_sort_by(&mut values, MinFirst);
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_reuses_vector_allocation() {
        let mut values = Vec::with_capacity(64);
        values.extend([3, 1, 2]);
        let capacity = values.capacity();
        heap_sort(&mut values);
        assert_eq!(values, vec![3, 2, 1]);
        assert_eq!(values.capacity(), capacity);
    }

    #[test]
    fn test_sorts_by_key_field() {
        let mut patients = vec![("ana", 120_i64), ("luis", 990), ("sol", 15), ("eva", 120)];
        heap_sort_by(&mut patients, |a: &(&str, i64), b: &(&str, i64)| a.1.cmp(&b.1));
        let totals: Vec<i64> = patients.iter().map(|p| p.1).collect();
        assert_eq!(totals, vec![990, 120, 120, 15]);
        assert_eq!(patients[0].0, "luis");
        assert_eq!(patients[3].0, "sol");
    }
}
