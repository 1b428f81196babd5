//! Array-backed binary heap
//!
//! A conventional binary max-heap over a `Vec`, using index arithmetic for
//! parent/child lookup. It takes the same comparators as
//! [`NodeHeap`](crate::linked::NodeHeap) and implements the same
//! [`PriorityQueue`] trait, which makes it a convenient reference when
//! checking the linked heap and a baseline for benchmarks.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use linked_heap::compare::MinFirst;
//! use linked_heap::vec_heap::VecHeap;
//!
//! let mut heap = VecHeap::with_comparator(MinFirst);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::compare::{outranks, Compare, MaxFirst};
use crate::traits::PriorityQueue;

/// A binary max-heap stored in a vector
#[derive(Debug, Clone)]
pub struct VecHeap<T, C = MaxFirst> {
    data: Vec<T>,
    compare: C,
}

impl<T: Ord> VecHeap<T, MaxFirst> {
    /// Creates an empty heap in natural order (greatest element first)
    pub fn new() -> Self {
        Self::with_comparator(MaxFirst)
    }
}

impl<T, C: Compare<T>> VecHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the highest-priority element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if outranks(&self.compare, &self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && outranks(&self.compare, &self.data[left], &self.data[largest]) {
                largest = left;
            }
            if right < len && outranks(&self.compare, &self.data[right], &self.data[largest]) {
                largest = right;
            }

            if largest != index {
                self.data.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for VecHeap<T, C> {
    type Comparator = C;

    fn with_comparator(compare: C) -> Self {
        VecHeap::with_comparator(compare)
    }

    fn is_empty(&self) -> bool {
        VecHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        VecHeap::len(self)
    }

    fn push(&mut self, item: T) {
        VecHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        VecHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        VecHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> Default for VecHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
