//! Common trait and error types for the heaps in this crate
//!
//! - [`PriorityQueue`]: the operations shared by [`NodeHeap`](crate::linked::NodeHeap)
//!   and [`VecHeap`](crate::vec_heap::VecHeap)
//! - [`PushError`]: returned by `try_push` when a node cannot be allocated
//! - [`InvariantViolation`]: returned by `validate` when the tree is malformed

use crate::compare::Compare;
use std::fmt;

/// Error returned when an element could not be inserted
///
/// The only failure mode is running out of memory for the new node. The
/// rejected element is handed back and the heap is left exactly as it was.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    item: T,
}

impl<T> PushError<T> {
    pub(crate) fn new(item: T) -> Self {
        Self { item }
    }

    /// Returns the element that could not be inserted
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memory allocation failed while inserting into heap")
    }
}

impl<T> std::error::Error for PushError<T> {}

/// A structural defect found by `validate`
///
/// Positions are 0-based level-order slot numbers (root is 0, its children
/// are 1 and 2, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A child outranks its parent
    HeapOrder {
        /// Level-order position of the offending child
        position: usize,
    },
    /// An occupied slot follows an empty one in level order
    Incomplete {
        /// Level-order position of the first node found after a gap
        position: usize,
    },
    /// A node's parent link does not point at the node that owns it
    ParentLink {
        /// Level-order position of the node with the bad link
        position: usize,
    },
    /// The stored length disagrees with the number of reachable nodes
    LengthMismatch {
        /// Value of the length counter
        expected: usize,
        /// Number of nodes actually reachable from the root
        found: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::HeapOrder { position } => {
                write!(f, "node at position {} outranks its parent", position)
            }
            InvariantViolation::Incomplete { position } => {
                write!(f, "node at position {} follows an empty slot", position)
            }
            InvariantViolation::ParentLink { position } => {
                write!(f, "node at position {} has a stale parent link", position)
            }
            InvariantViolation::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "length counter is {} but {} nodes are reachable",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Operations shared by every priority queue in this crate
///
/// All implementations are max-heaps with respect to their comparator:
/// `peek` and `pop` return an element that no other stored element
/// outranks. Elements that compare equal come out in no particular order.
///
/// # Example
///
/// ```rust
/// use linked_heap::PriorityQueue;
/// use linked_heap::compare::MinFirst;
/// use linked_heap::linked::NodeHeap;
///
/// fn drain<Q: PriorityQueue<u32>>(mut queue: Q) -> Vec<u32> {
///     std::iter::from_fn(|| queue.pop()).collect()
/// }
///
/// let mut heap = NodeHeap::with_comparator(MinFirst);
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(drain(heap), vec![1, 2, 3]);
/// ```
pub trait PriorityQueue<T> {
    /// The ordering used by this queue
    type Comparator: Compare<T>;

    /// Creates an empty queue ordered by `compare`
    fn with_comparator(compare: Self::Comparator) -> Self;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) repair walk for both implementations; the linked heap adds an
    /// O(n) level-order search for the insertion slot.
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    fn pop(&mut self) -> Option<T>;
}
