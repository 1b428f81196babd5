//! Pointer-linked binary heaps for Rust
//!
//! This crate provides a priority queue built as a complete binary tree of
//! individually allocated, parent-linked nodes, together with the comparator
//! machinery and a heap sort built on top of it.
//!
//! # Contents
//!
//! - **[`NodeHeap`](linked::NodeHeap)**: max-heap over a linked complete tree;
//!   insertion and removal slots are found by level-order search
//! - **[`VecHeap`](vec_heap::VecHeap)**: array-backed max-heap with the same
//!   comparator semantics, useful as a reference and a baseline
//! - **[`heap_sort`](sort::heap_sort)**: descending in-place sort using only
//!   the public `NodeHeap` operations
//! - **[`Compare`](compare::Compare)**: comparator trait, with natural
//!   ([`MaxFirst`](compare::MaxFirst)), reversed ([`MinFirst`](compare::MinFirst))
//!   and closure comparators
//!
//! # Example
//!
//! ```rust
//! use linked_heap::linked::NodeHeap;
//!
//! let by_total = |a: &(i64, &str), b: &(i64, &str)| a.0.cmp(&b.0);
//! let mut heap: NodeHeap<(i64, &str), _> = NodeHeap::with_comparator(by_total);
//! heap.push((120, "ana"));
//! heap.push((990, "luis"));
//! heap.push((15, "sol"));
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.peek(), Some(&(990, "luis")));
//! assert_eq!(heap.pop(), Some((990, "luis")));
//! ```

pub mod compare;
pub mod linked;
pub mod sort;
pub mod traits;
pub mod vec_heap;

// Re-export the main trait for convenience
pub use traits::PriorityQueue;
