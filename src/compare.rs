//! Comparators for the heaps in this crate
//!
//! Every heap here is a **max-heap with respect to its comparator**: the element
//! that compares [`Ordering::Greater`] than all others sits at the top. A
//! comparator is fixed when the heap is created and must stay a consistent total
//! preorder for the heap's whole lifetime; changing its answers mid-lifetime
//! leaves the heap in an unspecified (but memory-safe) order.
//!
//! Three kinds of comparator are provided:
//!
//! - [`MaxFirst`]: natural [`Ord`] order, largest element on top
//! - [`MinFirst`]: reversed [`Ord`] order, smallest element on top
//! - any closure `Fn(&T, &T) -> Ordering`
//!
//! # Example
//!
//! ```rust
//! use linked_heap::compare::{Compare, MaxFirst, MinFirst};
//! use std::cmp::Ordering;
//!
//! assert_eq!(MaxFirst.compare(&3, &1), Ordering::Greater);
//! assert_eq!(MinFirst.compare(&3, &1), Ordering::Less);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// A three-way priority comparison
///
/// `Less` means `a` has lower priority than `b`, `Greater` means higher, and
/// `Equal` means the two are interchangeable as far as the heap is concerned.
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural order: the greatest element by [`Ord`] has the highest priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed order: the least element by [`Ord`] has the highest priority
///
/// Equivalent to wrapping every element in [`std::cmp::Reverse`], without
/// the wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Returns true if `a` strictly outranks `b` under `compare`
#[inline]
pub(crate) fn outranks<T, C: Compare<T>>(compare: &C, a: &T, b: &T) -> bool {
    compare.compare(a, b) == Ordering::Greater
}
