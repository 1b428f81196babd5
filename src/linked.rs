//! Pointer-linked binary heap
//!
//! A binary max-heap stored as an explicit tree of individually allocated
//! nodes rather than as an array. Each node links to its left and right
//! children and back to its parent, and the tree is kept **complete**: every
//! level is full except possibly the last, which fills left to right.
//!
//! Because there is no array index to derive positions from, the insertion
//! slot and the node to vacate on removal are found with a level-order walk
//! driven by a FIFO queue.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(n) slot search + O(log n) sift-up |
//! | `pop`     | O(n) last-leaf search + O(log n) sift-down |
//! | `peek`    | O(1) |
//! | `len`     | O(1) |
//!
//! # Ownership
//!
//! The heap exclusively owns its node graph and every node owns its two
//! children; the parent link is a non-owning back pointer. Repairs move
//! payloads between nodes and never relink nodes, so a node's position in
//! the tree is fixed from the moment it is attached until it is freed.
//!
//! # Example
//!
//! ```rust
//! use linked_heap::linked::NodeHeap;
//!
//! let mut heap = NodeHeap::new();
//! for priority in [5, 1, 8, 1, 9, 3] {
//!     heap.push(priority);
//! }
//!
//! assert_eq!(heap.peek(), Some(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 8, 5, 3, 1, 1]);
//! ```

use crate::compare::{outranks, Compare, MaxFirst};
use crate::traits::{InvariantViolation, PriorityQueue, PushError};
use std::alloc::{self, Layout};
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a detached node, handing the item back if allocation fails
    fn alloc(item: T) -> Result<NonNull<Node<T>>, T> {
        // Node<T> holds three pointers, so the layout is never zero-sized.
        let layout = Layout::new::<Node<T>>();
        let raw = unsafe { alloc::alloc(layout) } as *mut Node<T>;
        match NonNull::new(raw) {
            Some(node) => {
                unsafe {
                    node.as_ptr().write(Node {
                        item,
                        left: None,
                        right: None,
                        parent: None,
                    });
                }
                Ok(node)
            }
            None => Err(item),
        }
    }

    /// Frees a node that is no longer linked into any tree, returning its payload
    ///
    /// Memory from `alloc` with `Layout::new::<Node<T>>()` is valid for
    /// `Box::from_raw`.
    unsafe fn into_item(node: NonNull<Node<T>>) -> T {
        let boxed = Box::from_raw(node.as_ptr());
        boxed.item
    }

    /// Recursively frees a subtree
    unsafe fn free_tree(node: NonNull<Node<T>>) {
        let boxed = Box::from_raw(node.as_ptr());
        if let Some(left) = boxed.left {
            Self::free_tree(left);
        }
        if let Some(right) = boxed.right {
            Self::free_tree(right);
        }
    }
}

/// A binary max-heap over a linked complete tree
///
/// Elements are ordered by the comparator `C` supplied at construction; the
/// element that compares greatest is on top. `NodeHeap::new()` uses natural
/// [`Ord`] order ([`MaxFirst`]); pass [`MinFirst`](crate::compare::MinFirst)
/// or a closure to [`NodeHeap::with_comparator`] for anything else.
///
/// Elements that compare equal are returned in no guaranteed order.
pub struct NodeHeap<T, C = MaxFirst> {
    root: Link<T>,
    len: usize,
    compare: C,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the heap uniquely owns its nodes; no pointer into the tree escapes
// except through borrows tied to `&self`/`&mut self`.
unsafe impl<T: Send, C: Send> Send for NodeHeap<T, C> {}
unsafe impl<T: Sync, C: Sync> Sync for NodeHeap<T, C> {}

impl<T: Ord> NodeHeap<T, MaxFirst> {
    /// Creates an empty heap in natural order (greatest element first)
    pub fn new() -> Self {
        Self::with_comparator(MaxFirst)
    }
}

impl<T, C> NodeHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    ///
    /// ```rust
    /// use linked_heap::linked::NodeHeap;
    ///
    /// let by_amount = |a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0);
    /// let mut heap: NodeHeap<(u32, &str), _> = NodeHeap::with_comparator(by_amount);
    /// heap.push((40, "ana"));
    /// heap.push((75, "luis"));
    /// assert_eq!(heap.pop(), Some((75, "luis")));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            len: 0,
            compare,
            _marker: PhantomData,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.root.map(|root| unsafe { &(*root.as_ptr()).item })
    }

    /// Returns the comparator this heap was created with
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the number of levels in the tree (0 for an empty heap)
    pub fn height(&self) -> usize {
        // The leftmost path is always the longest one in a complete tree.
        let mut height = 0;
        let mut cursor = self.root;
        while let Some(node) = cursor {
            height += 1;
            cursor = unsafe { (*node.as_ptr()).left };
        }
        height
    }

    /// Returns an iterator over the elements in level order
    ///
    /// Level order follows the tree layout, not priority: only the first
    /// element is guaranteed to be a maximum.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut queue = VecDeque::new();
        queue.extend(self.root);
        Iter {
            queue,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Removes and drops every element, keeping the comparator
    pub fn clear(&mut self) {
        self.len = 0;
        if let Some(root) = self.root.take() {
            unsafe { Node::free_tree(root) };
        }
    }

    /// First node in level order that is missing a child
    fn open_slot(&self) -> Link<T> {
        let mut queue = VecDeque::new();
        queue.push_back(self.root?);
        while let Some(node) = queue.pop_front() {
            let (left, right) = unsafe { ((*node.as_ptr()).left, (*node.as_ptr()).right) };
            match (left, right) {
                (Some(left), Some(right)) => {
                    queue.push_back(left);
                    queue.push_back(right);
                }
                _ => return Some(node),
            }
        }
        None
    }

    /// Last node in level order: the bottom-most, right-most occupied slot
    fn last_node(&self) -> Link<T> {
        let mut queue = VecDeque::new();
        queue.push_back(self.root?);
        let mut last = None;
        while let Some(node) = queue.pop_front() {
            unsafe {
                queue.extend((*node.as_ptr()).left);
                queue.extend((*node.as_ptr()).right);
            }
            last = Some(node);
        }
        last
    }
}

impl<T, C: Compare<T>> NodeHeap<T, C> {
    /// Inserts an element
    ///
    /// Aborts through [`std::alloc::handle_alloc_error`] if the node cannot
    /// be allocated; use [`try_push`](Self::try_push) to recover instead.
    pub fn push(&mut self, item: T) {
        if self.try_push(item).is_err() {
            alloc::handle_alloc_error(Layout::new::<Node<T>>());
        }
    }

    /// Inserts an element, reporting allocation failure to the caller
    ///
    /// On failure the element is returned inside the error and the heap is
    /// left untouched.
    pub fn try_push(&mut self, item: T) -> Result<(), PushError<T>> {
        let node = Node::alloc(item).map_err(PushError::new)?;
        unsafe { self.attach(node) };
        Ok(())
    }

    /// Links a fresh node into the next free slot and restores heap order
    unsafe fn attach(&mut self, node: NonNull<Node<T>>) {
        let Some(parent) = self.open_slot() else {
            self.root = Some(node);
            self.len = 1;
            return;
        };

        let parent_ptr = parent.as_ptr();
        if (*parent_ptr).left.is_none() {
            (*parent_ptr).left = Some(node);
        } else {
            (*parent_ptr).right = Some(node);
        }
        (*node.as_ptr()).parent = Some(parent);
        self.len += 1;

        self.sift_up(node);
    }

    /// Moves the payload at `node` upward until its parent is not outranked
    ///
    /// Only payloads move; node identities stay where they are.
    unsafe fn sift_up(&mut self, mut node: NonNull<Node<T>>) {
        while let Some(parent) = (*node.as_ptr()).parent {
            let node_ptr = node.as_ptr();
            let parent_ptr = parent.as_ptr();
            if !outranks(&self.compare, &(*node_ptr).item, &(*parent_ptr).item) {
                break;
            }
            ptr::swap(&mut (*node_ptr).item, &mut (*parent_ptr).item);
            node = parent;
        }
    }

    /// Removes and returns the highest-priority element
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root?;

        if self.len == 1 {
            self.root = None;
            self.len = 0;
            return Some(unsafe { Node::into_item(root) });
        }

        let last = self.last_node()?;
        unsafe {
            let parent = (*last.as_ptr()).parent?;
            let parent_ptr = parent.as_ptr();
            if (*parent_ptr).left == Some(last) {
                (*parent_ptr).left = None;
            } else {
                (*parent_ptr).right = None;
            }
            self.len -= 1;

            let mut item = Node::into_item(last);
            mem::swap(&mut item, &mut (*root.as_ptr()).item);
            self.sift_down(root);
            Some(item)
        }
    }

    /// Moves the payload at `node` downward until no child outranks it
    unsafe fn sift_down(&mut self, mut node: NonNull<Node<T>>) {
        loop {
            let node_ptr = node.as_ptr();
            // Completeness means a node without a left child has no children.
            let child = match ((*node_ptr).left, (*node_ptr).right) {
                (None, _) => break,
                (Some(left), None) => left,
                (Some(left), Some(right)) => {
                    if outranks(&self.compare, &(*right.as_ptr()).item, &(*left.as_ptr()).item) {
                        right
                    } else {
                        left
                    }
                }
            };

            let child_ptr = child.as_ptr();
            if !outranks(&self.compare, &(*child_ptr).item, &(*node_ptr).item) {
                break;
            }
            ptr::swap(&mut (*node_ptr).item, &mut (*child_ptr).item);
            node = child;
        }
    }

    /// Empties the heap, passing each element to `destroy` in priority order
    ///
    /// `destroy` is called exactly once per element, highest priority first.
    /// Dropping the heap instead releases the elements without a callback.
    ///
    /// ```rust
    /// use linked_heap::linked::NodeHeap;
    ///
    /// let heap: NodeHeap<_> = [2, 7, 4].into_iter().collect();
    /// let mut seen = Vec::new();
    /// heap.destroy_with(|item| seen.push(item));
    /// assert_eq!(seen, vec![7, 4, 2]);
    /// ```
    pub fn destroy_with<F: FnMut(T)>(mut self, mut destroy: F) {
        while let Some(item) = self.pop() {
            destroy(item);
        }
    }

    /// Consumes the heap, returning its elements in descending priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Consumes the heap, yielding elements in descending priority order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    /// Removes elements in descending priority order as the iterator advances
    ///
    /// Elements not consumed by the time the iterator is dropped are removed
    /// as well.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Checks completeness, heap order, parent links and the length counter
    ///
    /// A heap built only through this type's methods always validates; the
    /// check is meant for tests and debugging.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut queue: VecDeque<(Link<T>, Link<T>, usize)> = VecDeque::new();
        queue.push_back((self.root, None, 0));
        let mut gap = false;
        let mut found = 0;

        while let Some((slot, parent, position)) = queue.pop_front() {
            let Some(node) = slot else {
                gap = true;
                continue;
            };
            if gap {
                return Err(InvariantViolation::Incomplete { position });
            }
            found += 1;

            let node_ptr = node.as_ptr();
            unsafe {
                if (*node_ptr).parent != parent {
                    return Err(InvariantViolation::ParentLink { position });
                }
                if let Some(parent) = parent {
                    if outranks(&self.compare, &(*node_ptr).item, &(*parent.as_ptr()).item) {
                        return Err(InvariantViolation::HeapOrder { position });
                    }
                }
                queue.push_back(((*node_ptr).left, Some(node), 2 * position + 1));
                queue.push_back(((*node_ptr).right, Some(node), 2 * position + 2));
            }
        }

        if found != self.len {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.len,
                found,
            });
        }
        Ok(())
    }
}

impl<T, C> Drop for NodeHeap<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C: Compare<T> + Default> Default for NodeHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for NodeHeap<T, C> {
    /// Re-inserting a valid heap's level-order sequence never triggers a
    /// sift, so the clone has the same shape and payload positions.
    fn clone(&self) -> Self {
        let mut heap = Self::with_comparator(self.compare.clone());
        heap.extend(self.iter().cloned());
        heap
    }
}

impl<T: fmt::Debug, C> fmt::Debug for NodeHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for NodeHeap<T, MaxFirst> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T>> Extend<T> for NodeHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for NodeHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, C> IntoIterator for &'a NodeHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for NodeHeap<T, C> {
    type Comparator = C;

    fn with_comparator(compare: C) -> Self {
        NodeHeap::with_comparator(compare)
    }

    fn is_empty(&self) -> bool {
        NodeHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        NodeHeap::len(self)
    }

    fn push(&mut self, item: T) {
        NodeHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        NodeHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        NodeHeap::pop(self)
    }
}

/// Level-order iterator over a [`NodeHeap`], created by [`NodeHeap::iter`]
pub struct Iter<'a, T> {
    queue: VecDeque<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        let node: &'a Node<T> = unsafe { &*node.as_ptr() };
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// Owning iterator in descending priority order, created by
/// [`NodeHeap::into_iter_sorted`]
pub struct IntoIterSorted<T, C> {
    heap: NodeHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}

/// Draining iterator in descending priority order, created by
/// [`NodeHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C> {
    heap: &'a mut NodeHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}

impl<T, C> Drop for DrainSorted<'_, T, C> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
