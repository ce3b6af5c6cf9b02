//! Array-backed binary min-heap.
//!
//! The heap stores its elements in a contiguous buffer laid out as a complete
//! binary tree: the children of slot `i` live at `2i + 1` and `2i + 2`. Every
//! element compares greater than or equal to its parent under the heap's
//! [`HeapOrder`], so the minimum is always in slot zero.
//!
//! The ordering is a type parameter rather than a bound on the element type so
//! one implementation can serve [`crate::Edge`] values, plain integers, or any
//! payload paired with a caller-supplied comparison.

use std::cmp::Ordering;

use crate::error::{HeapError, HeapOperation};

/// Capacity used by [`BinaryHeap::new`] and the minimum growth step.
pub const DEFAULT_CAPACITY: usize = 10;

/// A total order used to arrange heap elements.
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)`
/// return opposite orderings and the relation is transitive. Closures of type
/// `Fn(&T, &T) -> Ordering` implement this trait.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use arbor_core::{BinaryHeap, HeapOrder};
///
/// struct ByLength;
///
/// impl HeapOrder<String> for ByLength {
///     fn compare(&self, left: &String, right: &String) -> Ordering {
///         left.len().cmp(&right.len())
///     }
/// }
///
/// let mut heap = BinaryHeap::with_order(ByLength);
/// heap.insert("ccc".to_owned());
/// heap.insert("a".to_owned());
/// assert_eq!(heap.find_min().map(String::as_str), Ok("a"));
/// ```
pub trait HeapOrder<T> {
    /// Compares two elements; `Ordering::Less` means `left` leaves the heap
    /// first.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord> HeapOrder<T> for NaturalOrder {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// A min-priority queue backed by a growable array.
///
/// # Examples
/// ```
/// use arbor_core::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// for value in [5, 1, 4, 2, 3] {
///     heap.insert(value);
/// }
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.find_min(), Ok(&2));
/// assert_eq!(heap.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct BinaryHeap<T, O = NaturalOrder> {
    items: Vec<T>,
    order: O,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap able to hold `capacity` elements before growing.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, NaturalOrder)
    }

    /// Builds a heap from `items` in linear time.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from_vec(vec![9, 3, 7, 1]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 7, 9]);
    /// ```
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with_order(items, NaturalOrder)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
    /// Creates an empty heap ordered by `order`.
    #[must_use]
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(DEFAULT_CAPACITY, order)
    }

    /// Creates an empty heap ordered by `order` with room for `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap ordered by `order` from `items` in linear time.
    ///
    /// Every non-leaf slot, from the last one back to the root, is percolated
    /// down.
    #[must_use]
    pub fn from_vec_with_order(items: Vec<T>, order: O) -> Self {
        let mut heap = Self { items, order };
        heap.build_heap();
        heap
    }

    /// Adds `item` to the heap.
    ///
    /// When the buffer is full it grows to at least twice its capacity before
    /// the element is percolated up from the first free slot.
    pub fn insert(&mut self, item: T) {
        self.ensure_spare_capacity();
        self.items.push(item);
        self.percolate_up(self.items.len() - 1);
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] when the heap is empty.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Underflow {
            operation: HeapOperation::FindMin,
        })
    }

    /// Removes and returns the minimum element.
    ///
    /// The last element moves into the root slot and is percolated down.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] when the heap is empty.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Underflow {
                operation: HeapOperation::DeleteMin,
            });
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(0);
        }
        Ok(min)
    }

    /// Returns `true` when the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements the heap can hold before growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Logically empties the heap, keeping the allocated buffer.
    pub fn make_empty(&mut self) {
        self.items.clear();
    }

    /// Drains the heap into a vector in ascending order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.delete_min() {
            sorted.push(item);
        }
        sorted
    }

    fn ensure_spare_capacity(&mut self) {
        let capacity = self.items.capacity();
        if self.items.len() == capacity {
            self.items.reserve_exact(capacity.max(DEFAULT_CAPACITY));
        }
    }

    fn build_heap(&mut self) {
        let len = self.items.len();
        for slot in (0..len / 2).rev() {
            self.percolate_down(slot);
        }
    }

    fn is_less(&self, left: usize, right: usize) -> bool {
        self.order.compare(&self.items[left], &self.items[right]) == Ordering::Less
    }

    fn percolate_up(&mut self, mut hole: usize) {
        while hole > 0 {
            let parent = (hole - 1) / 2;
            if !self.is_less(hole, parent) {
                break;
            }
            self.items.swap(hole, parent);
            hole = parent;
        }
    }

    fn percolate_down(&mut self, mut hole: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * hole + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.is_less(right, left) {
                right
            } else {
                left
            };
            if !self.is_less(child, hole) {
                break;
            }
            self.items.swap(hole, child);
            hole = child;
        }
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
