//! Insertion-ordered set of scalar values.
//!
//! This module provides [`Set`], a mutable collection of unique elements
//! that remembers the order in which elements were first added.
//!
//! # Overview
//!
//! `Set` stores its members in a `SmallVec`:
//! - Up to 8 elements live inline, without a heap allocation
//! - Larger sets spill to the heap transparently
//! - Storage is never sorted; iteration follows insertion order
//!
//! Membership uses a linear scan with [`Element::element_eq`], which keeps
//! the container usable for floats and other types without `Hash` or `Eq`.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity          |
//! |------------------------|---------------------|
//! | `contains` / `index`   | O(n)                |
//! | `add`                  | O(n)                |
//! | `remove`               | O(n)                |
//! | `len` / `is_empty`     | O(1)                |
//! | `union`                | O(N * n) over all inputs |
//! | `intersection`         | O(n * m * k)        |
//! | `difference`           | O(n * m * k)        |
//! | `symmetric_difference` | O(n * m)            |
//! | `iter_sorted`          | O(n log n)          |
//!
//! # Examples
//!
//! ```rust
//! use scalar_set::collections::Set;
//!
//! let mut set = Set::from_elements([1, 1, 2, 3, 4, 4]);
//! assert_eq!(set.cardinality(), 4);
//! assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
//!
//! set.remove(&2);
//! assert!(set.not_contains(&2));
//! assert_eq!(set.len(), 3);
//!
//! let other = Set::from_elements([3, 4, 5]);
//! assert_eq!(set.intersection([&other]).as_slice(), &[3, 4]);
//! ```
//!
//! # Derived Sets
//!
//! Every operation that produces a new set (`copy`, `union`, `intersection`,
//! `difference`, `symmetric_difference`) builds it in fresh storage. Mutating
//! a derived set never affects the sets it was computed from.
//!
//! ```rust
//! use scalar_set::collections::Set;
//!
//! let original = Set::from_elements(["a", "b"]);
//! let mut copied = original.copy();
//! copied.add("c");
//!
//! assert_eq!(original.len(), 2);
//! assert_eq!(copied.len(), 3);
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use tracing::trace;

use super::{Element, SetError};

/// Number of elements a [`Set`] stores inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = 8;

type Storage<T> = SmallVec<[T; INLINE_CAPACITY]>;

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable set of unique elements that preserves insertion order.
///
/// Duplicates are detected with [`Element::element_eq`] and silently
/// ignored on insertion. The cardinality always equals the number of stored
/// elements.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement [`Element`].
///
/// # Examples
///
/// ```rust
/// use scalar_set::collections::Set;
///
/// let set_a = Set::from_elements(["x", "y"]);
/// let set_b = Set::from_elements(["y", "z"]);
///
/// let symmetric = set_a.symmetric_difference(&set_b);
/// assert_eq!(symmetric.as_slice(), &["x", "z"]);
/// ```
#[derive(Clone)]
pub struct Set<T: Element> {
    elements: Storage<T>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<f64>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);

impl<T: Element> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut elements = SmallVec::new();
        elements.push(element);
        Self { elements }
    }

    /// Creates a set from the given elements.
    ///
    /// Starts from the empty set and adds each element in turn, so
    /// duplicates collapse onto their first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements([1, 1, 2, 3, 4, 4]);
    /// assert_eq!(set.cardinality(), 4);
    /// assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
    ///
    /// let empty = Set::from_elements(Vec::<i32>::new());
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.add_all(elements);
        set
    }

    /// Creates a set from input that must not contain duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DuplicateElement`] with the zero-based input
    /// position of the first element that repeats an earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::{Set, SetError};
    ///
    /// let set = Set::try_from_unique([3, 1, 2]).unwrap();
    /// assert_eq!(set.as_slice(), &[3, 1, 2]);
    ///
    /// let error = Set::try_from_unique(["a", "b", "a"]).unwrap_err();
    /// assert_eq!(error, SetError::DuplicateElement { position: 2 });
    /// ```
    pub fn try_from_unique<I>(elements: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for (position, element) in elements.into_iter().enumerate() {
            if !set.insert_absent(element) {
                return Err(SetError::DuplicateElement { position });
            }
        }
        Ok(set)
    }

    // =========================================================================
    // Size Queries
    // =========================================================================

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements([1, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the set. Same as [`Set::len`].
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns the number of distinct elements in the set. Same as [`Set::len`].
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let empty: Set<i32> = Set::new();
    /// assert!(empty.is_empty());
    /// assert!(!Set::singleton(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Returns `true` if the set contains the specified element.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements([1.5, f64::NAN]);
    /// assert!(set.contains(&1.5));
    /// assert!(set.contains(&f64::NAN));
    /// assert!(!set.contains(&2.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.index(element).is_some()
    }

    /// Returns `true` if the set does not contain the specified element.
    ///
    /// This is always the negation of [`Set::contains`].
    #[inline]
    #[must_use]
    pub fn not_contains(&self, element: &T) -> bool {
        !self.contains(element)
    }

    /// Returns the insertion position of `element`, or `None` if it is absent.
    ///
    /// Positions are zero-based and shift down when an earlier element is
    /// removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements(["a", "b", "c"]);
    /// assert_eq!(set.index(&"b"), Some(1));
    /// assert_eq!(set.index(&"z"), None);
    /// ```
    #[must_use]
    pub fn index(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|item| item.element_eq(element))
    }

    /// Returns a reference to the element at `position` in insertion order.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.elements.get(position)
    }

    /// Returns the elements as a slice in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements([3, 1, 2]);
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.elements.iter(),
        }
    }

    // =========================================================================
    // Relational Predicates
    // =========================================================================

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([3, 4]);
    /// let set_c = Set::from_elements([2, 3]);
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Scan the smaller set
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        smaller.iter().all(|element| larger.not_contains(element))
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let subset = Set::from_elements([1, 2]);
    /// let superset = Set::from_elements([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let superset = Set::from_elements([1, 2, 3]);
    /// let subset = Set::from_elements([1, 2]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns a new set with the elements of `self` and of every set in `others`.
    ///
    /// Elements keep the order of first appearance: `self` first, then each
    /// other set in turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    /// let set_c = Set::from_elements([5, 1]);
    ///
    /// let union = set_a.union([&set_b, &set_c]);
    /// assert_eq!(union.as_slice(), &[1, 2, 3, 5]);
    /// ```
    #[must_use]
    pub fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut result = self.copy();
        for other in others {
            for element in other {
                result.insert_absent(element.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements of `self` present in every set in `others`.
    ///
    /// With no other sets, the result is a copy of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set_a = Set::from_elements([1, 2, 3, 4]);
    /// let set_b = Set::from_elements([4, 3, 2]);
    /// let set_c = Set::from_elements([2, 4]);
    ///
    /// let intersection = set_a.intersection([&set_b, &set_c]);
    /// assert_eq!(intersection.as_slice(), &[2, 4]);
    /// ```
    #[must_use]
    pub fn intersection<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let others: SmallVec<[&Self; 4]> = others.into_iter().collect();
        self.retained(|element| others.iter().all(|other| other.contains(element)))
    }

    /// Returns a new set with the elements of `self` present in none of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set_a = Set::from_elements([1, 2, 3, 4]);
    /// let set_b = Set::from_elements([2]);
    /// let set_c = Set::from_elements([4, 9]);
    ///
    /// let difference = set_a.difference([&set_b, &set_c]);
    /// assert_eq!(difference.as_slice(), &[1, 3]);
    /// ```
    #[must_use]
    pub fn difference<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let others: SmallVec<[&Self; 4]> = others.into_iter().collect();
        self.retained(|element| others.iter().all(|other| other.not_contains(element)))
    }

    /// Returns a new set with the elements in exactly one of `self` and `other`.
    ///
    /// Survivors from `self` come first, followed by survivors from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set_a = Set::from_elements([1, 2, 3]);
    /// let set_b = Set::from_elements([2, 3, 4]);
    ///
    /// let symmetric = set_a.symmetric_difference(&set_b);
    /// assert_eq!(symmetric.as_slice(), &[1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.retained(|element| other.not_contains(element));
        for element in other {
            if self.not_contains(element) {
                result.elements.push(element.clone());
            }
        }
        result
    }

    /// Returns an independent copy of the set.
    ///
    /// The copy owns fresh storage; mutating it never affects `self`.
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Builds a new set from the elements of `self` that satisfy `predicate`.
    ///
    /// Elements of `self` are already unique, so they are pushed directly.
    fn retained<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .iter()
                .filter(|&element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds an element if it is not already present.
    ///
    /// Returns `true` if the element was inserted. Adding an element that is
    /// already present changes neither the cardinality nor the order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        let inserted = self.insert_absent(element);
        trace!(
            target: "scalar_set",
            inserted = usize::from(inserted),
            cardinality = self.len(),
            "add"
        );
        inserted
    }

    /// Adds every element from `elements`, skipping those already present.
    ///
    /// Returns the number of elements actually inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let mut set = Set::singleton(2);
    /// assert_eq!(set.add_all([1, 2, 3, 3]), 2);
    /// assert_eq!(set.as_slice(), &[2, 1, 3]);
    /// ```
    pub fn add_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let inserted = elements
            .into_iter()
            .map(|element| self.insert_absent(element))
            .filter(|inserted| *inserted)
            .count();
        trace!(
            target: "scalar_set",
            inserted,
            cardinality = self.len(),
            "add_all"
        );
        inserted
    }

    /// Removes an element from the set.
    ///
    /// The element is deleted at its own storage position; the remaining
    /// elements keep their relative order. Returns `true` if the element was
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let mut set = Set::from_elements([1, 2, 3]);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        let removed = self.delete_present(element);
        trace!(
            target: "scalar_set",
            removed = usize::from(removed),
            cardinality = self.len(),
            "remove"
        );
        removed
    }

    /// Removes every element yielded by `elements` that is present.
    ///
    /// Returns the number of elements actually removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let mut set = Set::from_elements([10, 20, 30, 40]);
    /// assert_eq!(set.remove_all(&[40, 10, 99]), 2);
    /// assert_eq!(set.as_slice(), &[20, 30]);
    /// ```
    pub fn remove_all<'a, I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let removed = elements
            .into_iter()
            .filter(|&element| self.delete_present(element))
            .count();
        trace!(
            target: "scalar_set",
            removed,
            cardinality = self.len(),
            "remove_all"
        );
        removed
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        let removed = self.len();
        self.elements.clear();
        trace!(target: "scalar_set", removed, cardinality = 0_usize, "clear");
    }

    // Bulk paths share these so that they emit one event per call.
    fn insert_absent(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    fn delete_present(&mut self, element: &T) -> bool {
        match self.index(element) {
            Some(position) => {
                self.elements.remove(position);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Sorted Views
    // =========================================================================

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Elements are ordered by [`Element::element_cmp`].
    ///
    /// # Memory Allocation
    ///
    /// Sorts references into a `SmallVec`, so sets of up to 8 elements do not
    /// allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements([3, 1, 2]);
    /// let sorted: Vec<&i32> = set.iter_sorted().collect();
    /// assert_eq!(sorted, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter_sorted(&self) -> SetSortedIterator<'_, T> {
        let mut sorted: SmallVec<[&T; INLINE_CAPACITY]> = self.elements.iter().collect();
        sorted.sort_unstable_by(|left, right| left.element_cmp(right));
        SetSortedIterator {
            inner: sorted.into_iter(),
        }
    }

    /// Returns a `Vec` with clones of all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements(["pear", "apple", "fig"]);
    /// assert_eq!(set.to_sorted_vec(), vec!["apple", "fig", "pear"]);
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.iter_sorted().cloned().collect()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalar_set::collections::Set;
    ///
    /// let set = Set::from_elements([3, 1, 2]);
    /// assert_eq!(set.first_sorted(), Some(&1));
    /// ```
    #[must_use]
    pub fn first_sorted(&self) -> Option<&T> {
        self.iter().min_by(|left, right| left.element_cmp(right))
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[must_use]
    pub fn last_sorted(&self) -> Option<&T> {
        self.iter().max_by(|left, right| left.element_cmp(right))
    }

    /// Returns `true` if the elements are stored inline.
    #[cfg(test)]
    fn is_inline(&self) -> bool {
        !self.elements.spilled()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`] in insertion order.
pub struct SetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An iterator over the elements of a [`Set`] in ascending order.
pub struct SetSortedIterator<'a, T> {
    inner: smallvec::IntoIter<[&'a T; INLINE_CAPACITY]>,
}

impl<'a, T> Iterator for SetSortedIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetSortedIterator<'_, T> {}

impl<T> FusedIterator for SetSortedIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`] in insertion order.
pub struct SetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Element> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Element> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Element> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Set equality ignores insertion order.
impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Element> Eq for Set<T> {}

impl<T: Element + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Element + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Element> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self ∪ rhs`.
    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union([rhs])
    }
}

impl<T: Element> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self ∩ rhs`.
    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection([rhs])
    }
}

impl<T: Element> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self - rhs`.
    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference([rhs])
    }
}

impl<T: Element> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self △ rhs`.
    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Element> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Element,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates collapse, as with `Set::from_elements`.
        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            set.insert_absent(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Element,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_follows_insertion_order() {
        let set = Set::from_elements([3, 1, 2]);
        assert_eq!(format!("{set}"), "{3, 1, 2}");
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set = Set::from_elements(["a", "b"]);
        assert_eq!(format!("{set:?}"), r#"{"a", "b"}"#);
    }

    // =========================================================================
    // Storage Tests
    // =========================================================================

    #[rstest]
    fn test_small_set_stays_inline() {
        let set = Set::from_elements(1..=8);
        assert!(set.is_inline());
    }

    #[rstest]
    fn test_ninth_element_spills() {
        let mut set = Set::from_elements(1..=8);
        set.add(9);
        assert!(!set.is_inline());
        assert_eq!(set.len(), 9);
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[rstest]
    fn test_cardinality_tracks_length_through_mutation() {
        let mut set = Set::new();
        set.add_all(0..20);
        assert_eq!(set.cardinality(), set.as_slice().len());
        set.remove_all(&[0, 5, 19, 100]);
        assert_eq!(set.cardinality(), 17);
        assert_eq!(set.size(), set.as_slice().len());
        set.clear();
        assert_eq!(set.cardinality(), 0);
    }

    // =========================================================================
    // Removal Position Tests
    // =========================================================================

    #[rstest]
    fn test_remove_deletes_matched_element_not_argument_position() {
        let mut set = Set::from_elements([10, 20, 30]);
        // Argument position 0 must not be confused with the stored position of 30.
        set.remove_all(&[30]);
        assert_eq!(set.as_slice(), &[10, 20]);
    }

    #[rstest]
    fn test_remove_all_with_more_arguments_than_elements() {
        let mut set = Set::from_elements([1, 2]);
        assert_eq!(set.remove_all(&[7, 8, 9, 2, 1]), 2);
        assert!(set.is_empty());
    }

    // =========================================================================
    // Algebra Ordering Tests
    // =========================================================================

    #[rstest]
    fn test_union_with_no_others_copies_self() {
        let set = Set::from_elements([1, 2]);
        let none: [&Set<i32>; 0] = [];
        assert_eq!(set.union(none).as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_intersection_with_no_others_copies_self() {
        let set = Set::from_elements([4, 5]);
        let none: [&Set<i32>; 0] = [];
        assert_eq!(set.intersection(none).as_slice(), &[4, 5]);
    }

    #[rstest]
    fn test_symmetric_difference_orders_self_before_other() {
        let set_a = Set::from_elements([5, 1, 2]);
        let set_b = Set::from_elements([9, 2, 7]);
        assert_eq!(set_a.symmetric_difference(&set_b).as_slice(), &[5, 1, 9, 7]);
    }

    // =========================================================================
    // Sorted View Tests
    // =========================================================================

    #[rstest]
    fn test_iter_sorted_on_spilled_set() {
        let set = Set::from_elements((0..20).rev());
        let sorted: Vec<i32> = set.iter_sorted().copied().collect();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
        assert_eq!(set.iter_sorted().len(), 20);
    }

    #[rstest]
    fn test_float_sorted_view_puts_nan_last() {
        let set = Set::from_elements([f64::NAN, 2.0, -1.0]);
        let sorted = set.to_sorted_vec();
        assert_eq!(&sorted[..2], &[-1.0, 2.0]);
        assert!(sorted[2].is_nan());
        assert!(set.last_sorted().is_some_and(|value| value.is_nan()));
        assert_eq!(set.first_sorted(), Some(&-1.0));
    }

    #[rstest]
    fn test_first_and_last_sorted_on_empty_set() {
        let set: Set<String> = Set::new();
        assert_eq!(set.first_sorted(), None);
        assert_eq!(set.last_sorted(), None);
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_iterators_are_double_ended_and_exact_size() {
        let set = Set::from_elements([1, 2, 3]);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 1);

        let mut owned = set.into_iter();
        assert_eq!(owned.next_back(), Some(3));
        assert_eq!(owned.collect::<Vec<_>>(), vec![1, 2]);
    }
}
