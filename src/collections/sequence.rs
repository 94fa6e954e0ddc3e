//! Equality helpers for plain element sequences.
//!
//! These functions compare slices of [`Element`] values without building a
//! [`Set`](super::Set). They are handy for checking the insertion order a
//! set produced:
//!
//! ```rust
//! use scalar_set::collections::{Set, equal};
//!
//! let set = Set::from_elements([1, 1, 2, 3, 4, 4]);
//! assert!(equal(set.as_slice(), &[1, 2, 3, 4]));
//! ```

use super::Element;

/// Returns `true` if both sequences hold equal elements at every position.
///
/// Sequences of different lengths are never equal. Elements are compared
/// with [`Element::element_eq`], so two NaN entries match.
///
/// # Examples
///
/// ```rust
/// use scalar_set::collections::equal;
///
/// assert!(equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!equal(&[1, 2, 3], &[3, 2, 1]));
/// assert!(!equal(&[1, 2], &[1, 2, 3]));
/// assert!(equal::<i32>(&[], &[]));
/// ```
#[must_use]
pub fn equal<T: Element>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left_element, right_element)| left_element.element_eq(right_element))
}

/// Returns `true` if both sequences contain the same distinct elements.
///
/// Order and repetition are ignored: each element of one sequence only has
/// to appear somewhere in the other.
///
/// # Examples
///
/// ```rust
/// use scalar_set::collections::same_elements;
///
/// assert!(same_elements(&["b", "a"], &["a", "b"]));
/// assert!(same_elements(&[1, 1, 2], &[2, 1]));
/// assert!(!same_elements(&[1, 2], &[1, 3]));
/// ```
#[must_use]
pub fn same_elements<T: Element>(left: &[T], right: &[T]) -> bool {
    let covers = |outer: &[T], inner: &[T]| {
        outer
            .iter()
            .all(|element| inner.iter().any(|candidate| candidate.element_eq(element)))
    };
    covers(left, right) && covers(right, left)
}
