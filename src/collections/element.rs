//! The element bound for [`Set`](super::Set).
//!
//! A set only needs two things from its elements: a way to decide whether
//! two values are the same member, and a total order for the sorted views.
//! [`Element`] captures both. It is implemented for the scalar types
//! (integers, floats, characters, and strings) and can be implemented for
//! any other value type that has a meaningful equality and ordering.
//!
//! # Floating-Point Elements
//!
//! `f32` and `f64` do not implement `Eq`, so they cannot go through the
//! blanket machinery other collections rely on. Their `Element` equality is
//! IEEE `==` with one extension: every NaN equals every other NaN. As a
//! result a set holds at most one NaN, and `0.0` and `-0.0` are the same
//! member.
//!
//! ```rust
//! use scalar_set::collections::Element;
//!
//! assert!(f64::NAN.element_eq(&f64::NAN));
//! assert!(0.0_f64.element_eq(&-0.0));
//! assert!(!1.0_f64.element_eq(&2.0));
//! ```

use std::cmp::Ordering;

/// A value that can be stored in a [`Set`](super::Set).
///
/// # Laws
///
/// Implementations must keep the two methods consistent:
///
/// - `element_eq` is reflexive, symmetric and transitive.
/// - `element_cmp(a, b) == Ordering::Equal` if and only if `element_eq(a, b)`.
/// - `element_cmp` is a total order.
///
/// # Examples
///
/// ```rust
/// use scalar_set::collections::{Element, Set};
/// use std::cmp::Ordering;
///
/// #[derive(Clone, Debug)]
/// struct Version(u32, u32);
///
/// impl Element for Version {
///     fn element_eq(&self, other: &Self) -> bool {
///         self.0 == other.0 && self.1 == other.1
///     }
///
///     fn element_cmp(&self, other: &Self) -> Ordering {
///         (self.0, self.1).cmp(&(other.0, other.1))
///     }
/// }
///
/// let versions = Set::from_elements([Version(1, 2), Version(1, 0), Version(1, 2)]);
/// assert_eq!(versions.len(), 2);
/// ```
pub trait Element: Clone {
    /// Returns `true` if `self` and `other` are the same set member.
    fn element_eq(&self, other: &Self) -> bool;

    /// Compares two elements under the total order used by sorted views.
    fn element_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_element_for_ord {
    ($($element_type:ty),* $(,)?) => {
        $(
            impl Element for $element_type {
                #[inline]
                fn element_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn element_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_element_for_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String,
    Box<str>,
);

impl Element for &str {
    #[inline]
    fn element_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn element_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(*self, *other)
    }
}

macro_rules! impl_element_for_float {
    ($($float_type:ty),* $(,)?) => {
        $(
            // Exact comparison is intended; NaN and signed zeros are handled explicitly.
            #[allow(clippy::float_cmp)]
            impl Element for $float_type {
                #[inline]
                fn element_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }

                // NaN sorts after every number; signed zeros compare equal.
                fn element_cmp(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        (false, false) => {
                            if self < other {
                                Ordering::Less
                            } else if self > other {
                                Ordering::Greater
                            } else {
                                Ordering::Equal
                            }
                        }
                    }
                }
            }
        )*
    };
}

impl_element_for_float!(f32, f64);
