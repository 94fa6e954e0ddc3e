//! Set collections over scalar values.
//!
//! This module provides:
//!
//! - [`Set`]: an insertion-ordered set with set algebra and membership predicates
//! - [`Element`]: the equality and ordering bound for set members
//! - [`equal`] and [`same_elements`]: comparison helpers for element slices
//! - [`SetError`]: the error returned by strict construction
//!
//! # Examples
//!
//! ```rust
//! use scalar_set::collections::Set;
//!
//! let mut set = Set::from_elements([1, 2, 3]);
//! set.remove(&2);
//! assert!(!set.contains(&2));
//! assert_eq!(set.cardinality(), 2);
//!
//! let set_a = Set::from_elements(["x", "y"]);
//! let set_b = Set::from_elements(["y", "z"]);
//! assert_eq!((&set_a ^ &set_b).as_slice(), &["x", "z"]);
//! assert_eq!((&set_a | &set_b).len(), 3);
//! assert!(set_a.union([&set_b]).is_superset(&set_a));
//! ```

mod element;
mod error;
#[macro_use]
mod macros;
mod sequence;
mod set;

pub use element::Element;
pub use error::SetError;
pub use sequence::{equal, same_elements};
pub use set::{INLINE_CAPACITY, Set, SetIntoIterator, SetIterator, SetSortedIterator};
