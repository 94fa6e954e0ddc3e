//! # scalar-set
//!
//! An insertion-ordered set container for scalar values.
//!
//! ## Overview
//!
//! This library provides a small, mutable [`Set`](collections::Set) over
//! integers, floats, characters and strings. It includes:
//!
//! - **Set Algebra**: union, intersection, difference, symmetric difference
//! - **Predicates**: membership, subset, superset, disjointness
//! - **Mutation**: add, remove, clear, with idempotent insertion
//! - **Sequence Helpers**: positional and order-insensitive slice equality
//!
//! ## Feature Flags
//!
//! - `collections`: The set container and helpers (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Set`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use scalar_set::prelude::*;
//!
//! let mut set = Set::from_elements([1, 1, 2, 3, 4, 4]);
//! assert_eq!(set.cardinality(), 4);
//!
//! set.add(5);
//! set.remove(&1);
//! assert_eq!(set.as_slice(), &[2, 3, 4, 5]);
//!
//! let evens = set![2, 4, 6];
//! assert_eq!(set.intersection([&evens]).as_slice(), &[2, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use scalar_set::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "collections")]
    pub use crate::set;
}

#[cfg(feature = "collections")]
pub mod collections;
