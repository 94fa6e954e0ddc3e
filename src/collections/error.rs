//! Error types for set construction.
//!
//! The set API itself is total: membership, algebra and mutation never
//! fail. The only fallible entry point is the strict constructor
//! [`Set::try_from_unique`](super::Set::try_from_unique), which rejects
//! input that already contains duplicates instead of collapsing them.

use thiserror::Error;

/// Represents errors that can occur when building a set from strict input.
///
/// # Examples
///
/// ```rust
/// use scalar_set::collections::{Set, SetError};
///
/// let result = Set::try_from_unique([1, 2, 1]);
/// assert_eq!(result, Err(SetError::DuplicateElement { position: 2 }));
/// assert_eq!(
///     result.unwrap_err().to_string(),
///     "duplicate element at input position 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// An input element repeated one seen earlier.
    #[error("duplicate element at input position {position}")]
    DuplicateElement {
        /// Zero-based position of the repeated element in the input.
        position: usize,
    },
}
