//! Construction macro for [`Set`](super::Set).

/// Creates a [`Set`](crate::collections::Set) from a list of elements.
///
/// Duplicates collapse onto their first occurrence, exactly like
/// [`Set::from_elements`](crate::collections::Set::from_elements).
///
/// # Examples
///
/// ```rust
/// use scalar_set::collections::Set;
/// use scalar_set::set;
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 1, 2, 3];
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
///
/// let words = set!["x", "y",];
/// assert_eq!(words.len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collections::Set::from_elements([$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::collections::Set;
    use rstest::rstest;

    #[rstest]
    fn test_set_macro_empty() {
        let set: Set<u8> = set![];
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_set_macro_collapses_duplicates() {
        let set = set![1, 1, 2, 3, 4, 4];
        assert_eq!(set.cardinality(), 4);
        assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
    }

    #[rstest]
    fn test_set_macro_with_strings() {
        let set = set!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"b".to_string()));
    }
}
