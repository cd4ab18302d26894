use std::fmt;

use crate::error::CoreError;

/// Position in the filtered view. Stored zero-based, shown one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    pub fn from_one_based(index: usize) -> Result<Self, CoreError> {
        index.checked_sub(1).map(Self).ok_or(CoreError::InvalidIndex)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0.saturating_add(1)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        let idx = Index::from_one_based(3).unwrap();
        assert_eq!(idx.zero_based(), 2);
        assert_eq!(idx.one_based(), 3);
        assert_eq!(idx, Index::from_zero_based(2));
        assert_eq!(idx.to_string(), "3");
    }

    #[test]
    fn zero_is_not_a_one_based_index() {
        assert!(matches!(Index::from_one_based(0), Err(CoreError::InvalidIndex)));
    }

    #[test]
    fn largest_index_displays_without_overflow() {
        let idx = Index::from_zero_based(usize::MAX);
        assert_eq!(idx.one_based(), usize::MAX);
        assert_eq!(idx.to_string(), usize::MAX.to_string());
    }
}
