//! Ordered set of selectable values for one column.

use crate::error::{PickerError, PickerResult};

/// How the padded margins of a column are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Margins repeat the opposite end of the domain; scrolling loops.
    #[default]
    Wrap,
    /// Margins hold blank filler; scrolling stops at the first and last value.
    Fixed,
}

/// An ordered, finite list of unique values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDomain<T> {
    values: Vec<T>,
    mode: WrapMode,
}

impl<T: PartialEq> ValueDomain<T> {
    /// Build a domain, rejecting duplicate values.
    pub fn new(values: Vec<T>, mode: WrapMode) -> PickerResult<Self> {
        for (i, value) in values.iter().enumerate() {
            if values[..i].contains(value) {
                return Err(PickerError::DuplicateValue(i));
            }
        }
        Ok(Self { values, mode })
    }

    /// Position of `value` in the domain.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
}

impl<T> ValueDomain<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mode(&self) -> WrapMode {
        self.mode
    }

    pub fn wraps(&self) -> bool {
        self.mode == WrapMode::Wrap
    }

    /// A column with fewer than two values has nothing to choose between.
    pub fn is_disabled(&self) -> bool {
        self.values.len() < 2
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicates() {
        let err = ValueDomain::new(vec![1, 2, 3, 2], WrapMode::Wrap).unwrap_err();
        assert_eq!(err, PickerError::DuplicateValue(3));
    }

    #[test]
    fn test_index_of() {
        let domain = ValueDomain::new((1..=12).collect(), WrapMode::Wrap).unwrap();
        assert_eq!(domain.index_of(&9), Some(8));
        assert_eq!(domain.index_of(&13), None);
    }

    #[test]
    fn test_small_domains_are_disabled() {
        let empty: ValueDomain<u8> = ValueDomain::new(vec![], WrapMode::Wrap).unwrap();
        assert!(empty.is_disabled());
        let single = ValueDomain::new(vec!["only"], WrapMode::Fixed).unwrap();
        assert!(single.is_disabled());
        let pair = ValueDomain::new(vec!["AM", "PM"], WrapMode::Fixed).unwrap();
        assert!(!pair.is_disabled());
    }
}
