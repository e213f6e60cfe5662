//! Finite backing sequence that makes a short list look endless.
//!
//! For a wrapping domain the last `margin` values are copied in front and
//! the first `margin` values are copied behind:
//!
//! ```text
//! domain  = [1 2 3 4 5],  margin = 2
//! padded  = [4 5 | 1 2 3 4 5 | 1 2]
//! ```
//!
//! A fixed domain gets blank filler instead, so the same center arithmetic
//! applies without suggesting a loop.

use crate::error::{PickerError, PickerResult};

use super::domain::{ValueDomain, WrapMode};

/// One rendered entry of a padded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a, T> {
    /// A real value, with its position in the domain.
    Value { value: &'a T, domain_index: usize },
    /// Filler in the margin of a fixed domain.
    Blank,
}

impl<'a, T> Entry<'a, T> {
    pub fn value(&self) -> Option<&'a T> {
        match self {
            Entry::Value { value, .. } => Some(value),
            Entry::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Entry::Blank)
    }
}

/// A domain plus its margin, indexed by extended index `0..len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedSequence<T> {
    domain: ValueDomain<T>,
    margin: usize,
}

impl<T> PaddedSequence<T> {
    /// Pad `domain` with `margin` entries on both ends.
    ///
    /// Wrapping domains must be longer than the margin, otherwise a margin
    /// would have to repeat a value twice. Disabled domains are accepted
    /// as-is, they never scroll.
    pub fn build(domain: ValueDomain<T>, margin: usize) -> PickerResult<Self> {
        if domain.wraps() && !domain.is_disabled() && margin >= domain.len() {
            return Err(PickerError::MarginTooLarge {
                margin,
                len: domain.len(),
            });
        }
        Ok(Self { domain, margin })
    }

    pub fn domain(&self) -> &ValueDomain<T> {
        &self.domain
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Always `domain.len() + 2 * margin`.
    pub fn len(&self) -> usize {
        self.domain.len() + 2 * self.margin
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Entry at an extended index, or `None` past either end.
    pub fn get(&self, extended: usize) -> Option<Entry<'_, T>> {
        if extended >= self.len() || self.domain.is_empty() {
            return None;
        }
        let n = self.domain.len() as i64;
        let shifted = extended as i64 - self.margin as i64;
        let shifted = match self.domain.mode() {
            WrapMode::Wrap => shifted.rem_euclid(n),
            WrapMode::Fixed if (0..n).contains(&shifted) => shifted,
            WrapMode::Fixed => return Some(Entry::Blank),
        };
        let domain_index = shifted as usize;
        self.domain.get(domain_index).map(|value| Entry::Value {
            value,
            domain_index,
        })
    }

    /// Every extended index that shows the domain value at `domain_index`,
    /// in ascending order. The canonical copy is `domain_index + margin`.
    pub fn occurrences(&self, domain_index: usize) -> Vec<usize> {
        let n = self.domain.len();
        if domain_index >= n {
            return vec![];
        }
        let canonical = domain_index + self.margin;
        if !self.domain.wraps() {
            return vec![canonical];
        }
        let mut found = vec![];
        if canonical >= n {
            found.push(canonical - n);
        }
        found.push(canonical);
        if canonical + n < self.len() {
            found.push(canonical + n);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> PaddedSequence<u8> {
        let domain = ValueDomain::new((1..=12).collect(), WrapMode::Wrap).unwrap();
        PaddedSequence::build(domain, 3).unwrap()
    }

    #[test]
    fn test_wrap_layout() {
        let seq = hours();
        assert_eq!(seq.len(), 18);
        let values: Vec<u8> = (0..seq.len())
            .filter_map(|i| seq.get(i)?.value().copied())
            .collect();
        assert_eq!(
            values,
            vec![10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3]
        );
    }

    #[test]
    fn test_wraparound_consistency() {
        let seq = hours();
        let n = 12i64;
        for i in 0..seq.len() {
            let expected = seq.domain().get(((i as i64 - 3).rem_euclid(n)) as usize);
            assert_eq!(seq.get(i).and_then(|e| e.value()), expected, "index {i}");
        }
        assert!(seq.get(seq.len()).is_none());
    }

    #[test]
    fn test_fixed_layout_uses_blanks() {
        let domain = ValueDomain::new(vec!["AM", "PM"], WrapMode::Fixed).unwrap();
        let seq = PaddedSequence::build(domain, 2).unwrap();
        assert_eq!(seq.len(), 6);
        assert!(seq.get(0).unwrap().is_blank());
        assert!(seq.get(1).unwrap().is_blank());
        assert_eq!(seq.get(2).unwrap().value(), Some(&"AM"));
        assert_eq!(seq.get(3).unwrap().value(), Some(&"PM"));
        assert!(seq.get(4).unwrap().is_blank());
        assert!(seq.get(5).unwrap().is_blank());
    }

    #[test]
    fn test_margin_must_be_smaller_than_wrap_domain() {
        let domain = ValueDomain::new(vec![1, 2, 3], WrapMode::Wrap).unwrap();
        assert_eq!(
            PaddedSequence::build(domain, 3).unwrap_err(),
            PickerError::MarginTooLarge { margin: 3, len: 3 }
        );
        let fixed = ValueDomain::new(vec!["AM", "PM"], WrapMode::Fixed).unwrap();
        assert!(PaddedSequence::build(fixed, 3).is_ok());
    }

    #[test]
    fn test_occurrences_of_boundary_values() {
        let seq = hours();
        // 12 sits at the front margin, canonically, and never behind.
        assert_eq!(seq.occurrences(11), vec![2, 14]);
        // 1 sits canonically and in the back margin.
        assert_eq!(seq.occurrences(0), vec![3, 15]);
        // Middle values appear once.
        assert_eq!(seq.occurrences(5), vec![8]);
    }
}
