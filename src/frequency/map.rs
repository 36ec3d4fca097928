use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Word -> occurrence count
///
/// Merging is a key-wise sum, so it is associative and commutative with the
/// empty map as identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencyMap {
    counts: HashMap<String, u64>,
}

impl WordFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `word`, saturating at `u64::MAX`
    pub fn add(&mut self, word: impl Into<String>, count: u64) {
        let total = self.counts.entry(word.into()).or_insert(0);
        *total = total.saturating_add(count);
    }

    /// Adds every count of `other` into this map
    pub fn merge(&mut self, other: &WordFrequencyMap) {
        for (word, count) in &other.counts {
            self.add(word.as_str(), *count);
        }
    }

    /// Count for `word`, 0 when absent
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |sum, count| sum.saturating_add(*count))
    }

    /// Largest single count, `None` for an empty map
    pub fn max_count(&self) -> Option<u64> {
        self.counts.values().copied().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `n` most frequent words; ties are broken alphabetically
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut words: Vec<(&str, u64)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }

    /// Keys in sorted order, as persisted on disk
    pub(crate) fn sorted(&self) -> BTreeMap<&str, u64> {
        self.iter().collect()
    }
}

impl FromIterator<(String, u64)> for WordFrequencyMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (word, count) in iter {
            map.add(word, count);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, u64)]) -> WordFrequencyMap {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_merge_sums_keywise() {
        let mut a = map(&[("pikachu", 2), ("ash", 1)]);
        a.merge(&map(&[("pikachu", 3), ("misty", 4)]));

        assert_eq!(a, map(&[("pikachu", 5), ("ash", 1), ("misty", 4)]));
        assert_eq!(a.total(), 10);
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = map(&[("x", 1), ("y", 2)]);
        let b = map(&[("y", 5), ("z", 7)]);

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut a = map(&[("x", 1)]);
        a.merge(&WordFrequencyMap::new());
        assert_eq!(a, map(&[("x", 1)]));
    }

    #[test]
    fn test_merge_saturates_instead_of_overflowing() {
        let mut a = map(&[("a", u64::MAX), ("b", u64::MAX - 1)]);
        a.merge(&map(&[("a", 1), ("b", 5)]));

        assert_eq!(a.get("a"), u64::MAX);
        assert_eq!(a.get("b"), u64::MAX);
        assert_eq!(a.total(), u64::MAX);
    }

    #[test]
    fn test_top_breaks_ties_alphabetically() {
        let counts = map(&[("b", 3), ("a", 3), ("c", 9), ("d", 1)]);
        assert_eq!(counts.top(3), vec![("c", 9), ("a", 3), ("b", 3)]);
        assert_eq!(counts.top(10).len(), 4);
    }

    #[test]
    fn test_get_missing_word_is_zero() {
        let counts = map(&[("a", 1)]);
        assert_eq!(counts.get("zzz"), 0);
        assert_eq!(counts.max_count(), Some(1));
        assert_eq!(WordFrequencyMap::new().max_count(), None);
    }
}
