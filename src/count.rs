//! Word occurrence counts and the reducer that merges them.

use std::collections::HashMap;

/// Word -> number of occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct WordCount(HashMap<String, u64>);

/// Counts merged over every fragment of a text.
pub type AggregateCount = WordCount;

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occurrences of `word`; missing words count as zero.
    #[cfg(test)]
    pub fn get(&self, word: &str) -> u64 {
        self.0.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn add(&mut self, word: String) {
        *self.0.entry(word).or_insert(0) += 1;
    }

    /// Add every entry of `other`, summing on collision.
    pub fn merge(&mut self, other: WordCount) {
        for (word, count) in other.0 {
            *self.0.entry(word).or_insert(0) += count;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `n` most frequent words, by descending count then ascending word.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> =
            self.iter().map(|(w, c)| (w.to_string(), c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

impl FromIterator<(String, u64)> for WordCount {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = WordCount::new();
        for (word, count) in iter {
            *counts.0.entry(word).or_insert(0) += count;
        }
        counts
    }
}

/// Merge per-fragment counts into one aggregate. Order does not matter.
pub fn reduce<I>(counts: I) -> AggregateCount
where
    I: IntoIterator<Item = WordCount>,
{
    counts.into_iter().fold(WordCount::new(), |mut total, part| {
        total.merge(part);
        total
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wc(entries: &[(&str, u64)]) -> WordCount {
        entries.iter().map(|&(w, c)| (w.to_string(), c)).collect()
    }

    #[test]
    fn reduce_of_nothing_is_empty() {
        assert!(reduce(Vec::new()).is_empty());
    }

    #[test]
    fn reduce_sums_on_collision() {
        let total = reduce(vec![wc(&[("a", 2), ("b", 1)]), wc(&[("a", 3), ("c", 4)])]);
        assert_eq!(total, wc(&[("a", 5), ("b", 1), ("c", 4)]));
        assert_eq!(total.total(), 10);
    }

    #[test]
    fn reduce_is_order_independent() {
        let parts = [
            wc(&[("x", 1), ("y", 2)]),
            wc(&[("y", 5)]),
            wc(&[("z", 7), ("x", 3)]),
        ];
        let expected = reduce(parts.clone());
        let orders = [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let permuted: Vec<WordCount> = order.iter().map(|&i| parts[i].clone()).collect();
            assert_eq!(reduce(permuted), expected, "order {order:?}");
        }
    }

    #[test]
    fn iter_yields_every_entry() {
        let counts = wc(&[("a", 2), ("b", 1)]);
        let mut entries: Vec<(&str, u64)> = counts.iter().collect();
        entries.sort();
        assert_eq!(entries, vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn top_breaks_ties_alphabetically() {
        let counts = wc(&[("b", 2), ("c", 1), ("a", 2), ("d", 2)]);
        assert_eq!(
            counts.top(3),
            vec![("a".to_string(), 2), ("b".to_string(), 2), ("d".to_string(), 2)]
        );
    }

    #[test]
    fn top_is_bounded_by_entries() {
        let counts = wc(&[("a", 1)]);
        assert_eq!(counts.top(10).len(), 1);
        assert!(counts.top(0).is_empty());
        assert!(WordCount::new().top(5).is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let json = serde_json::to_value(wc(&[("rust", 3)])).unwrap();
        assert_eq!(json, serde_json::json!({ "rust": 3 }));
    }
}
