use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A normalized name string and its corpus-wide mention count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub count: u32,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Mention counts keyed by normalized name, remembering first-seen order.
///
/// Iteration yields candidates in the order their first mention was recorded,
/// which the clusterer relies on to break count ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one mention of `name`.
    pub fn record(&mut self, name: &str) {
        self.add(name, 1);
    }

    /// Add `count` mentions of `name`, creating the entry on first sight.
    pub fn add(&mut self, name: &str, count: u32) {
        if let Some(&idx) = self.index.get(name) {
            self.entries[idx].count += count;
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push(Candidate::new(name, count));
        }
    }

    pub fn count(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&idx| self.entries[idx].count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all mention counts.
    pub fn total_mentions(&self) -> u64 {
        self.entries.iter().map(|c| u64::from(c.count)).sum()
    }

    /// A new table holding only entries with at least `min` mentions, in the same order.
    #[must_use]
    pub fn retain_min(&self, min: u32) -> Self {
        self.iter().filter(|c| c.count >= min).cloned().collect()
    }

    /// Candidates ordered by descending count; ties keep first-seen order.
    pub fn by_count_desc(&self) -> Vec<&Candidate> {
        let mut sorted: Vec<&Candidate> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    /// The `n` most mentioned candidates.
    pub fn most_common(&self, n: usize) -> Vec<&Candidate> {
        let mut sorted = self.by_count_desc();
        sorted.truncate(n);
        sorted
    }
}

impl FromIterator<Candidate> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut table = Self::new();
        for candidate in iter {
            table.add(&candidate.name, candidate.count);
        }
        table
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Drops candidates mentioned fewer than `min_frequency` times.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAggregator {
    min_frequency: u32,
}

impl FrequencyAggregator {
    #[must_use]
    pub const fn new(min_frequency: u32) -> Self {
        Self { min_frequency }
    }

    pub const fn min_frequency(&self) -> u32 {
        self.min_frequency
    }

    pub fn apply(&self, table: &FrequencyTable) -> FrequencyTable {
        let kept = table.retain_min(self.min_frequency);
        tracing::debug!(
            min_frequency = self.min_frequency,
            input = table.len(),
            kept = kept.len(),
            "frequency filter applied"
        );
        kept
    }
}
