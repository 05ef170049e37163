use std::fmt;

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::config::{ConfidenceBands, MatcherKind, PipelineConfig};

/// How strongly the corpus supports a cluster, graded by mention count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn from_count(count: u64, bands: &ConfidenceBands) -> Self {
        if count >= u64::from(bands.high) {
            Self::High
        } else if count >= u64::from(bands.medium) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Capitalized form used in tabular exports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One deduplicated person: a display name, its total mentions and every
/// spelling merged into it, canonical form first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCluster {
    pub canonical: String,
    pub total_count: u64,
    pub variants: Vec<String>,
}

impl CanonicalCluster {
    #[must_use]
    pub fn new(canonical: impl Into<String>, count: u32) -> Self {
        let canonical = canonical.into();
        Self {
            variants: vec![canonical.clone()],
            canonical,
            total_count: u64::from(count),
        }
    }

    pub fn absorb(&mut self, variant: &str, count: u32) {
        self.total_count += u64::from(count);
        self.variants.push(variant.to_string());
    }

    pub fn confidence(&self, bands: &ConfidenceBands) -> ConfidenceLevel {
        ConfidenceLevel::from_count(self.total_count, bands)
    }

    /// Variants other than the canonical form, in merge order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != self.canonical)
    }
}

/// Decides whether two candidate strings denote the same person.
///
/// Implementations must be symmetric: `is_similar(a, b) == is_similar(b, a)`.
pub trait NameMatcher: Send + Sync {
    fn kind(&self) -> MatcherKind;

    /// Score in `[0, 1]` once the exact and substring shortcuts have not applied.
    fn score(&self, a: &str, b: &str) -> f64;

    fn threshold(&self) -> f64;

    fn length_ratio_floor(&self) -> f64;

    fn is_similar(&self, a: &str, b: &str) -> bool {
        if a == b || a.contains(b) || b.contains(a) {
            return true;
        }
        let (len_a, len_b) = (a.chars().count(), b.chars().count());
        let longer = len_a.max(len_b) as f64;
        let shorter = len_a.min(len_b) as f64;
        if shorter / longer < self.length_ratio_floor() {
            return false;
        }
        self.score(a, b) >= self.threshold()
    }
}

/// Fraction of aligned positions holding the same character, over the longer length.
///
/// Cheap and tuned for OCR substitutions; an inserted or dropped letter shifts
/// every later position out of alignment.
#[derive(Debug, Clone, Copy)]
pub struct PositionalMatcher {
    threshold: f64,
    length_ratio_floor: f64,
}

impl PositionalMatcher {
    #[must_use]
    pub const fn new(threshold: f64, length_ratio_floor: f64) -> Self {
        Self {
            threshold,
            length_ratio_floor,
        }
    }

    fn positional_ratio(a: &str, b: &str) -> f64 {
        let longer = a.chars().count().max(b.chars().count());
        if longer == 0 {
            return 1.0;
        }
        let matches = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
        matches as f64 / longer as f64
    }
}

impl Default for PositionalMatcher {
    fn default() -> Self {
        Self::new(0.85, 0.7)
    }
}

impl NameMatcher for PositionalMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Positional
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        Self::positional_ratio(a, b)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn length_ratio_floor(&self) -> f64 {
        self.length_ratio_floor
    }
}

/// Normalized Levenshtein similarity; survives shifted insertions.
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceMatcher {
    threshold: f64,
    length_ratio_floor: f64,
}

impl EditDistanceMatcher {
    #[must_use]
    pub const fn new(threshold: f64, length_ratio_floor: f64) -> Self {
        Self {
            threshold,
            length_ratio_floor,
        }
    }
}

impl Default for EditDistanceMatcher {
    fn default() -> Self {
        Self::new(0.85, 0.7)
    }
}

impl NameMatcher for EditDistanceMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::EditDistance
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn length_ratio_floor(&self) -> f64 {
        self.length_ratio_floor
    }
}

/// Build the matcher a config asks for.
pub fn matcher_for(config: &PipelineConfig) -> Box<dyn NameMatcher> {
    match config.matcher {
        MatcherKind::Positional => Box::new(PositionalMatcher::new(
            config.similarity_threshold,
            config.length_ratio_floor,
        )),
        MatcherKind::EditDistance => Box::new(EditDistanceMatcher::new(
            config.similarity_threshold,
            config.length_ratio_floor,
        )),
    }
}

/// Folds validated candidates into clusters, most-mentioned first.
pub struct SimilarityClusterer {
    matcher: Box<dyn NameMatcher>,
}

impl SimilarityClusterer {
    #[must_use]
    pub fn new(matcher: Box<dyn NameMatcher>) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &dyn NameMatcher {
        self.matcher.as_ref()
    }

    /// Each candidate joins the first cluster whose canonical name it matches,
    /// or anchors a new one. Candidates are visited by descending count, ties in
    /// first-seen order, so the most frequent spelling becomes canonical.
    pub fn cluster(&self, candidates: &FrequencyTable) -> Vec<CanonicalCluster> {
        let mut clusters: Vec<CanonicalCluster> = Vec::new();

        for candidate in candidates.by_count_desc() {
            let target = clusters
                .iter_mut()
                .find(|c| self.matcher.is_similar(&candidate.name, &c.canonical));

            match target {
                Some(cluster) => cluster.absorb(&candidate.name, candidate.count),
                None => clusters.push(CanonicalCluster::new(&candidate.name, candidate.count)),
            }
        }

        tracing::debug!(
            matcher = ?self.matcher.kind(),
            candidates = candidates.len(),
            clusters = clusters.len(),
            "similar names clustered"
        );
        clusters
    }
}

impl Default for SimilarityClusterer {
    fn default() -> Self {
        Self::new(Box::new(PositionalMatcher::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::frequency::Candidate;

    fn table(entries: &[(&str, u32)]) -> FrequencyTable {
        entries
            .iter()
            .map(|(name, count)| Candidate::new(*name, *count))
            .collect()
    }

    #[test]
    fn exact_and_substring_are_similar() {
        let m = PositionalMatcher::default();
        assert!(m.is_similar("Maestas", "Maestas"));
        assert!(m.is_similar("Maestas", "Maestas Bergman"));
        assert!(m.is_similar("Maestas Bergman", "Maestas"));
    }

    #[test]
    fn positional_ratio_accepts_substitutions() {
        let m = PositionalMatcher::default();
        assert!(m.is_similar("Maestas", "Maestes"));
        assert!(!m.is_similar("Maestas", "Martinez"));
    }

    #[test]
    fn length_guard_rejects_disparate_lengths() {
        let m = PositionalMatcher::new(0.1, 0.7);
        assert!(!m.is_similar("Lopez", "Lopaxxxxxx"));
    }

    #[test]
    fn positional_ratio_misses_shifted_insertions() {
        assert!(!PositionalMatcher::default().is_similar("Maestas", "Maestras"));
        assert!(EditDistanceMatcher::default().is_similar("Maestas", "Maestras"));
    }

    #[test]
    fn similarity_is_symmetric() {
        let names = [
            "Maestas",
            "Maestras",
            "Maestes",
            "Maestas Bergman",
            "Garcia",
            "Garcia Smith",
            "Lopez",
            "Lujan",
            "",
        ];
        let matchers: [Box<dyn NameMatcher>; 2] = [
            Box::new(PositionalMatcher::default()),
            Box::new(EditDistanceMatcher::default()),
        ];
        for m in &matchers {
            for a in names {
                for b in names {
                    assert_eq!(m.is_similar(a, b), m.is_similar(b, a), "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn higher_count_anchors_canonical_form() {
        let clusters =
            SimilarityClusterer::default().cluster(&table(&[("Garcia", 4), ("Garcia Smith", 6)]));

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].canonical, "Garcia Smith");
        assert_eq!(clusters[0].total_count, 10);
        assert_eq!(clusters[0].variants, vec!["Garcia Smith", "Garcia"]);
        assert_eq!(clusters[0].aliases().collect::<Vec<_>>(), vec!["Garcia"]);
    }

    #[test]
    fn count_ties_keep_first_seen_order() {
        let clusters =
            SimilarityClusterer::default().cluster(&table(&[("Maestes", 4), ("Maestas", 4)]));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].canonical, "Maestes");
        assert_eq!(clusters[0].variants, vec!["Maestes", "Maestas"]);
    }

    #[test]
    fn every_candidate_lands_in_exactly_one_cluster() {
        let input = table(&[
            ("Maestas", 9),
            ("Lopez", 7),
            ("Maestes", 3),
            ("Lujan", 5),
            ("Maestas Bergman", 4),
        ]);
        let clusters = SimilarityClusterer::default().cluster(&input);

        let mut seen: Vec<&str> = clusters
            .iter()
            .flat_map(|c| c.variants.iter().map(String::as_str))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = input.iter().map(|c| c.name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);

        let total: u64 = clusters.iter().map(|c| c.total_count).sum();
        assert_eq!(total, input.total_mentions());
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        assert!(SimilarityClusterer::default()
            .cluster(&FrequencyTable::new())
            .is_empty());
    }

    #[test]
    fn confidence_levels_follow_bands() {
        let bands = ConfidenceBands::default();
        assert_eq!(ConfidenceLevel::from_count(10, &bands), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_count(9, &bands), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_count(3, &bands), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_count(2, &bands), ConfidenceLevel::Low);
        assert_eq!(CanonicalCluster::new("Lopez", 12).confidence(&bands), ConfidenceLevel::High);
    }

    #[test]
    fn clusterer_exposes_its_matcher() {
        let clusterer = SimilarityClusterer::new(Box::new(EditDistanceMatcher::new(0.9, 0.6)));
        let matcher = clusterer.matcher();
        assert_eq!(matcher.kind(), MatcherKind::EditDistance);
        assert!((matcher.threshold() - 0.9).abs() < f64::EPSILON);
        assert!((matcher.length_ratio_floor() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn matcher_for_honors_config() {
        let config = PipelineConfig::default().with_matcher(MatcherKind::EditDistance);
        assert_eq!(matcher_for(&config).kind(), MatcherKind::EditDistance);
        assert_eq!(
            matcher_for(&PipelineConfig::default()).kind(),
            MatcherKind::Positional
        );
    }
}
