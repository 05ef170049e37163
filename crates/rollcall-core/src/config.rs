use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lexicon::{Lexicon, DEFAULT_TITLES};

/// Upper bound for [`PipelineConfig::max_name_words`].
pub const MAX_NAME_WORDS_LIMIT: usize = 8;

/// Which similarity predicate the clusterer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// Positional character agreement (exact, substring, then same-index ratio).
    #[default]
    Positional,
    /// Normalized Levenshtein similarity; tolerant of shifted insertions.
    EditDistance,
}

/// Mention-count bands used to grade a cluster's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    /// Minimum mentions for high confidence.
    pub high: u32,
    /// Minimum mentions for medium confidence.
    pub medium: u32,
}

impl Default for ConfidenceBands {
    fn default() -> Self {
        Self {
            high: 10,
            medium: 3,
        }
    }
}

/// Everything a pipeline run depends on besides the corpus text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Title tokens that introduce a name ("Senator", "Dr", ...).
    pub titles: Vec<String>,
    /// Longest word run captured after a title.
    pub max_name_words: usize,
    /// Candidates mentioned fewer times than this are dropped.
    pub min_frequency: u32,
    /// Ratio at or above which two names are considered the same person.
    pub similarity_threshold: f64,
    /// Names whose length ratio falls below this are never merged.
    pub length_ratio_floor: f64,
    pub matcher: MatcherKind,
    pub confidence: ConfidenceBands,
    pub lexicon: Lexicon,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            titles: DEFAULT_TITLES.iter().map(|t| (*t).to_string()).collect(),
            max_name_words: 4,
            min_frequency: 3,
            similarity_threshold: 0.85,
            length_ratio_floor: 0.7,
            matcher: MatcherKind::default(),
            confidence: ConfidenceBands::default(),
            lexicon: Lexicon::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a config file; fields missing from the JSON keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    #[must_use]
    pub fn with_titles<S: Into<String>>(mut self, titles: impl IntoIterator<Item = S>) -> Self {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_min_frequency(mut self, min_frequency: u32) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    #[must_use]
    pub fn with_max_name_words(mut self, max_name_words: usize) -> Self {
        self.max_name_words = max_name_words;
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: MatcherKind) -> Self {
        self.matcher = matcher;
        self
    }

    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.titles.iter().all(|t| t.trim().is_empty()) {
            return Err(Error::EmptyTitleList);
        }
        if self.min_frequency == 0 {
            return Err(Error::InvalidMinFrequency(self.min_frequency));
        }
        if self.max_name_words == 0 || self.max_name_words > MAX_NAME_WORDS_LIMIT {
            return Err(Error::InvalidMaxNameWords {
                value: self.max_name_words,
            });
        }
        check_ratio("similarity_threshold", self.similarity_threshold)?;
        check_ratio("length_ratio_floor", self.length_ratio_floor)?;
        if self.confidence.medium > self.confidence.high {
            return Err(Error::InvalidConfidenceBands {
                high: self.confidence.high,
                medium: self.confidence.medium,
            });
        }
        Ok(())
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_frequency, 3);
        assert_eq!(config.max_name_words, 4);
        assert!(config.titles.iter().any(|t| t == "Senator"));
    }

    #[test]
    fn empty_title_list_is_rejected() {
        let config = PipelineConfig::default().with_titles(Vec::<String>::new());
        assert!(matches!(config.validate(), Err(Error::EmptyTitleList)));

        let blank = PipelineConfig::default().with_titles(["  "]);
        assert!(matches!(blank.validate(), Err(Error::EmptyTitleList)));
    }

    #[test]
    fn zero_min_frequency_is_rejected() {
        let config = PipelineConfig::default().with_min_frequency(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidMinFrequency(0))
        ));
    }

    #[test]
    fn max_name_words_bounds() {
        assert!(PipelineConfig::default()
            .with_max_name_words(0)
            .validate()
            .is_err());
        assert!(PipelineConfig::default()
            .with_max_name_words(MAX_NAME_WORDS_LIMIT + 1)
            .validate()
            .is_err());
        assert!(PipelineConfig::default()
            .with_max_name_words(1)
            .validate()
            .is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let config = PipelineConfig::default().with_similarity_threshold(1.5);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidThreshold {
                name: "similarity_threshold",
                ..
            })
        ));
    }

    #[test]
    fn inverted_confidence_bands_are_rejected() {
        let mut config = PipelineConfig::default();
        config.confidence = ConfidenceBands { high: 2, medium: 5 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            PipelineConfig::from_json(r#"{"min_frequency": 1, "matcher": "edit_distance"}"#)
                .unwrap();
        assert_eq!(config.min_frequency, 1);
        assert_eq!(config.matcher, MatcherKind::EditDistance);
        assert_eq!(config.max_name_words, 4);
        assert_eq!(config.lexicon, Lexicon::default());
    }

    #[test]
    fn config_json_roundtrip() {
        let config = PipelineConfig::default().with_titles(["Senator", "Rep"]);
        let json = serde_json::to_string(&config).unwrap();
        let back = PipelineConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn from_json_file_reads_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"titles": ["Senator"]}"#).unwrap();

        let config = PipelineConfig::from_json_file(&path).unwrap();
        assert_eq!(config.titles, vec!["Senator".to_string()]);
    }

    #[test]
    fn from_json_file_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = PipelineConfig::from_json_file(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn with_lexicon_replaces_vocabulary() {
        let mut lexicon = Lexicon::empty();
        lexicon.phrases = crate::lexicon::WordList::from_list(&["good evening"]);
        let config = PipelineConfig::default().with_lexicon(lexicon.clone());

        assert_eq!(config.lexicon, lexicon);
        assert!(config.validate().is_ok());
    }
}
