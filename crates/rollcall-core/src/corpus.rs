use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Placed between consecutive sources so a name cannot run across a file boundary.
pub const SOURCE_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Sources appended to the corpus.
    pub sources: usize,
    /// Sources that contained invalid UTF-8 and were decoded with replacement characters.
    pub lossy: usize,
    /// Paths that could not be read.
    pub skipped: Vec<PathBuf>,
    pub characters: usize,
}

/// Transcript texts concatenated in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    text: String,
    sources: usize,
    lossy: usize,
    skipped: Vec<PathBuf>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every path in order, skipping the unreadable ones.
    pub fn from_paths<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Self {
        let mut corpus = Self::new();
        for path in paths {
            corpus.read_path(path.as_ref());
        }
        corpus
    }

    pub fn push_text(&mut self, text: &str) {
        if self.sources > 0 {
            self.text.push_str(SOURCE_SEPARATOR);
        }
        self.text.push_str(text);
        self.sources += 1;
    }

    /// Append raw bytes, replacing invalid UTF-8 sequences with U+FFFD.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        if matches!(text, Cow::Owned(_)) {
            self.lossy += 1;
        }
        self.push_text(&text);
    }

    /// Append the contents of `path`. Returns `false` and records the path
    /// when it cannot be read.
    pub fn read_path(&mut self, path: &Path) -> bool {
        match std::fs::read(path) {
            Ok(bytes) => {
                self.push_bytes(&bytes);
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable source");
                self.skipped.push(path.to_path_buf());
                false
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            sources: self.sources,
            lossy: self.lossy,
            skipped: self.skipped.clone(),
            characters: self.text.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn sources_are_joined_in_order() {
        let mut corpus = Corpus::new();
        corpus.push_text("Senator Lopez.");
        corpus.push_text("Senator Lujan.");
        assert_eq!(corpus.text(), "Senator Lopez.\n\nSenator Lujan.");
        assert_eq!(corpus.stats().sources, 2);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut corpus = Corpus::new();
        corpus.push_bytes(b"Senator \xff Lopez");
        corpus.push_bytes(b"clean");

        assert!(corpus.text().contains('\u{FFFD}'));
        let stats = corpus.stats();
        assert_eq!(stats.sources, 2);
        assert_eq!(stats.lossy, 1);
    }

    #[test]
    fn unreadable_paths_are_skipped_and_counted() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.cc.txt");
        std::fs::write(&good, "Representative Maestas.").unwrap();
        let missing = tmp.path().join("missing.cc.txt");

        let corpus = Corpus::from_paths([&good, &missing]);
        let stats = corpus.stats();

        assert_eq!(corpus.text(), "Representative Maestas.");
        assert_eq!(stats.sources, 1);
        assert_eq!(corpus.skipped(), [missing.clone()].as_slice());
        assert_eq!(stats.skipped, vec![missing]);
    }

    #[test]
    fn characters_count_chars_not_bytes() {
        let mut corpus = Corpus::new();
        corpus.push_text("Muñoz");
        assert_eq!(corpus.stats().characters, 5);
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.stats(), CorpusStats::default());
    }
}
