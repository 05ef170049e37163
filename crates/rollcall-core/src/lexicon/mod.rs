//! Blacklist vocabulary shared by the lexical filter chain and the validation filter.
//!
//! Both consumers read from one [`Lexicon`] so the diagnostic narrowing and the
//! validation rules can never disagree about what counts as a non-name word.

mod defaults;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use defaults::TITLES as DEFAULT_TITLES;

/// Case-insensitive set of words or short phrases.
///
/// Entries are stored lowercased with internal whitespace collapsed, so
/// `"Thank  You"` and `"thank you"` are the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut list = Self::new();
        list.extend(words);
        list
    }

    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    pub fn insert(&mut self, word: &str) {
        let key = fold(word);
        if !key.is_empty() {
            self.words.insert(key);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&fold(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in sorted order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            words: self.words.union(&other.words).cloned().collect(),
        }
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self::from_list(words.as_slice())
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.sorted().into_iter().map(String::from).collect()
    }
}

fn fold(word: &str) -> String {
    word.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every blacklist the pipeline consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// General English words (lexical stage one).
    pub stopwords: WordList,
    /// Legislative and procedural terms (lexical stage two).
    pub domain_words: WordList,
    /// Titles that may precede a name but never appear inside one.
    pub title_words: WordList,
    /// Pronouns, fillers and procedural terms rejected as one-word names.
    pub common_words: WordList,
    /// Function words; a candidate made only of these is rejected.
    pub connectives: WordList,
    /// Words a name may not start with.
    pub start_words: WordList,
    /// Words a name may not end with.
    pub end_words: WordList,
    /// Exact phrases that are never names.
    pub phrases: WordList,
    /// Two- and three-word tails that mark a capture ran into speech.
    pub tail_phrases: WordList,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stopwords: WordList::from_list(defaults::STOPWORDS),
            domain_words: WordList::from_list(defaults::DOMAIN_WORDS),
            title_words: WordList::from_list(defaults::TITLE_WORDS),
            common_words: WordList::from_list(defaults::COMMON_WORDS),
            connectives: WordList::from_list(defaults::CONNECTIVES),
            start_words: WordList::from_list(defaults::START_WORDS),
            end_words: WordList::from_list(defaults::END_WORDS),
            phrases: WordList::from_list(defaults::PHRASES),
            tail_phrases: WordList::from_list(defaults::TAIL_PHRASES),
        }
    }
}

impl Lexicon {
    /// A lexicon with every list empty, for tests against small vocabularies.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stopwords: WordList::new(),
            domain_words: WordList::new(),
            title_words: WordList::new(),
            common_words: WordList::new(),
            connectives: WordList::new(),
            start_words: WordList::new(),
            end_words: WordList::new(),
            phrases: WordList::new(),
            tail_phrases: WordList::new(),
        }
    }

    /// Vocabulary for the general-language lexical stage.
    pub fn general_vocabulary(&self) -> WordList {
        self.stopwords.union(&self.connectives)
    }

    /// Vocabulary for the domain lexical stage.
    ///
    /// Includes every word the validator rejects as a lone common word or as an
    /// embedded title.
    pub fn domain_vocabulary(&self) -> WordList {
        self.domain_words
            .union(&self.common_words)
            .union(&self.title_words)
    }

    /// True if `word` is on any word-level list the validator consults.
    pub fn is_blacklisted_word(&self, word: &str) -> bool {
        self.connectives.contains(word)
            || self.start_words.contains(word)
            || self.end_words.contains(word)
            || self.title_words.contains(word)
            || self.common_words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_is_case_insensitive() {
        let list = WordList::from_list(&["Chairman", "thank you"]);
        assert!(list.contains("chairman"));
        assert!(list.contains("CHAIRMAN"));
        assert!(list.contains("Thank   You"));
        assert!(!list.contains("chair"));
    }

    #[test]
    fn word_list_ignores_blank_entries() {
        let list = WordList::from_list(&["", "   ", "vote"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn word_list_serializes_sorted() {
        let list = WordList::from_list(&["zeta", "Alpha", "mid"]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["alpha","mid","zeta"]"#);

        let back: WordList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn domain_vocabulary_covers_validator_lists() {
        let lexicon = Lexicon::default();
        let domain = lexicon.domain_vocabulary();

        for word in lexicon.common_words.sorted() {
            assert!(domain.contains(word), "{word} missing from domain stage");
        }
        for word in lexicon.title_words.sorted() {
            assert!(domain.contains(word), "{word} missing from domain stage");
        }
    }

    #[test]
    fn general_vocabulary_covers_connectives() {
        let lexicon = Lexicon::default();
        let general = lexicon.general_vocabulary();
        for word in lexicon.connectives.sorted() {
            assert!(general.contains(word));
        }
    }

    #[test]
    fn partial_lexicon_json_falls_back_to_defaults() {
        let lexicon: Lexicon = serde_json::from_str(r#"{"phrases": ["good evening"]}"#).unwrap();
        assert!(lexicon.phrases.contains("Good Evening"));
        assert!(!lexicon.phrases.contains("thank you"));
        assert_eq!(lexicon.stopwords, Lexicon::default().stopwords);
    }

    #[test]
    fn empty_lexicon_blacklists_nothing() {
        let lexicon = Lexicon::empty();
        assert!(!lexicon.is_blacklisted_word("the"));
        assert!(lexicon.domain_vocabulary().is_empty());
    }
}
