use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::frequency::{Candidate, FrequencyTable};
use crate::lexicon::Lexicon;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 50;

/// The rule that rejected a candidate. Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    NoVowel,
    BadLength,
    SingleLetters,
    CommonPhrase,
    CommonWord,
    ContainsTitle,
    BadEnding,
    BadEndingPhrase,
    BadStart,
    WeirdChars,
    AllStopwords,
    NoNamePattern,
}

impl RejectionReason {
    pub const ALL: [Self; 12] = [
        Self::NoVowel,
        Self::BadLength,
        Self::SingleLetters,
        Self::CommonPhrase,
        Self::CommonWord,
        Self::ContainsTitle,
        Self::BadEnding,
        Self::BadEndingPhrase,
        Self::BadStart,
        Self::WeirdChars,
        Self::AllStopwords,
        Self::NoNamePattern,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoVowel => "no_vowel",
            Self::BadLength => "bad_length",
            Self::SingleLetters => "single_letters",
            Self::CommonPhrase => "common_phrase",
            Self::CommonWord => "common_word",
            Self::ContainsTitle => "contains_title",
            Self::BadEnding => "bad_ending",
            Self::BadEndingPhrase => "bad_ending_phrase",
            Self::BadStart => "bad_start",
            Self::WeirdChars => "weird_chars",
            Self::AllStopwords => "all_stopwords",
            Self::NoNamePattern => "no_name_pattern",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected(RejectionReason),
}

impl Verdict {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A candidate the validation filter turned away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub candidate: Candidate,
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    /// Survivors with their original counts, in input order.
    pub accepted: FrequencyTable,
    pub rejected: Vec<Rejection>,
}

impl ValidationOutcome {
    /// Rejected candidates grouped by the rule that fired.
    pub fn rejections_by_reason(&self) -> BTreeMap<RejectionReason, Vec<&Candidate>> {
        let mut grouped: BTreeMap<RejectionReason, Vec<&Candidate>> = BTreeMap::new();
        for rejection in &self.rejected {
            grouped
                .entry(rejection.reason)
                .or_default()
                .push(&rejection.candidate);
        }
        grouped
    }

    pub fn reason_for(&self, name: &str) -> Option<RejectionReason> {
        self.rejected
            .iter()
            .find(|r| r.candidate.name == name)
            .map(|r| r.reason)
    }
}

/// Structural rules applied to candidates that survived frequency filtering.
#[derive(Debug, Clone)]
pub struct ValidationFilter {
    lexicon: Lexicon,
}

impl ValidationFilter {
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            lexicon: lexicon.clone(),
        }
    }

    /// Evaluate the rules in order; the first that fires decides the verdict.
    pub fn verdict(&self, name: &str) -> Verdict {
        match self.first_failure(name) {
            Some(reason) => Verdict::Rejected(reason),
            None => Verdict::Accepted,
        }
    }

    pub fn apply(&self, candidates: &FrequencyTable) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();
        for candidate in candidates {
            match self.verdict(&candidate.name) {
                Verdict::Accepted => outcome.accepted.add(&candidate.name, candidate.count),
                Verdict::Rejected(reason) => outcome.rejected.push(Rejection {
                    candidate: candidate.clone(),
                    reason,
                }),
            }
        }
        tracing::debug!(
            input = candidates.len(),
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            "validation filter applied"
        );
        outcome
    }

    fn first_failure(&self, name: &str) -> Option<RejectionReason> {
        let lex = &self.lexicon;
        let words: Vec<&str> = name.split_whitespace().collect();

        if !name.chars().any(is_vowel) {
            return Some(RejectionReason::NoVowel);
        }

        let length = name.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Some(RejectionReason::BadLength);
        }

        if words.iter().all(|w| w.chars().count() == 1) {
            return Some(RejectionReason::SingleLetters);
        }

        if lex.phrases.contains(name) {
            return Some(RejectionReason::CommonPhrase);
        }

        if words.len() == 1 && lex.common_words.contains(words[0]) {
            return Some(RejectionReason::CommonWord);
        }

        if words.iter().any(|w| lex.title_words.contains(w)) {
            return Some(RejectionReason::ContainsTitle);
        }

        if words.last().is_some_and(|w| lex.end_words.contains(w)) {
            return Some(RejectionReason::BadEnding);
        }

        if has_tail_phrase(&words, 2, lex) || has_tail_phrase(&words, 3, lex) {
            return Some(RejectionReason::BadEndingPhrase);
        }

        if words.first().is_some_and(|w| lex.start_words.contains(w)) {
            return Some(RejectionReason::BadStart);
        }

        if name.contains(['\n', '\t', '\r']) {
            return Some(RejectionReason::WeirdChars);
        }

        if words.iter().all(|w| lex.connectives.contains(w)) {
            return Some(RejectionReason::AllStopwords);
        }

        if !words.iter().any(|w| self.is_name_shaped(w)) {
            return Some(RejectionReason::NoNamePattern);
        }

        None
    }

    /// At least two letters once edge punctuation is stripped, capitalized,
    /// vowel-bearing and on no blacklist.
    fn is_name_shaped(&self, word: &str) -> bool {
        let clean = word.trim_matches(|c: char| c == '\'' || c == '-');
        clean.chars().count() >= 2
            && clean.chars().next().is_some_and(char::is_uppercase)
            && clean.chars().any(is_vowel)
            && !self.lexicon.is_blacklisted_word(clean)
    }
}

fn has_tail_phrase(words: &[&str], n: usize, lexicon: &Lexicon) -> bool {
    words.len() >= n && lexicon.tail_phrases.contains(&words[words.len() - n..].join(" "))
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}
