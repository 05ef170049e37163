use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::config::MAX_NAME_WORDS_LIMIT;
use crate::error::{Error, Result};

const CAPITALIZED_RUN: &str = r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b";
const ALL_CAPS_RUN: &str = r"\b[A-Z]{2,}\b(?:\s+[A-Z]{2,}\b)*";

/// The surface pattern that produced a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceRule {
    /// A run of Title Case words.
    Capitalized,
    /// A run of ALL CAPS words.
    AllCaps,
    /// The word run following a title token.
    TitlePrefixed,
}

/// A span of corpus text matched by one surface pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMention<'t> {
    pub text: &'t str,
    pub rule: SurfaceRule,
    pub start: usize,
    pub end: usize,
}

impl RawMention<'_> {
    pub fn normalized(&self) -> String {
        normalize_name(self.text)
    }
}

/// Collapse whitespace and title-case every word.
///
/// Letters following an apostrophe or hyphen start a new capitalized segment,
/// so `"o'brien"` becomes `"O'Brien"` and `"GARCIA-SMITH"` becomes `"Garcia-Smith"`.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_word = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Scans corpus text for name-shaped spans.
#[derive(Debug, Clone)]
pub struct CandidateSurfacer {
    titled: Regex,
    capitalized: Regex,
    all_caps: Regex,
}

impl CandidateSurfacer {
    /// Build a surfacer that captures 1 to `max_name_words` words after any of `titles`.
    pub fn new<S: AsRef<str>>(titles: &[S], max_name_words: usize) -> Result<Self> {
        let mut titles: Vec<&str> = titles
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect();
        if titles.is_empty() {
            return Err(Error::EmptyTitleList);
        }
        if max_name_words == 0 || max_name_words > MAX_NAME_WORDS_LIMIT {
            return Err(Error::InvalidMaxNameWords {
                value: max_name_words,
            });
        }

        // Longest first so "Chairman" is tried before "Chair" at the same position.
        titles.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = titles
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        // Name words are ASCII letters only, so "Senator Muñoz" yields no capture.
        let pattern = format!(
            r"(?i)\b(?:{alternation})\.?\s+([a-z][a-z]+(?:[\s'\-][a-z][a-z]+){{0,{extra}}})\b",
            extra = max_name_words - 1
        );

        Ok(Self {
            titled: Regex::new(&pattern)?,
            capitalized: Regex::new(CAPITALIZED_RUN)?,
            all_caps: Regex::new(ALL_CAPS_RUN)?,
        })
    }

    /// Word runs that directly follow a title token, in text order.
    pub fn titled_mentions<'t>(&self, text: &'t str) -> Vec<RawMention<'t>> {
        self.titled
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| RawMention {
                text: m.as_str(),
                rule: SurfaceRule::TitlePrefixed,
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Capitalized and ALL CAPS runs, in pattern order then text order.
    pub fn capitalized_mentions<'t>(&self, text: &'t str) -> Vec<RawMention<'t>> {
        let capitalized = self.capitalized.find_iter(text).map(|m| RawMention {
            text: m.as_str(),
            rule: SurfaceRule::Capitalized,
            start: m.start(),
            end: m.end(),
        });
        let all_caps = self.all_caps.find_iter(text).map(|m| RawMention {
            text: m.as_str(),
            rule: SurfaceRule::AllCaps,
            start: m.start(),
            end: m.end(),
        });
        capitalized.chain(all_caps).collect()
    }

    /// Every mention from every pattern, ordered by position in `text`.
    pub fn mentions<'t>(&self, text: &'t str) -> Vec<RawMention<'t>> {
        let mut all = self.titled_mentions(text);
        all.extend(self.capitalized_mentions(text));
        all.sort_by_key(|m| (m.start, m.end));
        all
    }

    /// Distinct capitalization-pattern sequences, whitespace collapsed, case kept.
    pub fn capitalized(&self, text: &str) -> BTreeSet<String> {
        self.capitalized_mentions(text)
            .into_iter()
            .map(|m| m.text.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Mention counts of normalized title-prefixed names.
    pub fn titled(&self, text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for mention in self.titled_mentions(text) {
            let name = mention.normalized();
            if !name.is_empty() {
                table.record(&name);
            }
        }
        tracing::debug!(
            unique = table.len(),
            mentions = table.total_mentions(),
            "title-prefixed names surfaced"
        );
        table
    }
}
