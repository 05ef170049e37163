use std::collections::BTreeSet;

use crate::lexicon::{Lexicon, WordList};

/// One word-level rejection stage.
///
/// A candidate is rejected when any of its whitespace-separated words is in
/// the stage vocabulary, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct LexicalStage {
    name: &'static str,
    vocabulary: WordList,
}

impl LexicalStage {
    #[must_use]
    pub fn new(name: &'static str, vocabulary: WordList) -> Self {
        Self { name, vocabulary }
    }

    /// General-English stopwords.
    pub fn general(lexicon: &Lexicon) -> Self {
        Self::new("general", lexicon.general_vocabulary())
    }

    /// Legislative and procedural vocabulary.
    pub fn domain(lexicon: &Lexicon) -> Self {
        Self::new("domain", lexicon.domain_vocabulary())
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn rejects(&self, candidate: &str) -> bool {
        candidate
            .split_whitespace()
            .any(|word| self.vocabulary.contains(word))
    }

    pub fn apply(&self, candidates: &BTreeSet<String>) -> BTreeSet<String> {
        let kept: BTreeSet<String> = candidates
            .iter()
            .filter(|c| !self.rejects(c))
            .cloned()
            .collect();
        tracing::debug!(
            stage = self.name,
            input = candidates.len(),
            kept = kept.len(),
            "lexical stage applied"
        );
        kept
    }
}

/// Survivors after each stage of a [`LexicalFilterChain`].
#[derive(Debug, Clone, Default)]
pub struct ChainOutput {
    stages: Vec<(&'static str, BTreeSet<String>)>,
}

impl ChainOutput {
    /// Survivors after the named stage.
    pub fn after(&self, stage: &str) -> Option<&BTreeSet<String>> {
        self.stages
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, set)| set)
    }

    /// Sizes after each stage, in stage order.
    pub fn sizes(&self) -> Vec<(&'static str, usize)> {
        self.stages.iter().map(|(name, set)| (*name, set.len())).collect()
    }

    /// Survivors of the whole chain.
    pub fn survivors(&self) -> Option<&BTreeSet<String>> {
        self.stages.last().map(|(_, set)| set)
    }
}

/// Ordered sequence of lexical stages over the capitalized-sequence net.
#[derive(Debug, Clone)]
pub struct LexicalFilterChain {
    stages: Vec<LexicalStage>,
}

impl LexicalFilterChain {
    /// The general stage followed by the domain stage.
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            stages: vec![LexicalStage::general(lexicon), LexicalStage::domain(lexicon)],
        }
    }

    #[must_use]
    pub fn from_stages(stages: Vec<LexicalStage>) -> Self {
        Self { stages }
    }

    pub fn apply(&self, candidates: &BTreeSet<String>) -> ChainOutput {
        let mut output = ChainOutput::default();
        let mut current = candidates.clone();
        for stage in &self.stages {
            current = stage.apply(&current);
            output.stages.push((stage.name(), current.clone()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn small_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::empty();
        lexicon.stopwords = WordList::from_list(&["the", "and"]);
        lexicon.domain_words = WordList::from_list(&["committee", "monday"]);
        lexicon.title_words = WordList::from_list(&["senator"]);
        lexicon.common_words = WordList::from_list(&["hello"]);
        lexicon
    }

    #[test]
    fn any_blacklisted_word_rejects_whole_candidate() {
        let stage = LexicalStage::domain(&small_lexicon());
        assert!(stage.rejects("Finance Committee"));
        assert!(stage.rejects("MONDAY"));
        assert!(!stage.rejects("David Archuleta"));
    }

    #[test]
    fn domain_stage_includes_titles_and_common_words() {
        let stage = LexicalStage::domain(&small_lexicon());
        assert!(stage.rejects("Senator Lopez"));
        assert!(stage.rejects("Hello"));
    }

    #[test]
    fn chain_narrows_stage_by_stage() {
        let chain = LexicalFilterChain::new(&small_lexicon());
        let input = set(&["The House", "Finance Committee", "David Archuleta", "NMED"]);
        let output = chain.apply(&input);

        assert_eq!(
            output.after("general").unwrap(),
            &set(&["Finance Committee", "David Archuleta", "NMED"])
        );
        assert_eq!(
            output.survivors().unwrap(),
            &set(&["David Archuleta", "NMED"])
        );
        assert_eq!(output.sizes(), vec![("general", 3), ("domain", 2)]);
    }

    #[test]
    fn stage_order_does_not_change_survivors() {
        let lexicon = small_lexicon();
        let input = set(&["The House", "Finance Committee", "David Archuleta", "And Monday"]);

        let forward = LexicalFilterChain::new(&lexicon).apply(&input);
        let reversed = LexicalFilterChain::from_stages(vec![
            LexicalStage::domain(&lexicon),
            LexicalStage::general(&lexicon),
        ])
        .apply(&input);

        assert_eq!(forward.survivors(), reversed.survivors());
    }

    #[test]
    fn empty_chain_has_no_survivor_set() {
        let output = LexicalFilterChain::from_stages(Vec::new()).apply(&set(&["A"]));
        assert!(output.survivors().is_none());
        assert!(output.after("general").is_none());
    }
}
