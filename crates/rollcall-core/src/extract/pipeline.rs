use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cluster::{matcher_for, CanonicalCluster, ConfidenceLevel, SimilarityClusterer};
use super::filter::{ChainOutput, LexicalFilterChain};
use super::frequency::{FrequencyAggregator, FrequencyTable};
use super::surfacer::CandidateSurfacer;
use super::validation::{ValidationFilter, ValidationOutcome};
use crate::config::{ConfidenceBands, PipelineConfig};
use crate::corpus::Corpus;
use crate::error::Result;

/// Number of candidates alive after each stage of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub capitalized: usize,
    pub after_general: usize,
    pub after_domain: usize,
    pub titled: usize,
    pub frequent: usize,
    pub validated: usize,
    pub clusters: usize,
}

/// Number of clusters per confidence level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ConfidenceSummary {
    fn tally(&mut self, level: ConfidenceLevel) {
        match level {
            ConfidenceLevel::High => self.high += 1,
            ConfidenceLevel::Medium => self.medium += 1,
            ConfidenceLevel::Low => self.low += 1,
        }
    }
}

/// Everything one run produced, final clusters plus every intermediate stage.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub capitalized: BTreeSet<String>,
    pub lexical: ChainOutput,
    pub titled: FrequencyTable,
    pub frequent: FrequencyTable,
    pub validation: ValidationOutcome,
    pub clusters: Vec<CanonicalCluster>,
    pub counts: StageCounts,
    pub bands: ConfidenceBands,
}

impl ExtractionReport {
    /// Clusters by descending total count; ties keep cluster creation order.
    pub fn clusters_by_frequency(&self) -> Vec<&CanonicalCluster> {
        let mut sorted: Vec<&CanonicalCluster> = self.clusters.iter().collect();
        sorted.sort_by(|a, b| b.total_count.cmp(&a.total_count));
        sorted
    }

    pub fn confidence_of(&self, cluster: &CanonicalCluster) -> ConfidenceLevel {
        cluster.confidence(&self.bands)
    }

    pub fn confidence_summary(&self) -> ConfidenceSummary {
        let mut summary = ConfidenceSummary::default();
        for cluster in &self.clusters {
            summary.tally(self.confidence_of(cluster));
        }
        summary
    }

    pub fn cluster(&self, canonical: &str) -> Option<&CanonicalCluster> {
        self.clusters.iter().find(|c| c.canonical == canonical)
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// The five extraction stages wired together for one configuration.
///
/// Construction validates the configuration and compiles the title pattern;
/// `run` is then infallible and holds no state between calls.
pub struct NamePipeline {
    config: PipelineConfig,
    surfacer: CandidateSurfacer,
    chain: LexicalFilterChain,
    aggregator: FrequencyAggregator,
    validator: ValidationFilter,
    clusterer: SimilarityClusterer,
}

impl NamePipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let surfacer = CandidateSurfacer::new(config.titles.as_slice(), config.max_name_words)?;
        let chain = LexicalFilterChain::new(&config.lexicon);
        let aggregator = FrequencyAggregator::new(config.min_frequency);
        let validator = ValidationFilter::new(&config.lexicon);
        let clusterer = SimilarityClusterer::new(matcher_for(&config));

        Ok(Self {
            config,
            surfacer,
            chain,
            aggregator,
            validator,
            clusterer,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(PipelineConfig::default())
    }

    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub const fn validator(&self) -> &ValidationFilter {
        &self.validator
    }

    pub fn run(&self, text: &str) -> ExtractionReport {
        let capitalized = self.surfacer.capitalized(text);
        let lexical = self.chain.apply(&capitalized);

        let titled = self.surfacer.titled(text);
        let frequent = self.aggregator.apply(&titled);
        let validation = self.validator.apply(&frequent);
        let clusters = self.clusterer.cluster(&validation.accepted);

        let stage_size = |name: &str| lexical.after(name).map_or(0, BTreeSet::len);
        let counts = StageCounts {
            capitalized: capitalized.len(),
            after_general: stage_size("general"),
            after_domain: stage_size("domain"),
            titled: titled.len(),
            frequent: frequent.len(),
            validated: validation.accepted.len(),
            clusters: clusters.len(),
        };

        tracing::info!(
            characters = text.len(),
            capitalized = counts.capitalized,
            titled = counts.titled,
            frequent = counts.frequent,
            validated = counts.validated,
            clusters = counts.clusters,
            "extraction finished"
        );

        ExtractionReport {
            capitalized,
            lexical,
            titled,
            frequent,
            validation,
            clusters,
            counts,
            bands: self.config.confidence,
        }
    }

    pub fn run_corpus(&self, corpus: &Corpus) -> ExtractionReport {
        self.run(corpus.text())
    }
}
