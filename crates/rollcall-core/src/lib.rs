pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod lexicon;

pub use config::{ConfidenceBands, MatcherKind, PipelineConfig, MAX_NAME_WORDS_LIMIT};
pub use corpus::{Corpus, CorpusStats};
pub use error::{Error, Result};
pub use extract::{
    normalize_name, CanonicalCluster, Candidate, CandidateSurfacer, ConfidenceLevel,
    ConfidenceSummary, EditDistanceMatcher, ExtractionReport, FrequencyAggregator,
    FrequencyTable, LexicalFilterChain, LexicalStage, NameMatcher, NamePipeline,
    PositionalMatcher, RejectionReason, SimilarityClusterer, StageCounts, ValidationFilter,
    ValidationOutcome, Verdict,
};
pub use lexicon::{Lexicon, WordList, DEFAULT_TITLES};
