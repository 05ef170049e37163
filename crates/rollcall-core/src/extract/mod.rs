mod cluster;
mod filter;
mod frequency;
mod pipeline;
mod surfacer;
mod validation;

pub use cluster::{
    matcher_for, CanonicalCluster, ConfidenceLevel, EditDistanceMatcher, NameMatcher,
    PositionalMatcher, SimilarityClusterer,
};
pub use filter::{ChainOutput, LexicalFilterChain, LexicalStage};
pub use frequency::{Candidate, FrequencyAggregator, FrequencyTable};
pub use pipeline::{ConfidenceSummary, ExtractionReport, NamePipeline, StageCounts};
pub use surfacer::{normalize_name, CandidateSurfacer, RawMention, SurfaceRule};
pub use validation::{
    Rejection, RejectionReason, ValidationFilter, ValidationOutcome, Verdict,
};
