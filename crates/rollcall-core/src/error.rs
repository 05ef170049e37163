use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Title list is empty; at least one title is required")]
    EmptyTitleList,

    #[error("Minimum frequency must be at least 1 (got {0})")]
    InvalidMinFrequency(u32),

    #[error("Maximum name words must be between 1 and {} (got {value})", crate::config::MAX_NAME_WORDS_LIMIT)]
    InvalidMaxNameWords { value: usize },

    #[error("Threshold {name} must be in (0, 1] (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Confidence bands out of order: medium ({medium}) exceeds high ({high})")]
    InvalidConfidenceBands { high: u32, medium: u32 },

    #[error("Title pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
