pub mod config;
pub mod explain;
pub mod extract;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use rollcall_core::{MatcherKind, PipelineConfig};

use crate::discovery::DEFAULT_PATTERN;

#[derive(Parser)]
#[command(
    name = "rollcall",
    about = "Extract person names from legislative committee transcripts",
    version
)]
pub struct Cli {
    /// Log every pipeline stage to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract names from every transcript under a directory
    Extract(ExtractArgs),
    /// Show which validation rule, if any, rejects each candidate
    Explain {
        /// Candidate names to check
        #[arg(required = true)]
        candidates: Vec<String>,
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration as JSON
    Config {
        /// JSON configuration file to merge over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Directory to search for transcripts
    #[arg(default_value = ".")]
    pub root: PathBuf,
    /// Glob pattern, relative to the root
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
    /// Minimum mentions for a name to be kept
    #[arg(short = 'm', long)]
    pub min_frequency: Option<u32>,
    /// Output path prefix; writes <prefix>.json and <prefix>.csv
    #[arg(short, long, default_value = "extracted_names")]
    pub output_prefix: String,
    /// Only process the first N transcripts
    #[arg(long)]
    pub sample: Option<usize>,
    /// Similarity predicate used to merge spelling variants
    #[arg(long, value_enum)]
    pub matcher: Option<MatcherChoice>,
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Number of names shown in the summary
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MatcherChoice {
    Positional,
    EditDistance,
}

impl From<MatcherChoice> for MatcherKind {
    fn from(choice: MatcherChoice) -> Self {
        match choice {
            MatcherChoice::Positional => Self::Positional,
            MatcherChoice::EditDistance => Self::EditDistance,
        }
    }
}

/// Defaults, overlaid with the config file when one is given.
pub fn load_config(cwd: &Path, path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let path = cwd.join(path);
    PipelineConfig::from_json_file(&path)
        .with_context(|| format!("failed to load config {}", path.display()))
}
