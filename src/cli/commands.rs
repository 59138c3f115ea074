//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::Config;
use crate::consts::{DEFAULT_NUM_REQUESTS, DEFAULT_OUTPUT_PATH, DEFAULT_QUERY_TOKENS};

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compare a system-prompt request against a baked model request
    Compare(CompareArgs),
    /// Estimate the token count of a file, literal text, or stdin
    Estimate {
        /// File to estimate (reads stdin when neither FILE nor --text is given)
        file: Option<PathBuf>,
        /// Literal text to estimate
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,
    },
    /// Render a previously saved comparison record
    Show {
        /// Path of the saved record
        path: PathBuf,
    },
    /// List model pricing
    Pricing,
    /// List sample queries with their estimated token counts
    Queries,
}

/// Where the per-request system prompt size comes from
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct SystemTokenSource {
    /// System prompt file; its size is estimated from its length
    #[arg(short, long, value_name = "FILE")]
    pub(crate) prompt: Option<PathBuf>,

    /// System prompt size in tokens
    #[arg(long, value_name = "N")]
    pub(crate) system_tokens: Option<u64>,
}

#[derive(Debug, Args)]
pub(crate) struct CompareArgs {
    #[command(flatten)]
    pub(crate) source: SystemTokenSource,

    /// Tokens of the user query both approaches send [default: 50]
    #[arg(long, value_name = "N")]
    pub(crate) query_tokens: Option<u64>,

    /// Request volume, read as monthly for the annual projection [default: 1000000]
    #[arg(short = 'n', long, value_name = "N")]
    pub(crate) requests: Option<u64>,

    /// Model to price against (unknown ids use the default model's rates)
    #[arg(short, long, value_name = "MODEL")]
    pub(crate) model: Option<String>,

    /// Where to save the comparison record [default: results/comparison_metrics.json]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Skip saving the comparison record
    #[arg(long, conflicts_with = "output")]
    pub(crate) no_save: bool,
}

impl CompareArgs {
    /// Fill options the command line left unset
    pub(crate) fn apply_config(&mut self, config: &Config) {
        if self.query_tokens.is_none() {
            self.query_tokens = config.query_tokens;
        }
        if self.requests.is_none() {
            self.requests = config.requests;
        }
        if self.model.is_none() {
            self.model = config.model.clone();
        }
        if !self.no_save && self.output.is_none() {
            if config.no_save {
                self.no_save = true;
            } else {
                self.output = config.output.clone();
            }
        }
    }

    pub(crate) fn query_tokens(&self) -> u64 {
        self.query_tokens.unwrap_or(DEFAULT_QUERY_TOKENS)
    }

    pub(crate) fn requests(&self) -> u64 {
        self.requests.unwrap_or(DEFAULT_NUM_REQUESTS)
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}
