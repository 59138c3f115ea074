/// Characters per token used by the length-based token approximation
pub(crate) const CHARS_PER_TOKEN: usize = 4;

/// Request volume used when none is given
pub(crate) const DEFAULT_NUM_REQUESTS: u64 = 1_000_000;

/// Tokens of a typical user query, sent by both approaches
pub(crate) const DEFAULT_QUERY_TOKENS: u64 = 50;

/// Annualization factor: the request volume is taken to be monthly
pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;

/// Where `compare` persists its record unless told otherwise
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "results/comparison_metrics.json";
