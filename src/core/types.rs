//! Comparison record shared by the builder and the reporters
//!
//! Field names and order are the persisted JSON layout; do not reorder.

use serde::{Deserialize, Serialize};

/// Per-approach totals over the whole request volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ApproachStats {
    pub(crate) tokens_per_request: u64,
    pub(crate) total_tokens: u64,
    pub(crate) cost: f64,
}

/// What the baked approach saves relative to the traditional one.
/// Negative when the baked request is the larger of the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Savings {
    pub(crate) tokens_per_request: i64,
    pub(crate) tokens_percent: f64,
    pub(crate) total_cost: f64,
    /// `total_cost * 12`: the request volume is read as a monthly volume.
    pub(crate) annual_cost_1m_requests: f64,
}

/// Result of one traditional-vs-baked comparison. Built once by
/// `build_comparison` (or loaded from disk) and only read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ComparisonRecord {
    pub(crate) traditional: ApproachStats,
    pub(crate) baked: ApproachStats,
    pub(crate) savings: Savings,
}

impl ComparisonRecord {
    /// Request volume the record was built for, recovered from the
    /// traditional totals (its per-request count is never zero).
    pub(crate) fn num_requests(&self) -> u64 {
        self.traditional
            .total_tokens
            .checked_div(self.traditional.tokens_per_request)
            .unwrap_or(0)
    }
}
