//! Core module - token estimation and the traditional-vs-baked comparison

mod comparison;
mod estimate;
mod types;

pub(crate) use comparison::{build_comparison, build_comparison_for_model};
pub(crate) use estimate::estimate_tokens;
pub(crate) use types::ComparisonRecord;
