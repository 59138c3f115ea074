//! Inputs the comparison is run against: the system prompt on disk and a
//! fixed set of example user queries.

pub(crate) mod prompt;
pub(crate) mod queries;

pub(crate) use prompt::load_system_prompt;
pub(crate) use queries::sample_queries;
