mod db;
mod resolver;
mod types;

pub(crate) use db::{PricingDb, calculate_cost};
pub(crate) use types::TokenType;
