use crate::consts::MONTHS_PER_YEAR;
use crate::error::AppError;
use crate::pricing::{PricingDb, TokenType, calculate_cost};

use super::types::{ApproachStats, ComparisonRecord, Savings};

/// Compare both approaches at the pricing table's default model.
///
/// `traditional_tokens` is the full per-request size (system prompt plus
/// query) and must be non-zero; `baked_tokens` is what the baked model is
/// sent per request.
pub(crate) fn build_comparison(
    traditional_tokens: u64,
    baked_tokens: u64,
    num_requests: u64,
    pricing_db: &PricingDb,
) -> Result<ComparisonRecord, AppError> {
    build_comparison_for_model(
        traditional_tokens,
        baked_tokens,
        num_requests,
        pricing_db.default_model(),
        pricing_db,
    )
}

/// Same as [`build_comparison`], priced at `model` (unknown ids use the default rates).
pub(crate) fn build_comparison_for_model(
    traditional_tokens: u64,
    baked_tokens: u64,
    num_requests: u64,
    model: &str,
    pricing_db: &PricingDb,
) -> Result<ComparisonRecord, AppError> {
    if traditional_tokens == 0 {
        return Err(AppError::invalid_input(
            "traditional tokens per request must be greater than zero",
        ));
    }

    let traditional = approach_stats(
        "traditional",
        traditional_tokens,
        num_requests,
        model,
        pricing_db,
    )?;
    let baked = approach_stats("baked", baked_tokens, num_requests, model, pricing_db)?;

    let tokens_per_request = token_difference(traditional_tokens, baked_tokens)?;
    let total_cost = traditional.cost - baked.cost;

    Ok(ComparisonRecord {
        traditional,
        baked,
        savings: Savings {
            tokens_per_request,
            tokens_percent: tokens_per_request as f64 / traditional_tokens as f64 * 100.0,
            total_cost,
            annual_cost_1m_requests: total_cost * MONTHS_PER_YEAR,
        },
    })
}

fn approach_stats(
    label: &str,
    tokens_per_request: u64,
    num_requests: u64,
    model: &str,
    pricing_db: &PricingDb,
) -> Result<ApproachStats, AppError> {
    let total_tokens = tokens_per_request.checked_mul(num_requests).ok_or_else(|| {
        AppError::invalid_input(format!(
            "{label} token volume overflows ({tokens_per_request} tokens x {num_requests} requests)"
        ))
    })?;
    Ok(ApproachStats {
        tokens_per_request,
        total_tokens,
        cost: calculate_cost(total_tokens, model, TokenType::Input, pricing_db),
    })
}

fn token_difference(traditional: u64, baked: u64) -> Result<i64, AppError> {
    let out_of_range = || AppError::invalid_input("token counts exceed the supported range");
    let traditional = i64::try_from(traditional).map_err(|_| out_of_range())?;
    let baked = i64::try_from(baked).map_err(|_| out_of_range())?;
    Ok(traditional - baked)
}
