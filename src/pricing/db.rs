use std::collections::BTreeMap;

use crate::config::PricingConfig;
use crate::error::AppError;

use super::resolver::{
    BUILTIN_DEFAULT_MODEL, builtin_models, normalize_model, resolve_pricing_known,
};
use super::types::{ModelPricing, TokenType};

/// Pricing table built once at startup and only read afterwards.
///
/// The default model is always present in `models`; every lookup that misses
/// resolves to it instead of failing.
#[derive(Debug, Clone)]
pub(crate) struct PricingDb {
    models: BTreeMap<String, ModelPricing>,
    default_model: String,
}

impl Default for PricingDb {
    fn default() -> Self {
        PricingDb {
            models: builtin_models(),
            default_model: BUILTIN_DEFAULT_MODEL.to_string(),
        }
    }
}

impl PricingDb {
    /// Built-in rates extended (or overridden) by the `[pricing]` config table
    pub(crate) fn from_config(config: &PricingConfig) -> Result<Self, AppError> {
        let mut db = Self::default();

        for (name, rates) in &config.models {
            let key = normalize_model(name);
            if key.is_empty() {
                return Err(AppError::invalid_input("pricing model id must not be empty"));
            }
            let pricing = ModelPricing::per_thousand(name, rates.input_per_1k, rates.output_per_1k)?;
            db.models.insert(key, pricing);
        }

        if let Some(default_model) = &config.default_model {
            let key = normalize_model(default_model);
            if !db.models.contains_key(&key) {
                return Err(AppError::invalid_input(format!(
                    "default model \"{default_model}\" has no pricing entry"
                )));
            }
            db.default_model = key;
        }

        Ok(db)
    }

    pub(crate) fn default_model(&self) -> &str {
        &self.default_model
    }

    pub(crate) fn is_known(&self, model: &str) -> bool {
        resolve_pricing_known(model, &self.models).is_some()
    }

    /// Rates for `model`, or the default model's rates when it is not in the table
    pub(crate) fn get_pricing(&self, model: &str) -> ModelPricing {
        if let Some(pricing) = resolve_pricing_known(model, &self.models) {
            return *pricing;
        }
        tracing::debug!(
            "No pricing for model \"{}\", using {}",
            model,
            self.default_model
        );
        self.models
            .get(&self.default_model)
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn rate_for(&self, model: &str, token_type: TokenType) -> f64 {
        self.get_pricing(model).rate(token_type)
    }

    /// All model ids, sorted
    pub(crate) fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }
}

/// Cost of `tokens` billed as `token_type` on `model`. Unrounded; rounding is
/// left to presentation.
pub(crate) fn calculate_cost(
    tokens: u64,
    model: &str,
    token_type: TokenType,
    pricing_db: &PricingDb,
) -> f64 {
    tokens as f64 * pricing_db.rate_for(model, token_type)
}
