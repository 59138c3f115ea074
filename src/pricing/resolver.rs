use std::collections::BTreeMap;

use super::types::ModelPricing;

/// Model whose rates apply when a lookup misses
pub(super) const BUILTIN_DEFAULT_MODEL: &str = "gpt-4";

/// Built-in rates, quoted per 1K tokens as of January 2025 (approximate)
const BUILTIN_RATES: &[(&str, f64, f64)] = &[
    ("gpt-4", 0.03, 0.06),
    ("gpt-3.5-turbo", 0.0015, 0.002),
];

pub(super) fn builtin_models() -> BTreeMap<String, ModelPricing> {
    BUILTIN_RATES
        .iter()
        .map(|&(name, input, output)| {
            (
                name.to_string(),
                ModelPricing {
                    input: input / 1000.0,
                    output: output / 1000.0,
                },
            )
        })
        .collect()
}

/// Canonical form of a model id: trimmed, ASCII lowercase
pub(super) fn normalize_model(model: &str) -> String {
    model.trim().to_ascii_lowercase()
}

/// Exact lookup on the normalized id. No prefix or partial matching, so an
/// unrecognized id never picks up some other model's rates.
pub(super) fn resolve_pricing_known<'a>(
    model: &str,
    models: &'a BTreeMap<String, ModelPricing>,
) -> Option<&'a ModelPricing> {
    models.get(&normalize_model(model))
}
