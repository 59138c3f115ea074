use crate::error::AppError;

/// Model pricing info (per token, not per thousand)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ModelPricing {
    pub(crate) input: f64,
    pub(crate) output: f64,
}

impl ModelPricing {
    /// Build from the per-1K rates providers publish. Rates must be finite and non-negative.
    pub(crate) fn per_thousand(model: &str, input: f64, output: f64) -> Result<Self, AppError> {
        for (kind, rate) in [("input", input), ("output", output)] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "model \"{model}\": {kind} rate must be a non-negative number, got {rate}"
                )));
            }
        }
        Ok(ModelPricing {
            input: input / 1000.0,
            output: output / 1000.0,
        })
    }

    pub(crate) fn rate(&self, token_type: TokenType) -> f64 {
        match token_type {
            TokenType::Input => self.input,
            TokenType::Output => self.output,
        }
    }
}

/// Which side of a request the tokens are billed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenType {
    /// Prompt tokens sent to the model
    Input,
    /// Completion tokens produced by the model
    Output,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn per_thousand_converts_to_per_token() {
        let p = ModelPricing::per_thousand("gpt-4", 0.03, 0.06).unwrap();
        assert!((p.input - 0.00003).abs() < 1e-12);
        assert!((p.output - 0.00006).abs() < 1e-12);
    }

    #[test]
    fn per_thousand_rejects_negative() {
        let err = ModelPricing::per_thousand("m", -0.01, 0.06).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: model \"m\": input rate must be a non-negative number, got -0.01"
        );
    }

    #[test]
    fn per_thousand_rejects_nan() {
        assert!(ModelPricing::per_thousand("m", 0.01, f64::NAN).is_err());
    }

    #[test]
    fn rate_selects_token_type() {
        let p = ModelPricing {
            input: 1.0,
            output: 2.0,
        };
        assert_eq!(p.rate(TokenType::Input), 1.0);
        assert_eq!(p.rate(TokenType::Output), 2.0);
    }
}
