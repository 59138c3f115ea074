use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("System prompt not found: {}", path.display())]
    PromptNotFound { path: PathBuf },

    #[error("Invalid comparison record {}: {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize comparison record: {0}")]
    Serialize(serde_json::Error),

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },
}

impl AppError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_invalid_input() {
        let e = AppError::invalid_input("traditional tokens must be greater than zero");
        assert_eq!(
            e.to_string(),
            "Invalid input: traditional tokens must be greater than zero"
        );
    }

    #[test]
    fn app_error_display_io() {
        let e = AppError::io(
            "write",
            "results/out.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(e.to_string(), "Failed to write results/out.json: denied");
    }

    #[test]
    fn app_error_display_prompt_not_found() {
        let e = AppError::PromptNotFound {
            path: PathBuf::from("configs/prompt.txt"),
        };
        assert_eq!(e.to_string(), "System prompt not found: configs/prompt.txt");
    }

    #[test]
    fn app_error_display_locale() {
        let e = AppError::UnsupportedLocale {
            input: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn app_error_display_record() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = AppError::InvalidRecord {
            path: PathBuf::from("bad.json"),
            source,
        };
        assert!(e.to_string().starts_with("Invalid comparison record bad.json: "));
    }
}
