use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Per-1K rates for one model in the `[pricing.models]` table
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct ModelRateConfig {
    pub(crate) input_per_1k: f64,
    pub(crate) output_per_1k: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PricingConfig {
    #[serde(default)]
    pub(crate) default_model: Option<String>,
    #[serde(default)]
    pub(crate) models: BTreeMap<String, ModelRateConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) no_save: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) requests: Option<u64>,
    #[serde(default)]
    pub(crate) query_tokens: Option<u64>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) pricing: PricingConfig,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/bakestats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("bakestats").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("bakestats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.bakestats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".bakestats.toml"));
        }

        paths
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("bakestats")));
    }

    #[test]
    fn parse_empty_is_default() {
        let config = Config::parse("").unwrap();
        assert!(!config.no_color);
        assert!(config.model.is_none());
        assert!(config.pricing.models.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
no_color = true
color = "never"
locale = "de"
model = "gpt-3.5-turbo"
requests = 250000
query_tokens = 80
output = "out/metrics.json"

[pricing]
default_model = "house-model"

[pricing.models.house-model]
input_per_1k = 0.002
output_per_1k = 0.004
"#,
        )
        .unwrap();

        assert!(config.no_color);
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert_eq!(config.model.as_deref(), Some("gpt-3.5-turbo"));
        assert_eq!(config.requests, Some(250_000));
        assert_eq!(config.query_tokens, Some(80));
        assert_eq!(config.output, Some(PathBuf::from("out/metrics.json")));
        assert_eq!(config.pricing.default_model.as_deref(), Some("house-model"));
        let rates = config.pricing.models["house-model"];
        assert_eq!(rates.input_per_1k, 0.002);
        assert_eq!(rates.output_per_1k, 0.004);
    }

    #[test]
    fn parse_rejects_bad_types() {
        assert!(Config::parse("requests = \"many\"").is_err());
    }
}
