use crate::services::providers::Credentials;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Public Custom Search JSON API endpoint.
pub const DEFAULT_GOOGLE_SEARCH_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub credentials: Credentials,
    pub base_url: String,
}

impl SearchConfig {
    /// Load configuration from `.env`, `APP__*` and the Google variables.
    ///
    /// Both credentials must be present and non-empty; the service refuses to
    /// start otherwise.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, "GOOGLE_API_KEY")?;
        let search_engine_id = required(&lookup, "SEARCH_ENGINE_ID")?;
        let base_url = lookup("GOOGLE_SEARCH_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GOOGLE_SEARCH_BASE_URL.to_string());

        Ok(SearchConfig {
            common,
            google: GoogleConfig {
                credentials: Credentials {
                    api_key: Secret::new(api_key),
                    search_engine_id,
                },
                base_url,
            },
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.is_empty() => Ok(val),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} must be set to a non-empty value",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn loads_both_credentials() {
        let config = SearchConfig::from_lookup(
            core_config::Config::default(),
            lookup_from(&[("GOOGLE_API_KEY", "key-1"), ("SEARCH_ENGINE_ID", "cx-1")]),
        )
        .unwrap();

        assert_eq!(config.google.credentials.api_key.expose_secret(), "key-1");
        assert_eq!(config.google.credentials.search_engine_id, "cx-1");
        assert_eq!(config.google.base_url, DEFAULT_GOOGLE_SEARCH_BASE_URL);
    }

    #[test]
    fn base_url_can_be_overridden() {
        let config = SearchConfig::from_lookup(
            core_config::Config::default(),
            lookup_from(&[
                ("GOOGLE_API_KEY", "key-1"),
                ("SEARCH_ENGINE_ID", "cx-1"),
                ("GOOGLE_SEARCH_BASE_URL", "http://127.0.0.1:9999/v1"),
            ]),
        )
        .unwrap();

        assert_eq!(config.google.base_url, "http://127.0.0.1:9999/v1");
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = SearchConfig::from_lookup(
            core_config::Config::default(),
            lookup_from(&[("SEARCH_ENGINE_ID", "cx-1")]),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn empty_engine_id_is_a_config_error() {
        let err = SearchConfig::from_lookup(
            core_config::Config::default(),
            lookup_from(&[("GOOGLE_API_KEY", "key-1"), ("SEARCH_ENGINE_ID", "")]),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("SEARCH_ENGINE_ID"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = SearchConfig::from_lookup(
            core_config::Config::default(),
            lookup_from(&[("GOOGLE_API_KEY", "super-secret"), ("SEARCH_ENGINE_ID", "cx-1")]),
        )
        .unwrap();

        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
