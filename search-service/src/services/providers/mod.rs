//! Search provider abstractions and implementations.
//!
//! Handlers only see the `SearchProvider` trait, so the Google client can be
//! swapped for the mock in tests.

pub mod google;
pub mod mock;

use async_trait::async_trait;
use secrecy::Secret;
use service_core::error::AppError;
use thiserror::Error;

pub use google::GoogleSearchProvider;
pub use mock::MockSearchProvider;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a structured error (quota, bad key, bad query).
    #[error("HTTP {status} returned \"{message}\"")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Label used for the provider call counter.
    pub fn outcome(&self) -> &'static str {
        match self {
            ProviderError::Api { .. } => "provider_error",
            ProviderError::Network(_) | ProviderError::InvalidResponse(_) => "internal_error",
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Api { status, .. } => {
                AppError::upstream(status, format!("Google API error: {}", err))
            }
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}

/// Credentials sent with every provider call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: Secret<String>,
    /// Programmable Search Engine id, sent as `cx`.
    pub search_engine_id: String,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search and return the provider's payload untouched.
    async fn search(
        &self,
        query: &str,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn api_error_keeps_provider_status_and_detail() {
        let err: AppError = ProviderError::Api {
            status: 403,
            message: "quota exceeded".to_string(),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn network_error_is_internal() {
        let err: AppError = ProviderError::Network("connection refused".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_response_is_internal() {
        let err: AppError = ProviderError::InvalidResponse("expected value".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
