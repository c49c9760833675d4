//! Google Custom Search JSON API client.
//!
//! Issues `GET {base_url}?key=..&cx=..&q=..` and hands the JSON body back
//! unchanged. No paging, locale or result-count parameters are sent.

use super::{Credentials, ProviderError, SearchProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use service_core::observability::TracedClientExt;

pub struct GoogleSearchProvider {
    client: Client,
    base_url: String,
}

/// Error envelope used by Google APIs.
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

impl GoogleSearchProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Pull the human readable detail out of an error response body.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<GoogleErrorEnvelope>(body) {
        return envelope.error.message;
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(
        &self,
        query: &str,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, ProviderError> {
        tracing::debug!(
            query_len = query.len(),
            cx = %credentials.search_engine_id,
            "Sending request to Google Custom Search"
        );

        // without_url() keeps the API key out of error messages.
        let response = self
            .client
            .traced_get(&self.base_url)
            .query(&[
                ("key", credentials.api_key.expose_secret().as_str()),
                ("cx", credentials.search_engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: error_detail(status, &body),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.without_url().to_string()))
    }
}
