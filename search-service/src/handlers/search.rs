use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service_core::error::AppError;

use crate::services::metrics::record_provider_call;
use crate::services::ProviderError;
use crate::startup::AppState;

pub const MISSING_QUERY_MESSAGE: &str = "The search parameter 'q' is required.";

/// First value of `q`; later repeats are ignored.
fn first_query(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value)
}

#[tracing::instrument(skip(state, params))]
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) =
        params.map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;
    let query = first_query(params)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!(MISSING_QUERY_MESSAGE)))?;

    match state
        .provider
        .search(&query, &state.config.google.credentials)
        .await
    {
        Ok(payload) => {
            record_provider_call("success");
            Ok(Json(payload))
        }
        Err(e) => {
            record_provider_call(e.outcome());
            match &e {
                ProviderError::Api { status, .. } => {
                    tracing::warn!(status = *status, error = %e, "Search provider rejected the query");
                }
                _ => {
                    tracing::error!(error = %e, "Search provider call failed");
                }
            }
            Err(e.into())
        }
    }
}
