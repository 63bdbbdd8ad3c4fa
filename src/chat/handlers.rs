use axum::{extract::State, Json};
use tracing::{error, instrument};

use crate::{error::ApiError, state::AppState};

use super::dto::{ChatRequest, UpstreamMessage, UpstreamRequest};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Passthrough to the configured chat-completion API. The upstream JSON
/// body is relayed verbatim; the API key never leaves the server.
#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::bad_request("Please provide a message"));
    }

    let cfg = &state.config.chat;
    let body = UpstreamRequest {
        model: cfg.model.clone(),
        messages: vec![
            UpstreamMessage {
                role: "system",
                content: SYSTEM_PROMPT.into(),
            },
            UpstreamMessage {
                role: "user",
                content: payload.message,
            },
        ],
    };

    let response = state
        .http
        .post(&cfg.api_url)
        .bearer_auth(&cfg.api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, "chat upstream request failed");
            ApiError::Upstream(e.into())
        })?;

    let data: serde_json::Value = response.json().await.map_err(|e| {
        error!(error = %e, "chat upstream returned non-json body");
        ApiError::Upstream(e.into())
    })?;

    Ok(Json(data))
}
