//! The inbound POST contract, independent of any web framework.
//!
//! `200 {"posts": [...]}` when at least one platform succeeded,
//! `400 {"error": ...}` for validation failures and
//! `500 {"error": ...}` when nothing was generated or something unexpected happened.

use futures::FutureExt;
use serde::Serialize;
use serde_json::{json, Value};
use std::panic::AssertUnwindSafe;

use super::error::GenerateError;
use super::orchestrator::Orchestrator;
use super::types::GenerationRequest;

/// Status code and JSON body handed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn error(err: &GenerateError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.public_message() }),
        }
    }
}

/// Handles one POST body.
pub async fn handle_generate(orchestrator: &Orchestrator, body: &[u8]) -> ApiResponse {
    let request: GenerationRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting malformed request body");
            return ApiResponse::error(&GenerateError::InvalidRequest(
                "Invalid request body".to_string(),
            ));
        }
    };

    let outcome = AssertUnwindSafe(orchestrator.generate(request))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| {
            Err(GenerateError::Internal(
                "generation task panicked".to_string(),
            ))
        });

    let result = outcome.and_then(|output| {
        serde_json::to_value(output).map_err(|e| GenerateError::Internal(e.to_string()))
    });

    match result {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => {
            match &e {
                GenerateError::Internal(detail) => {
                    tracing::error!(error = %detail, "Error in generate-content handler")
                }
                other => tracing::debug!(status = other.status(), error = %other, "Request rejected"),
            }
            ApiResponse::error(&e)
        }
    }
}
