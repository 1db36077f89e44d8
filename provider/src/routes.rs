// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP route handlers for the resource provider.
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | `/health` | [`health`] | Health check endpoint |
//! | POST | `/` | [`invoke`] | Run one lifecycle handler |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::AppState;
use crate::errors::HandlerError;
use crate::handler::{ParameterResourceHandler, dispatch};
use crate::models::{HandlerRequest, ProgressEvent, ResourceModel};
use crate::session::Session;

/// Health check endpoint.
///
/// # Response
///
/// ```json
/// {"status": "ok"}
/// ```
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Runs the lifecycle handler named by the request's `action`.
///
/// # Request Flow
///
/// 1. Take the current (and previous) resource model from the envelope
/// 2. Build a parameter store client for the caller's session
/// 3. Dispatch to the matching [`ParameterResourceHandler`] method
/// 4. Report failures in-band as a `FAILED` progress event
///
/// Handler failures still answer with HTTP 200; only envelopes that cannot be
/// decoded are rejected at the HTTP layer.
#[tracing::instrument(skip_all, fields(action = ?request.action))]
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    Json(request): Json<HandlerRequest>,
) -> Json<ProgressEvent<ResourceModel>> {
    let bearer_token = request.bearer_token.clone();

    let event = match handle(&state, request).await {
        Ok(event) => event,
        Err(e) => {
            let error_code = e.error_code();
            tracing::error!("[provider] handler failed ({:?}): {}", error_code, e);
            ProgressEvent::failed(error_code, e.to_string())
        }
    };

    Json(event.with_bearer_token(bearer_token))
}

async fn handle(
    state: &AppState,
    request: HandlerRequest,
) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
    let session = Session::from_request(&request);
    let data = request.request_data;
    let current = data
        .resource_properties
        .ok_or(HandlerError::MissingResourceModel)?;

    let store = state.stores.connect(&session).await?;
    let handler = ParameterResourceHandler::new(store);

    dispatch(
        &handler,
        request.action,
        data.previous_resource_properties,
        current,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
