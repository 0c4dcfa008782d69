//! Handler for the public webmention intake endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use validator::Validate;

use crate::api::dto::webmention::{WebmentionRequest, WebmentionResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Receives a webmention notification.
///
/// # Endpoint
///
/// `POST /webmention`
///
/// Runs the admission pipeline; on accept the notification is queued for
/// asynchronous processing and `202 Accepted` is returned with
/// `{ "success": true }`.
///
/// # Errors
///
/// Returns 400 with `{ "error": ... }` for malformed URLs and for every
/// policy rejection (blacklisted source, block-rule match, wrong scheme,
/// self-referential pair, unsupported target host, whitelist-only miss).
pub async fn webmention_handler(
    State(state): State<AppState>,
    Json(payload): Json<WebmentionRequest>,
) -> Result<(StatusCode, Json<WebmentionResponse>), AppError> {
    payload.validate().map_err(|e| {
        let details: Vec<_> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                json!({
                    "field": field,
                    "messages": errors
                        .iter()
                        .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        AppError::bad_request("Invalid webmention request", json!(details))
    })?;

    let pending = state
        .admission_service
        .admit(&payload.source, &payload.target)
        .await?;

    tracing::info!(
        source = %pending.source,
        target = %pending.target,
        "webmention queued"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(WebmentionResponse { success: true }),
    ))
}
