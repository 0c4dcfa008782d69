//! Handlers for the settings endpoints.

use axum::{extract::State, Json};

use crate::api::dto::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current settings.
///
/// # Endpoint
///
/// `GET /api/settings`
pub async fn settings_handler(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let mode = state.settings_service.webmention_mode().await?;

    Ok(Json(SettingsResponse {
        webmention_mode: mode.as_str().to_string(),
    }))
}

/// Partially updates settings.
///
/// # Endpoint
///
/// `PATCH /api/settings`
///
/// # Errors
///
/// Returns 400 for an unrecognized mode value.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    if let Some(mode) = &payload.webmention_mode {
        state.settings_service.set_webmention_mode(mode).await?;
    }

    let mode = state.settings_service.webmention_mode().await?;
    Ok(Json(SettingsResponse {
        webmention_mode: mode.as_str().to_string(),
    }))
}
