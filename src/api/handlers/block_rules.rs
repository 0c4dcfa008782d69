//! Handlers for block rule endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::block_rule::{
    BlockRuleListResponse, CreateBlockRuleRequest, CreateBlockRuleResponse,
};
use crate::api::dto::domain_entry::DeletedResponse;
use crate::application::services::BlockRuleInput;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all block rules.
///
/// # Endpoint
///
/// `GET /api/block-rules`
pub async fn block_rule_list_handler(
    State(state): State<AppState>,
) -> Result<Json<BlockRuleListResponse>, AppError> {
    let rules = state.block_rule_service.list_rules().await?;
    Ok(Json(BlockRuleListResponse { rules }))
}

/// Creates a block rule.
///
/// # Endpoint
///
/// `POST /api/block-rules`
///
/// # Errors
///
/// Returns 400 when no clause remains after normalization.
pub async fn create_block_rule_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlockRuleRequest>,
) -> Result<(StatusCode, Json<CreateBlockRuleResponse>), AppError> {
    let rule = state
        .block_rule_service
        .create_rule(BlockRuleInput {
            domain_pattern: payload.domain_pattern,
            pattern_kind: payload.pattern_kind,
            source_url_prefix: payload.source_url_prefix,
            mention_type: payload.mention_type,
            label: payload.label,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateBlockRuleResponse { rule })))
}

/// Deletes a block rule.
///
/// # Endpoint
///
/// `DELETE /api/block-rules/{id}`
pub async fn delete_block_rule_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.block_rule_service.delete_rule(id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
