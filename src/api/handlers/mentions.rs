//! Handlers for queue drain and confirmed-mention endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::mention::{
    ClaimRequest, ClaimResponse, MentionListResponse, MentionsQuery, StoreMentionRequest,
};
use crate::domain::entities::{Mention, NewMention};
use crate::error::AppError;
use crate::state::AppState;

/// Claims a batch of pending mentions for the external worker.
///
/// # Endpoint
///
/// `POST /api/pending/claim`
///
/// Claimed rows are marked processed atomically and never handed out
/// again; concurrent drains receive disjoint batches.
pub async fn claim_pending_handler(
    State(state): State<AppState>,
    payload: Option<Json<ClaimRequest>>,
) -> Result<Json<ClaimResponse>, AppError> {
    let max = payload.and_then(|Json(p)| p.max);
    let mentions = state.mention_service.claim_pending(max).await?;

    Ok(Json(ClaimResponse { mentions }))
}

/// Lists confirmed mentions for a target page.
///
/// # Endpoint
///
/// `GET /api/mentions?target=https://...&type=in-reply-to`
pub async fn mention_list_handler(
    State(state): State<AppState>,
    Query(query): Query<MentionsQuery>,
) -> Result<Json<MentionListResponse>, AppError> {
    let mentions = state
        .mention_service
        .mentions_for_page(&query.target, query.mention_type.as_deref())
        .await?;

    Ok(Json(MentionListResponse { mentions }))
}

/// Stores a confirmed mention on behalf of the downstream processor.
///
/// # Endpoint
///
/// `POST /api/mentions`
pub async fn store_mention_handler(
    State(state): State<AppState>,
    Json(payload): Json<StoreMentionRequest>,
) -> Result<(StatusCode, Json<Mention>), AppError> {
    let mention = state
        .mention_service
        .store_mention(NewMention {
            source: payload.source,
            target: payload.target,
            mention_type: payload.mention_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(mention)))
}
