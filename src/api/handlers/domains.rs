//! Handlers for domain registry endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::api::dto::domain_entry::{
    CreateDomainRequest, CreateDomainResponse, DeletedResponse, DomainItem, DomainListResponse,
    ListDomainsQuery, SweepResponse, VerifyResponse,
};
use crate::domain::entities::ListType;
use crate::error::AppError;
use crate::state::AppState;

/// Lists registry entries, optionally filtered by list type.
///
/// # Endpoint
///
/// `GET /api/domains?list_type=whitelist`
pub async fn domain_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListDomainsQuery>,
) -> Result<Json<DomainListResponse>, AppError> {
    let list_type = query.list_type.as_deref().and_then(ListType::parse);
    let entries = state.domain_entry_service.list_domains(list_type).await?;

    Ok(Json(DomainListResponse {
        domains: entries.into_iter().map(DomainItem::from).collect(),
    }))
}

/// Registers a domain and returns the verification proof instructions.
///
/// # Endpoint
///
/// `POST /api/domains`
///
/// # Errors
///
/// Returns 400 for an empty/invalid domain or unknown list type.
/// Returns 409 if the domain is already registered.
pub async fn create_domain_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDomainRequest>,
) -> Result<(StatusCode, Json<CreateDomainResponse>), AppError> {
    let list_type = match payload.list_type.as_deref() {
        None => ListType::Whitelist,
        Some(value) => ListType::parse(value).ok_or_else(|| {
            AppError::bad_request(
                "list_type must be whitelist or blacklist",
                json!({ "list_type": value }),
            )
        })?,
    };

    let (entry, instructions) = state
        .domain_entry_service
        .register_domain(&payload.domain, list_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateDomainResponse {
            domain: DomainItem::from(entry),
            instructions,
        }),
    ))
}

/// Deletes a registry entry.
///
/// # Endpoint
///
/// `DELETE /api/domains/{id}`
pub async fn delete_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.domain_entry_service.delete_domain(id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}

/// Runs an on-demand verification check for one whitelist entry.
///
/// # Endpoint
///
/// `POST /api/domains/{id}/verify`
///
/// # Errors
///
/// Returns 400 for blacklist entries, 404 for unknown ids.
pub async fn verify_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<VerifyResponse>, AppError> {
    let outcome = state.domain_entry_service.verify_domain(id).await?;

    Ok(Json(VerifyResponse {
        verified: outcome.verified,
        last_verified_at: outcome.last_verified_at,
    }))
}

/// Re-runs verification for every verified whitelist entry.
///
/// # Endpoint
///
/// `POST /api/domains/reverify`
pub async fn reverify_domains_handler(
    State(state): State<AppState>,
) -> Result<Json<SweepResponse>, AppError> {
    let results = state.domain_entry_service.reverify_all().await?;
    Ok(Json(SweepResponse { results }))
}
