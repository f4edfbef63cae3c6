//! Admin inventory handlers.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use super::auth::require_operator;
use crate::api::dto::{CreateInventoryRequest, InventoryListResponse};
use crate::app_state::AppState;
use crate::domain::{InventoryItem, InventoryPatch};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /admin/tickets` — Inventory listing with totals.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    get,
    path = "/api/v1/admin/tickets",
    tag = "Admin",
    summary = "List ticket inventory",
    description = "Returns all stock lines plus revenue, capacity, and sold totals.",
    responses(
        (status = 200, description = "Inventory listing", body = InventoryListResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn list_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    let data = state.inventory.list().await;
    let totals = state.inventory.totals().await;
    Ok(Json(InventoryListResponse { data, totals }))
}

/// `POST /admin/tickets` — Add a stock line.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/tickets",
    tag = "Admin",
    summary = "Add a stock line",
    description = "Creates a new sellable ticket stock line with zero sales.",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Stock line created", body = InventoryItem),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateInventoryRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    if req.ticket_type.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "ticket type is required".to_string(),
        ));
    }
    let item = InventoryItem::new(req.ticket_type, req.price, req.available);
    let id = state.inventory.insert(item).await;
    let created = state.inventory.get(id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /admin/tickets/{id}` — Update price and/or availability.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown stock line,
/// [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/tickets/{id}",
    tag = "Admin",
    summary = "Patch a stock line",
    description = "Applies a typed partial update. Only price and availability are mutable.",
    params(
        ("id" = Uuid, Path, description = "Stock line UUID"),
    ),
    request_body = InventoryPatch,
    responses(
        (status = 200, description = "Updated stock line", body = InventoryItem),
        (status = 400, description = "Unknown stock line", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn patch_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(patch): Json<InventoryPatch>,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    let updated = state.inventory.apply_patch(id, &patch).await?;
    Ok(Json(updated))
}

/// `DELETE /admin/tickets/{id}` — Remove a stock line.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown stock line,
/// [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/tickets/{id}",
    tag = "Admin",
    summary = "Delete a stock line",
    params(
        ("id" = Uuid, Path, description = "Stock line UUID"),
    ),
    responses(
        (status = 204, description = "Stock line deleted"),
        (status = 400, description = "Unknown stock line", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    state.inventory.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Admin inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/tickets", get(list_inventory).post(create_inventory))
        .route(
            "/admin/tickets/{id}",
            axum::routing::patch(patch_inventory).delete(delete_inventory),
        )
}
