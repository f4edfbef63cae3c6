//! System endpoints: health check and the public ticket catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /config/ticket-types` — Public ticket catalog.
#[utoipa::path(
    get,
    path = "/config/ticket-types",
    tag = "System",
    summary = "List ticket offerings",
    description = "Returns the static catalog with adult and child rates for the booking form.",
    responses(
        (status = 200, description = "Ticket catalog", body = Vec<crate::domain::TicketOffering>),
    )
)]
pub async fn ticket_types_handler(State(state): State<AppState>) -> impl IntoResponse {
    let offerings = state.booking_service.catalog().offerings();
    (StatusCode::OK, Json(offerings))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/ticket-types", get(ticket_types_handler))
}
