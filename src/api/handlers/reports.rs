//! Dashboard report handlers.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::auth::require_operator;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::booking_service::{CheckInSummary, DailyReport};

/// `GET /reports/daily` — Bookings grouped by visit date with occupancy.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    get,
    path = "/api/v1/reports/daily",
    tag = "Reports",
    summary = "Daily booking report",
    description = "Groups all bookings by visit date and reports tickets sold versus remaining under the daily capacity.",
    responses(
        (status = 200, description = "Per-date report", body = Vec<DailyReport>),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn daily_report(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    let report = state.booking_service.daily_report().await?;
    Ok(Json(report))
}

/// `GET /reports/check-ins` — Sales dashboard counters.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    get,
    path = "/api/v1/reports/check-ins",
    tag = "Reports",
    summary = "Check-in summary",
    description = "Counts checked-in bookings per ticket type plus adult and child totals.",
    responses(
        (status = 200, description = "Check-in summary", body = CheckInSummary),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn check_in_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    let summary = state.booking_service.check_in_summary().await?;
    Ok(Json(summary))
}

/// Report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/daily", get(daily_report))
        .route("/reports/check-ins", get(check_in_summary))
}
