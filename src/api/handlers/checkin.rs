//! Check-in handlers: operator, guest self-service, and QR scan.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use super::auth::require_operator;
use crate::api::dto::{CheckInListResponse, CheckInRequest, ScanCheckInRequest};
use crate::app_state::AppState;
use crate::domain::{CheckInOutcome, ScanResult};
use crate::error::{ErrorResponse, GatewayError};

/// Operator id recorded for guest self check-ins.
const GUEST_OPERATOR: &str = "guest";

/// `POST /check-ins` — Operator check-in by booking reference.
///
/// Idempotent: a second attempt returns `already_checked_in` with the
/// original ledger entry.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a session,
/// [`GatewayError::BookingNotFound`] for an unknown reference.
#[utoipa::path(
    post,
    path = "/api/v1/check-ins",
    tag = "Check-ins",
    summary = "Check a guest in",
    description = "Appends at most one ledger entry per booking. Requires an operator session; the session's username is recorded as the operator.",
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Check-in outcome", body = CheckInOutcome),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn operator_check_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CheckInRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let operator = require_operator(&state, &headers).await?;
    let outcome = state
        .booking_service
        .check_in(&req.booking_ref, &operator)
        .await?;
    Ok(Json(outcome))
}

/// `POST /check-ins/guest` — Guest self check-in from the QR link.
///
/// # Errors
///
/// Returns [`GatewayError::BookingNotFound`] for an unknown reference.
#[utoipa::path(
    post,
    path = "/api/v1/check-ins/guest",
    tag = "Check-ins",
    summary = "Guest self check-in",
    description = "Unauthenticated check-in used by the guest landing page; the operator is recorded as \"guest\". Idempotent per booking.",
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Check-in outcome", body = CheckInOutcome),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn guest_check_in(
    State(state): State<AppState>,
    Json(req): Json<CheckInRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let outcome = state
        .booking_service
        .check_in(&req.booking_ref, GUEST_OPERATOR)
        .await?;
    Ok(Json(outcome))
}

/// `POST /check-ins/scan` — Check in from an external QR scan result.
///
/// The gateway consumes the decoder's verdict as-is; it never invents a
/// reference for an unreadable frame.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] when the scan found nothing,
/// [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    post,
    path = "/api/v1/check-ins/scan",
    tag = "Check-ins",
    summary = "Check in from a QR scan",
    description = "Accepts the camera/QR decoder's result. A found reference is checked in under the operator session; a miss is a 400.",
    request_body = ScanCheckInRequest,
    responses(
        (status = 200, description = "Check-in outcome", body = CheckInOutcome),
        (status = 400, description = "No reference in the scan", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn scan_check_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ScanCheckInRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let operator = require_operator(&state, &headers).await?;
    let booking_ref = match req.scan {
        ScanResult::Found { booking_ref } => booking_ref,
        ScanResult::NotFound => {
            return Err(GatewayError::InvalidRequest(
                "scan did not contain a booking reference".to_string(),
            ));
        }
    };
    let outcome = state.booking_service.check_in(&booking_ref, &operator).await?;
    Ok(Json(outcome))
}

/// `GET /check-ins` — Full ledger listing.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a session.
#[utoipa::path(
    get,
    path = "/api/v1/check-ins",
    tag = "Check-ins",
    summary = "List check-ins",
    description = "Returns every ledger entry.",
    responses(
        (status = 200, description = "Ledger entries", body = CheckInListResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn list_check_ins(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let _operator = require_operator(&state, &headers).await?;
    let data = state.booking_service.check_ins().await?;
    Ok(Json(CheckInListResponse { data }))
}

/// Check-in routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/check-ins", post(operator_check_in).get(list_check_ins))
        .route("/check-ins/guest", post(guest_check_in))
        .route("/check-ins/scan", post(scan_check_in))
}
