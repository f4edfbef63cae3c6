//! Booking handlers: quote, payment confirmation, list, detail.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    BookingDetailResponse, BookingListResponse, ConfirmBookingRequest, PaginationParams, paginate,
};
use crate::app_state::AppState;
use crate::domain::{BookingRef, BookingRequest};
use crate::error::{ErrorResponse, GatewayError};
use crate::service::booking_service::BookingQuote;

/// `POST /bookings/quote` — Price a prospective booking.
///
/// Side-effect free; the visitor may re-quote freely while editing the
/// form.
///
/// # Errors
///
/// Returns [`GatewayError`] on validation failure or an unknown ticket
/// type.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/quote",
    tag = "Bookings",
    summary = "Quote a booking",
    description = "Validates the booking form, computes the total from the ticket catalog, and returns the charge payload for the payment widget.",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Priced booking", body = BookingQuote),
        (status = 400, description = "Invalid form or ticket type", body = ErrorResponse),
    )
)]
pub async fn quote_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let quote = state.booking_service.quote(&req)?;
    Ok(Json(quote))
}

/// `POST /bookings/confirm` — Record a booking from the provider
/// success callback.
///
/// # Errors
///
/// Returns [`GatewayError::DuplicateBooking`] if the reference was
/// already recorded, validation errors otherwise.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/confirm",
    tag = "Bookings",
    summary = "Confirm a paid booking",
    description = "Creates the immutable booking record keyed by the provider reference. The total is recomputed from the catalog, never taken from the client.",
    request_body = ConfirmBookingRequest,
    responses(
        (status = 201, description = "Booking recorded", body = crate::domain::BookingRecord),
        (status = 400, description = "Invalid form or failed payment", body = ErrorResponse),
        (status = 409, description = "Reference already recorded", body = ErrorResponse),
    )
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    Json(req): Json<ConfirmBookingRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .booking_service
        .confirm_payment(&req.booking, &req.payment)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /bookings` — List all bookings with pagination.
///
/// # Errors
///
/// Returns [`GatewayError::StorageUnavailable`] on medium failure.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    summary = "List bookings",
    description = "Returns a paginated list of all booking records.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated booking list", body = BookingListResponse),
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let records = state.booking_service.list_bookings().await?;
    let (data, pagination) = paginate(records, &params);
    Ok(Json(BookingListResponse { data, pagination }))
}

/// `GET /bookings/{reference}` — Booking detail with check-in state.
///
/// Backs both the confirmation page (QR payload) and the guest info page.
///
/// # Errors
///
/// Returns [`GatewayError::BookingNotFound`] if the reference is unknown.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{reference}",
    tag = "Bookings",
    summary = "Get booking details",
    description = "Returns the booking record plus its ledger entry if the guest has already checked in.",
    params(
        ("reference" = String, Path, description = "Payment provider reference"),
    ),
    responses(
        (status = 200, description = "Booking details", body = BookingDetailResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let reference = BookingRef::from(reference);
    let booking = state.booking_service.booking(&reference).await?;
    let check_in = state.booking_service.check_in_entry(&reference).await?;
    Ok(Json(BookingDetailResponse { booking, check_in }))
}

/// Booking routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings/quote", post(quote_booking))
        .route("/bookings/confirm", post(confirm_booking))
        .route("/bookings", get(list_bookings))
        .route("/bookings/{reference}", get(get_booking))
}
