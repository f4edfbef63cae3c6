//! Booking-related DTOs for quote, confirm, and list operations.

use serde::{Deserialize, Serialize};

use super::common_dto::PaginationMeta;
use crate::domain::{BookingRecord, BookingRequest, CheckInEntry, PaymentConfirmation};

/// Request body for `POST /bookings/confirm`.
///
/// Carries the original form data alongside the provider's success
/// callback; the gateway recomputes the total from the catalog.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ConfirmBookingRequest {
    /// The booking form as submitted before payment.
    pub booking: BookingRequest,
    /// The payment provider's asynchronous callback payload.
    pub payment: PaymentConfirmation,
}

/// Single booking detail for `GET /bookings/{reference}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookingDetailResponse {
    /// The stored booking record.
    pub booking: BookingRecord,
    /// The ledger entry, if the guest has already arrived.
    pub check_in: Option<CheckInEntry>,
}

/// Paginated list response for `GET /bookings`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookingListResponse {
    /// Booking records for the requested page.
    pub data: Vec<BookingRecord>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
