//! Check-in DTOs for manual, guest, and scan-driven check-ins.

use serde::{Deserialize, Serialize};

use crate::domain::{BookingRef, CheckInEntry, ScanResult};

/// Request body for `POST /check-ins` and `POST /check-ins/guest`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CheckInRequest {
    /// Booking reference to check in.
    pub booking_ref: BookingRef,
}

/// Request body for `POST /check-ins/scan`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ScanCheckInRequest {
    /// Outcome reported by the external QR decoder.
    pub scan: ScanResult,
}

/// Ledger listing for `GET /check-ins`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CheckInListResponse {
    /// All ledger entries.
    pub data: Vec<CheckInEntry>,
}
