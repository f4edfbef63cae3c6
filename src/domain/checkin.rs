//! Check-in ledger entries and gate-side scan results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BookingRef;

/// A single on-site arrival record.
///
/// At most one entry exists per booking reference; entries are append-only
/// and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CheckInEntry {
    /// Booking the guest arrived under.
    pub booking_ref: BookingRef,
    /// Server timestamp of the check-in.
    pub checked_in_at: DateTime<Utc>,
    /// Operator who performed the check-in (`"guest"` for self check-in).
    pub operator_id: String,
}

/// Whether a check-in attempt created a new ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    /// A new ledger entry was appended.
    CheckedIn,
    /// The booking was already checked in; the existing entry is returned.
    AlreadyCheckedIn,
}

/// Result of a check-in attempt: the status plus the authoritative entry.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CheckInOutcome {
    /// Whether this attempt appended a new entry.
    pub status: CheckInStatus,
    /// The ledger entry for the booking (new or pre-existing).
    pub entry: CheckInEntry,
}

impl CheckInOutcome {
    /// Returns `true` if this attempt appended a new entry.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.status == CheckInStatus::CheckedIn
    }
}

/// Outcome reported by the external camera/QR-decoding collaborator.
///
/// The gateway never fabricates scan results; the decoder either found a
/// booking reference in the frame or it did not.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ScanResult {
    /// The decoder extracted a booking reference from the QR code.
    Found {
        /// Decoded booking reference.
        booking_ref: BookingRef,
    },
    /// No readable booking reference was present in the frame.
    NotFound,
}
