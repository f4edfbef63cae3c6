//! Domain events reflecting booking and check-in state changes.
//!
//! Every state mutation emits a [`GateEvent`] through the
//! [`super::EventBus`]. Events are broadcast to WebSocket subscribers so
//! the sales and admin dashboards can update live.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::BookingRef;

/// Domain event emitted after every state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GateEvent {
    /// Emitted when a confirmed payment produces a booking record.
    BookingRecorded {
        /// Booking reference assigned by the payment provider.
        booking_ref: BookingRef,
        /// Catalog identifier of the booked offering.
        ticket_type_id: String,
        /// Planned visit date.
        visit_date: NaiveDate,
        /// Total charged in minor currency units.
        total: u64,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a guest is checked in for the first time.
    GuestCheckedIn {
        /// Booking the guest arrived under.
        booking_ref: BookingRef,
        /// Operator who performed the check-in.
        operator_id: String,
        /// Check-in timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl GateEvent {
    /// Returns the booking reference the event concerns.
    #[must_use]
    pub fn booking_ref(&self) -> &BookingRef {
        match self {
            Self::BookingRecorded { booking_ref, .. } | Self::GuestCheckedIn { booking_ref, .. } => {
                booking_ref
            }
        }
    }

    /// Returns the snake_case event type discriminator.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::BookingRecorded { .. } => "booking_recorded",
            Self::GuestCheckedIn { .. } => "guest_checked_in",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn event_type_strings_match_serialized_tag() {
        let event = GateEvent::GuestCheckedIn {
            booking_ref: BookingRef::from("T-7"),
            operator_id: "rep2".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type_str(), "guest_checked_in");

        let Ok(json) = serde_json::to_value(&event) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json.get("event_type").and_then(|v| v.as_str()),
            Some("guest_checked_in")
        );
    }

    #[test]
    fn booking_ref_accessor_covers_all_variants() {
        let reference = BookingRef::from("T-8");
        let recorded = GateEvent::BookingRecorded {
            booking_ref: reference.clone(),
            ticket_type_id: "Basic".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap_or_default(),
            total: 2000,
            timestamp: Utc::now(),
        };
        assert_eq!(recorded.booking_ref(), &reference);
    }
}
