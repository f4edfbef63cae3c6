//! Booking request, payment handoff, and the immutable booking record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::BookingRef;
use crate::error::GatewayError;

/// A visitor's booking intent, as entered on the booking form.
///
/// Validated with [`BookingRequest::validate`] before any pricing or
/// payment handoff.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookingRequest {
    /// Visitor's full name.
    pub full_name: String,
    /// Contact email, also forwarded to the payment provider.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Catalog identifier of the chosen ticket offering.
    pub ticket_type_id: String,
    /// Number of adult tickets (at least one).
    pub adult_count: u32,
    /// Number of child tickets.
    #[serde(default)]
    pub child_count: u32,
    /// Planned visit date.
    pub visit_date: NaiveDate,
}

impl BookingRequest {
    /// Validates the form fields.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for a blank name, malformed
    /// email, or blank phone, and [`GatewayError::InvalidQuantity`] when no
    /// adult ticket is selected.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.full_name.trim().is_empty() {
            return Err(GatewayError::InvalidRequest("name is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(GatewayError::InvalidRequest(
                "valid email required".to_string(),
            ));
        }
        if self.phone.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "phone is required".to_string(),
            ));
        }
        if self.adult_count < 1 {
            return Err(GatewayError::InvalidQuantity(
                "at least one adult ticket".to_string(),
            ));
        }
        Ok(())
    }
}

/// Structural email check: one `@`, non-empty local part, and a domain
/// containing a dot.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.split('.');
    let Some(host) = domain_parts.next() else {
        return false;
    };
    let tld_ok = domain_parts.next().is_some_and(|tld| !tld.is_empty());
    !host.is_empty() && tld_ok && !domain.contains(char::is_whitespace)
}

/// An immutable booking record, created exactly once per successful
/// payment confirmation.
///
/// Keyed by [`BookingRef`] in the booking record store. The `total` always
/// equals the catalog price for the recorded ticket selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookingRecord {
    /// Payment-provider reference, the primary key.
    pub reference: BookingRef,
    /// Visitor's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Catalog identifier of the booked ticket offering.
    pub ticket_type_id: String,
    /// Number of adult tickets.
    pub adult_count: u32,
    /// Number of child tickets.
    pub child_count: u32,
    /// Planned visit date.
    pub visit_date: NaiveDate,
    /// Total charged, in minor currency units.
    pub total: u64,
    /// Server timestamp of record creation.
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Total number of tickets on the booking.
    #[must_use]
    pub const fn ticket_count(&self) -> u32 {
        self.adult_count.saturating_add(self.child_count)
    }
}

/// Asynchronous success callback received from the payment provider.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct PaymentConfirmation {
    /// Provider-assigned transaction reference.
    pub reference: String,
    /// Provider status string; only `"success"` creates a booking record.
    pub status: String,
}

impl PaymentConfirmation {
    /// Returns `true` if the provider reported a successful charge.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Outbound charge payload handed to the payment-provider widget.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PaymentCharge {
    /// Visitor email forwarded to the provider.
    pub email: String,
    /// Charge amount in minor currency units.
    pub amount: u64,
    /// Booking fields echoed back in the provider callback.
    pub metadata: serde_json::Value,
}

impl PaymentCharge {
    /// Builds the charge payload for a validated request and its total.
    #[must_use]
    pub fn for_request(request: &BookingRequest, total: u64) -> Self {
        Self {
            email: request.email.clone(),
            amount: total,
            metadata: serde_json::json!({
                "full_name": request.full_name,
                "phone": request.phone,
                "ticket_type": request.ticket_type_id,
                "adult_count": request.adult_count,
                "child_count": request.child_count,
                "visit_date": request.visit_date,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample_request() -> BookingRequest {
        BookingRequest {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+234 800 000 0000".to_string(),
            ticket_type_id: "Classic".to_string(),
            adult_count: 2,
            child_count: 1,
            visit_date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap_or_default(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut request = sample_request();
        request.full_name = "   ".to_string();
        let Err(GatewayError::InvalidRequest(msg)) = request.validate() else {
            panic!("expected InvalidRequest");
        };
        assert!(msg.contains("name"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["plainaddress", "no@tld", "two@@example.com", "a b@x.com", ""] {
            let mut request = sample_request();
            request.email = bad.to_string();
            assert!(request.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn blank_phone_is_rejected() {
        let mut request = sample_request();
        request.phone = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn zero_adults_is_rejected() {
        let mut request = sample_request();
        request.adult_count = 0;
        let Err(GatewayError::InvalidQuantity(_)) = request.validate() else {
            panic!("expected InvalidQuantity");
        };
    }

    #[test]
    fn confirmation_success_flag() {
        let ok = PaymentConfirmation {
            reference: "PSK-1".to_string(),
            status: "success".to_string(),
        };
        assert!(ok.is_success());

        let failed = PaymentConfirmation {
            reference: "PSK-2".to_string(),
            status: "failed".to_string(),
        };
        assert!(!failed.is_success());
    }

    #[test]
    fn charge_carries_email_and_amount() {
        let request = sample_request();
        let charge = PaymentCharge::for_request(&request, 8500);
        assert_eq!(charge.email, "john@example.com");
        assert_eq!(charge.amount, 8500);
        assert_eq!(
            charge.metadata.get("ticket_type").and_then(|v| v.as_str()),
            Some("Classic")
        );
    }

    #[test]
    fn record_ticket_count_sums_adults_and_children() {
        let record = BookingRecord {
            reference: BookingRef::from("T-1"),
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "1".to_string(),
            ticket_type_id: "Basic".to_string(),
            adult_count: 2,
            child_count: 3,
            visit_date: NaiveDate::from_ymd_opt(2025, 5, 21).unwrap_or_default(),
            total: 4000,
            created_at: Utc::now(),
        };
        assert_eq!(record.ticket_count(), 5);
    }
}
