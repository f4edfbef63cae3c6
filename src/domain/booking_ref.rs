//! Type-safe booking reference.
//!
//! [`BookingRef`] is a newtype wrapper around the opaque payment-provider
//! reference string. The provider assigns it on a successful charge and it
//! doubles as the primary key of a booking record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a booking.
///
/// Wraps the reference string returned by the payment provider. Assigned
/// once at payment confirmation and immutable thereafter. Used as the
/// storage key for booking records and check-in ledger entries, as the
/// event discriminator, and as the WebSocket subscription target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct BookingRef(String);

impl BookingRef {
    /// Creates a `BookingRef` from a provider reference string.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookingRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl From<String> for BookingRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let reference = BookingRef::from("PSK-8F3A");
        assert_eq!(format!("{reference}"), "PSK-8F3A");
        assert_eq!(reference.as_str(), "PSK-8F3A");
    }

    #[test]
    fn serde_round_trip() {
        let reference = BookingRef::from("T-REF-001");
        let Ok(json) = serde_json::to_string(&reference) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"T-REF-001\"");
        let Ok(back) = serde_json::from_str::<BookingRef>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(reference, back);
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let reference = BookingRef::from("T-1");
        let mut map = HashMap::new();
        map.insert(reference.clone(), "test");
        assert_eq!(map.get(&reference), Some(&"test"));
    }
}
