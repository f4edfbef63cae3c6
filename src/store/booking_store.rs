//! Booking record store keyed by payment reference.

use std::sync::Arc;

use crate::domain::{BookingRecord, BookingRef};
use crate::error::GatewayError;
use crate::storage::{BOOKING_PREFIX, StorageMedium, booking_key};

/// Persists [`BookingRecord`]s in the key-value medium under
/// `booking_<reference>`.
///
/// Records are written at most once per reference; the conditional write
/// in [`put`](BookingStore::put) makes duplicate confirmations a no-op
/// failure instead of an overwrite.
#[derive(Debug, Clone)]
pub struct BookingStore {
    medium: Arc<dyn StorageMedium>,
}

impl BookingStore {
    /// Creates a store over the given medium.
    #[must_use]
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Stores a new booking record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DuplicateBooking`] if a record with the
    /// same reference already exists (the existing record is untouched),
    /// [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn put(&self, record: &BookingRecord) -> Result<(), GatewayError> {
        let value = serde_json::to_string(record)
            .map_err(|e| GatewayError::Internal(format!("booking record encode: {e}")))?;
        let written = self
            .medium
            .set_if_absent(&booking_key(&record.reference), &value)
            .await?;
        if !written {
            return Err(GatewayError::DuplicateBooking(record.reference.clone()));
        }
        Ok(())
    }

    /// Loads the booking record for a payment reference.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BookingNotFound`] if no record exists,
    /// [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn get(&self, reference: &BookingRef) -> Result<BookingRecord, GatewayError> {
        let value = self
            .medium
            .get(&booking_key(reference))
            .await?
            .ok_or_else(|| GatewayError::BookingNotFound(reference.clone()))?;
        serde_json::from_str(&value)
            .map_err(|e| GatewayError::Internal(format!("booking record decode: {e}")))
    }

    /// Loads every stored booking record. Order follows key enumeration
    /// and is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn list_all(&self) -> Result<Vec<BookingRecord>, GatewayError> {
        let keys = self.medium.keys_with_prefix(BOOKING_PREFIX).await?;
        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = self.medium.get(&key).await? {
                let record = serde_json::from_str(&value)
                    .map_err(|e| GatewayError::Internal(format!("booking record decode: {e}")))?;
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryMedium;
    use chrono::{NaiveDate, Utc};

    fn make_store() -> BookingStore {
        BookingStore::new(Arc::new(MemoryMedium::new()))
    }

    fn make_record(reference: &str) -> BookingRecord {
        BookingRecord {
            reference: BookingRef::from(reference),
            full_name: "James Wilson".to_string(),
            email: "james.wilson@example.com".to_string(),
            phone: "+234 801 234 5678".to_string(),
            ticket_type_id: "Classic".to_string(),
            adult_count: 2,
            child_count: 1,
            visit_date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap_or_default(),
            total: 8500,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = make_store();
        let record = make_record("T-1");

        let Ok(()) = store.put(&record).await else {
            panic!("put failed");
        };
        let Ok(loaded) = store.get(&record.reference).await else {
            panic!("get failed");
        };
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn duplicate_put_fails_and_preserves_original() {
        let store = make_store();
        let original = make_record("T-1");
        let Ok(()) = store.put(&original).await else {
            panic!("put failed");
        };

        let mut imposter = make_record("T-1");
        imposter.full_name = "Someone Else".to_string();
        let Err(GatewayError::DuplicateBooking(reference)) = store.put(&imposter).await else {
            panic!("expected DuplicateBooking");
        };
        assert_eq!(reference.as_str(), "T-1");

        let Ok(stored) = store.get(&original.reference).await else {
            panic!("get failed");
        };
        assert_eq!(stored.full_name, "James Wilson");
    }

    #[tokio::test]
    async fn get_missing_reference_fails() {
        let store = make_store();
        let Err(GatewayError::BookingNotFound(_)) = store.get(&BookingRef::from("NOPE")).await
        else {
            panic!("expected BookingNotFound");
        };
    }

    #[tokio::test]
    async fn list_all_returns_every_record() {
        let store = make_store();
        for reference in ["T-1", "T-2", "T-3"] {
            let Ok(()) = store.put(&make_record(reference)).await else {
                panic!("put failed");
            };
        }

        let Ok(records) = store.list_all().await else {
            panic!("list failed");
        };
        assert_eq!(records.len(), 3);
    }
}
