//! Append-only check-in ledger, deduplicated per booking reference.

use std::sync::Arc;

use chrono::Utc;

use super::BookingStore;
use crate::domain::{BookingRef, CheckInEntry, CheckInOutcome, CheckInStatus};
use crate::error::GatewayError;
use crate::storage::{CHECKIN_PREFIX, StorageMedium, checkin_key};

/// Records guest arrivals under `checkin_<reference>`.
///
/// One key per booking makes the dedup guarantee a property of the medium:
/// the conditional write either lands the entry or loses to the entry that
/// is already there. Two concurrent check-ins for the same booking can
/// never both append, even across gateway processes sharing a medium.
#[derive(Debug, Clone)]
pub struct CheckInLedger {
    medium: Arc<dyn StorageMedium>,
    store: BookingStore,
}

impl CheckInLedger {
    /// Creates a ledger over the given medium and booking store.
    #[must_use]
    pub fn new(medium: Arc<dyn StorageMedium>, store: BookingStore) -> Self {
        Self { medium, store }
    }

    /// Checks a guest in, appending at most one entry per booking.
    ///
    /// Returns [`CheckInStatus::CheckedIn`] with a fresh entry, or
    /// [`CheckInStatus::AlreadyCheckedIn`] with the pre-existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BookingNotFound`] if no booking record
    /// exists for the reference, [`GatewayError::StorageUnavailable`] on
    /// medium failure.
    pub async fn check_in(
        &self,
        reference: &BookingRef,
        operator_id: &str,
    ) -> Result<CheckInOutcome, GatewayError> {
        // Every ledger entry must point at a stored booking.
        let _record = self.store.get(reference).await?;

        let entry = CheckInEntry {
            booking_ref: reference.clone(),
            checked_in_at: Utc::now(),
            operator_id: operator_id.to_string(),
        };
        let value = serde_json::to_string(&entry)
            .map_err(|e| GatewayError::Internal(format!("check-in entry encode: {e}")))?;

        let written = self
            .medium
            .set_if_absent(&checkin_key(reference), &value)
            .await?;
        if written {
            return Ok(CheckInOutcome {
                status: CheckInStatus::CheckedIn,
                entry,
            });
        }

        // Lost the conditional write: surface the entry that got there first.
        let existing = self.entry_for(reference).await?.ok_or_else(|| {
            GatewayError::Internal(format!("ledger entry vanished for {reference}"))
        })?;
        Ok(CheckInOutcome {
            status: CheckInStatus::AlreadyCheckedIn,
            entry: existing,
        })
    }

    /// Loads the ledger entry for a booking, if the guest has arrived.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn entry_for(
        &self,
        reference: &BookingRef,
    ) -> Result<Option<CheckInEntry>, GatewayError> {
        let Some(value) = self.medium.get(&checkin_key(reference)).await? else {
            return Ok(None);
        };
        let entry = serde_json::from_str(&value)
            .map_err(|e| GatewayError::Internal(format!("check-in entry decode: {e}")))?;
        Ok(Some(entry))
    }

    /// Loads every ledger entry.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn list_all(&self) -> Result<Vec<CheckInEntry>, GatewayError> {
        let keys = self.medium.keys_with_prefix(CHECKIN_PREFIX).await?;
        let mut entries = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = self.medium.get(&key).await? {
                let entry = serde_json::from_str(&value)
                    .map_err(|e| GatewayError::Internal(format!("check-in entry decode: {e}")))?;
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
