//! Key-value storage medium behind the booking store and check-in ledger.
//!
//! The core components never touch a concrete store directly; they take a
//! [`StorageMedium`] as a constructor dependency so tests run against the
//! in-memory implementation and production deployments use PostgreSQL.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::BookingRef;
use crate::error::GatewayError;

/// Key prefix for booking records.
pub const BOOKING_PREFIX: &str = "booking_";

/// Key prefix for check-in ledger entries.
pub const CHECKIN_PREFIX: &str = "checkin_";

/// Returns the storage key for a booking record.
#[must_use]
pub fn booking_key(reference: &BookingRef) -> String {
    format!("{BOOKING_PREFIX}{reference}")
}

/// Returns the storage key for a check-in ledger entry.
#[must_use]
pub fn checkin_key(reference: &BookingRef) -> String {
    format!("{CHECKIN_PREFIX}{reference}")
}

/// Durable (or in-memory) key-value medium.
///
/// Values are opaque strings; callers serialize their own records. The
/// one non-obvious member is [`set_if_absent`](StorageMedium::set_if_absent):
/// a conditional write that succeeds at most once per key, which is what
/// makes duplicate-booking rejection and check-in dedup safe when several
/// gateway processes share the same medium.
#[async_trait]
pub trait StorageMedium: Send + Sync + std::fmt::Debug {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] if the medium cannot
    /// be reached.
    async fn get(&self, key: &str) -> Result<Option<String>, GatewayError>;

    /// Writes `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] if the medium cannot
    /// be reached.
    async fn set(&self, key: &str, value: &str) -> Result<(), GatewayError>;

    /// Writes `value` under `key` only if the key does not exist yet.
    ///
    /// Returns `true` if the write happened, `false` if the key was
    /// already present. Atomic with respect to concurrent writers.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] if the medium cannot
    /// be reached.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, GatewayError>;

    /// Enumerates all keys starting with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] if the medium cannot
    /// be reached.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, GatewayError>;
}
