//! Record stores over the key-value medium.
//!
//! [`BookingStore`] holds the immutable booking records keyed by payment
//! reference; [`CheckInLedger`] is the append-only, deduplicated log of
//! guest arrivals.

pub mod booking_store;
pub mod ledger;

pub use booking_store::BookingStore;
pub use ledger::CheckInLedger;
