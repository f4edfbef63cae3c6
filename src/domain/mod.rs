//! Domain layer: core ticketing types, catalog, events, and aggregation.
//!
//! This module contains the server-side domain model: booking identity,
//! the ticket catalog with its pricing calculator, check-in entries, the
//! event bus for broadcasting state changes, the admin inventory registry,
//! and the pure report reducers.

pub mod booking;
pub mod booking_ref;
pub mod catalog;
pub mod checkin;
pub mod event;
pub mod event_bus;
pub mod inventory;
pub mod reports;

pub use booking::{BookingRecord, BookingRequest, PaymentCharge, PaymentConfirmation};
pub use booking_ref::BookingRef;
pub use catalog::{Catalog, TicketOffering};
pub use checkin::{CheckInEntry, CheckInOutcome, CheckInStatus, ScanResult};
pub use event::GateEvent;
pub use event_bus::EventBus;
pub use inventory::{InventoryItem, InventoryPatch, InventoryRegistry, InventoryTotals};
