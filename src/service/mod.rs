//! Service layer: booking orchestration over store, ledger, and event bus.

pub mod booking_service;

pub use booking_service::BookingService;
