//! # citypark-gateway
//!
//! REST API and WebSocket gateway for City Park bookings and gate check-ins.
//!
//! This crate prices ticket bookings, records confirmed bookings in a
//! key-value store, keeps an idempotent check-in ledger for the park gate,
//! and serves aggregated reports for the sales team.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── BookingService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     ├── BookingStore / CheckInLedger (store/)
//!     │
//!     └── StorageMedium (storage/) — in-memory or PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod storage;
pub mod store;
pub mod ws;
