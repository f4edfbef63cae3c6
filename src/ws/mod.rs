//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` streams [`crate::domain::GateEvent`]s
//! to dashboard clients so check-in counters update live without polling.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
