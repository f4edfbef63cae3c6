//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::domain::{EventBus, InventoryRegistry};
use crate::service::BookingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Booking service for all business logic.
    pub booking_service: Arc<BookingService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
    /// Admin ticket inventory.
    pub inventory: Arc<InventoryRegistry>,
    /// Active operator sessions.
    pub sessions: Arc<SessionStore>,
}
