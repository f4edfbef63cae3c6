//! WebSocket upgrade handler.

use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;

use crate::app_state::AppState;

/// Upgrades an HTTP connection to a WebSocket and hands it to the
/// connection loop with a fresh event bus subscription.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let event_rx = state.event_bus.subscribe();
    ws.on_upgrade(move |socket| super::connection::run_connection(socket, event_rx))
}
