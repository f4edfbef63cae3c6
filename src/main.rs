//! citypark-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use citypark_gateway::api;
use citypark_gateway::app_state::AppState;
use citypark_gateway::auth::SessionStore;
use citypark_gateway::config::GatewayConfig;
use citypark_gateway::domain::{EventBus, InventoryItem, InventoryRegistry};
use citypark_gateway::service::BookingService;
use citypark_gateway::storage::StorageMedium;
use citypark_gateway::storage::memory::MemoryMedium;
use citypark_gateway::storage::postgres::PostgresMedium;
use citypark_gateway::store::{BookingStore, CheckInLedger};
use citypark_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting citypark-gateway");

    // Pick the storage medium
    let medium: Arc<dyn StorageMedium> = if config.persistence_enabled {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        let postgres = PostgresMedium::new(pool);
        postgres.ensure_schema().await?;
        tracing::info!("using PostgreSQL storage medium");
        Arc::new(postgres)
    } else {
        tracing::info!("using in-memory storage medium");
        Arc::new(MemoryMedium::new())
    };

    // Build domain layer
    let event_bus = EventBus::new(config.event_bus_capacity);
    let store = BookingStore::new(Arc::clone(&medium));
    let ledger = CheckInLedger::new(Arc::clone(&medium), store.clone());

    // Build service layer
    let booking_service = Arc::new(BookingService::new(
        store,
        ledger,
        event_bus.clone(),
        config.daily_ticket_capacity,
    ));

    // Seed the admin inventory with the standard offerings
    let inventory = Arc::new(InventoryRegistry::new());
    inventory
        .insert(InventoryItem::new("Standard".to_string(), 50, 150))
        .await;
    inventory
        .insert(InventoryItem::new("Premium".to_string(), 100, 75))
        .await;
    inventory
        .insert(InventoryItem::new("VIP".to_string(), 200, 30))
        .await;

    // Build application state
    let app_state = AppState {
        booking_service,
        event_bus,
        inventory,
        sessions: Arc::new(SessionStore::new()),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
