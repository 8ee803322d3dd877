//! Application layer: stateful view containers over the domain model and
//! the REST gateway.
//!
//! Each view owns an explicit state container; every mutation goes through
//! a named operation on [`state::AppState`]. There is no ambient global
//! store beyond the gateway-backed client cache.

pub mod config;
pub mod directory;
pub mod error;
pub mod notifications;
pub mod session;
pub mod state;
pub mod views;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global tracing subscriber. Call once from the embedding
/// shell before any other operation.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menuflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application state from the environment.
///
/// Loads `.env` if present, reads the gateway configuration and seeds the
/// local stores with the sample datasets.
pub fn bootstrap() -> state::AppState {
    dotenvy::dotenv().ok();
    let config = config::AppConfig::from_env();
    tracing::info!(gateway_url = %config.gateway_url, "Loaded configuration");
    state::AppState::new(&config)
}
