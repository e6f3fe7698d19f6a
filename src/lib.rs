//! Rino Rental Sorong backend
//!
//! HTTP API for the rental-car fleet: vehicles (kendaraan), bookings,
//! gallery photos, financial reports, admin sessions and statistics. The
//! router is exposed so integration tests and the conformance checker can
//! run against the real application in-process.

pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Build the complete application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::create_api_router())
        .fallback(api::route_not_found)
        .layer(cors_middleware(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
