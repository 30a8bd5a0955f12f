pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use axum::Router;
use service::ElevatorService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Full HTTP surface, shared by the binary and the integration tests.
pub fn app(service: ElevatorService) -> Router {
    Router::new()
        .merge(handlers::elevator::router())
        .merge(handlers::export::router())
        .merge(handlers::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
