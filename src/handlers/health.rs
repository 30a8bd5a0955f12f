use axum::{response::Json, routing::get, Router};
use serde_json::json;
use crate::service::ElevatorService;

pub fn router() -> Router<ElevatorService> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Elevator events API is healthy"
    }))
}
