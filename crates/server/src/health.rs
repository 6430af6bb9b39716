//! Liveness endpoint.

use api_types::health::Health;
use axum::Json;

pub const SERVICE_NAME: &str = "bindery-api";

pub async fn get() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
