use axum::{Router, routing::{get, post}};
use crate::views::{consistency::consistency, health::health, page::index};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health))
        .route("/api/consistency", post(consistency))
}
