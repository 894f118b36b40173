use axum::Json;

use crate::serializers::health::Health;

pub async fn health() -> Json<Health> {
    Json(Health { ok: true, service: "consistency-core" })
}
