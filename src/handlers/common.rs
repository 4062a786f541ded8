//! Service endpoints outside the catalog: greeting, health, version.

use axum::Json;

pub async fn greeting() -> &'static str {
    "Bienvenidos al servidor"
}

#[derive(serde::Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
