//! Read-only productos listing. The table schema is owned elsewhere; rows are
//! passed through untouched.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::ProductoStore;
use axum::{extract::State, Json};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/productos",
    tag = "productos",
    responses(
        (status = 200, description = "Listado de productos, estructura según la tabla"),
        (status = 400, description = "Error al consultar productos"),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = ProductoStore::list(&state.pool).await?;
    Ok(Json(rows))
}
