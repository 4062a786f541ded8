//! Floreria CRUD handlers. Each maps to one statement in the store; the
//! `utoipa::path` annotations are the documented contract served at /apis-docs.

use crate::error::{AppError, ErrorBody};
use crate::models::{Floreria, FloreriaCreada, FloreriaInput};
use crate::state::AppState;
use crate::store::FloreriaStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/florerias",
    tag = "florerias",
    responses(
        (status = 200, description = "Listado de florerias", body = [Floreria]),
        (status = 400, description = "Error al consultar el catálogo"),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Floreria>>, AppError> {
    let rows = FloreriaStore::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/florerias/{id}",
    tag = "florerias",
    params(("id" = i64, Path, description = "ID de la floreria")),
    responses(
        (status = 200, description = "Filas que coinciden con el id (0 o 1)", body = [Floreria]),
        (status = 400, description = "Id no numérico o error del almacén"),
    )
)]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Floreria>>, AppError> {
    // A missing id is not 404: the match set is simply empty.
    let rows = FloreriaStore::by_id(&state.pool, id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/guardar",
    tag = "florerias",
    request_body = FloreriaInput,
    responses(
        (status = 201, description = "Floreria creada", body = FloreriaCreada),
        (status = 400, description = "Datos incompletos", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<FloreriaInput>,
) -> Result<(StatusCode, Json<FloreriaCreada>), AppError> {
    let fields = input.into_fields()?;
    let id = FloreriaStore::create(&state.pool, &fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(FloreriaCreada {
            mensaje: "Floreria creada".to_string(),
            id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/florerias/{id}",
    tag = "florerias",
    params(("id" = i64, Path, description = "ID de la floreria")),
    request_body = FloreriaInput,
    responses(
        (status = 200, description = "Floreria actualizada"),
        (status = 400, description = "Datos incompletos o error del almacén", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<FloreriaInput>,
) -> Result<&'static str, AppError> {
    let fields = input.into_fields()?;
    // No existence check: updating an unknown id affects zero rows and still
    // confirms.
    FloreriaStore::update(&state.pool, id, &fields).await?;
    Ok("Florerias actualizadas.")
}

#[utoipa::path(
    delete,
    path = "/florerias/{id}",
    tag = "florerias",
    params(("id" = i64, Path, description = "ID de la floreria")),
    responses(
        (status = 200, description = "Floreria eliminada"),
        (status = 400, description = "Error al eliminar la floreria"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, AppError> {
    FloreriaStore::delete(&state.pool, id).await?;
    Ok("Floreria eliminada correctamente")
}
