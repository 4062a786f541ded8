//! Wire and row types for the florerias catalog. Productos have no model:
//! their rows pass through as opaque JSON objects.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A floreria row. The primary key is assigned by MySQL (AUTO_INCREMENT) and
/// keeps its `idFlorerias` column name on the wire.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Floreria {
    #[serde(rename = "idFlorerias")]
    #[sqlx(rename = "idFlorerias")]
    pub id: i64,
    #[schema(example = "El girasol de Benja")]
    pub nombre: String,
    #[schema(example = "Av 135")]
    pub ubicacion: String,
    #[schema(example = "66666666")]
    pub telefono: String,
}

/// Create/update body. All fields optional at the serde level so presence can
/// be reported as a 400 instead of a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FloreriaInput {
    #[schema(example = "El girasol de Benja")]
    pub nombre: Option<String>,
    #[schema(example = "Av 135")]
    pub ubicacion: Option<String>,
    #[schema(example = "66666666")]
    pub telefono: Option<String>,
}

/// Input with presence already enforced.
#[derive(Debug)]
pub struct FloreriaFields {
    pub nombre: String,
    pub ubicacion: String,
    pub telefono: String,
}

impl FloreriaInput {
    /// All three fields must be present and non-blank. Any string content is
    /// otherwise accepted; no length or format constraints apply.
    pub fn into_fields(self) -> Result<FloreriaFields, AppError> {
        Ok(FloreriaFields {
            nombre: require("nombre", self.nombre)?,
            ubicacion: require("ubicacion", self.ubicacion)?,
            telefono: require("telefono", self.telefono)?,
        })
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Confirmation returned by the create operation, carrying the id the store
/// assigned so the caller can fetch the new row.
#[derive(Debug, Serialize, ToSchema)]
pub struct FloreriaCreada {
    #[schema(example = "Floreria creada")]
    pub mensaje: String,
    pub id: u64,
}
