//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(_) => {
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: "validation_error".to_string(),
                        message: self.to_string(),
                    },
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            // Store errors surface as 400 with the raw error text; transient and
            // permanent failures are not distinguished.
            AppError::Db(e) => {
                tracing::error!(error = %e, "store operation failed");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_json() {
        let resp = AppError::Validation("nombre is required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let content_type = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));
    }

    #[test]
    fn db_error_maps_to_400_text() {
        let resp = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
