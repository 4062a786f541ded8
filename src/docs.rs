//! OpenAPI document and the interactive viewer served at /apis-docs.

use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::models::{Floreria, FloreriaCreada, FloreriaInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Dreaming Flowers",
        description = "API de florerias",
    ),
    paths(
        crate::handlers::florerias::list,
        crate::handlers::florerias::detail,
        crate::handlers::florerias::create,
        crate::handlers::florerias::update,
        crate::handlers::florerias::delete,
        crate::handlers::productos::list,
    ),
    components(schemas(Floreria, FloreriaInput, FloreriaCreada, ErrorBody, ErrorDetail)),
    tags(
        (name = "florerias", description = "API del catálogo de florerias"),
        (name = "productos", description = "Listado de productos, solo lectura"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI shell pointing at the served document.
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8"/>
  <title>API de Dreaming Flowers</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/apis-docs/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;
