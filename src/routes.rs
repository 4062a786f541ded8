//! Router construction: the full HTTP surface wired to one AppState.

use crate::docs;
use crate::handlers::{common, florerias, productos};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the service router. Cross-origin requests are allowed from any origin.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(common::greeting))
        .route("/health", get(common::health))
        .route("/version", get(common::version))
        .route("/florerias", get(florerias::list))
        .route(
            "/florerias/:id",
            get(florerias::detail)
                .put(florerias::update)
                .delete(florerias::delete),
        )
        .route("/guardar", post(florerias::create))
        .route("/productos", get(productos::list))
        .route("/apis-docs", get(docs::swagger_ui))
        .route("/apis-docs/openapi.json", get(docs::openapi_json))
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    // Lazy pool: URL is parsed but nothing connects until a query runs, so
    // routes that fail before reaching the store are testable without MySQL.
    fn test_app() -> Router {
        let pool = sqlx::mysql::MySqlPoolOptions::new()
            .connect_lazy("mysql://root@localhost:3306/dreamingflowers_test")
            .expect("pool options");
        app(AppState { pool })
    }

    async fn body_string(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn greeting_at_root() {
        let resp = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp.into_body()).await, "Bienvenidos al servidor");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let v: serde_json::Value = serde_json::from_str(&body_string(resp.into_body()).await).unwrap();
        assert_eq!(v["status"], "ok");
    }

    #[tokio::test]
    async fn guardar_rejects_missing_field_before_touching_the_store() {
        let req = Request::builder()
            .method("POST")
            .uri("/guardar")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"nombre":"El girasol de Benja","ubicacion":"Av 135"}"#))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v: serde_json::Value = serde_json::from_str(&body_string(resp.into_body()).await).unwrap();
        assert_eq!(v["error"]["code"], "validation_error");
        assert!(v["error"]["message"].as_str().unwrap().contains("telefono"));
    }

    #[tokio::test]
    async fn guardar_rejects_blank_field() {
        let req = Request::builder()
            .method("POST")
            .uri("/guardar")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"nombre":"","ubicacion":"Av 135","telefono":"66666666"}"#))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_id_is_a_client_error() {
        let resp = test_app()
            .oneshot(Request::builder().uri("/florerias/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn put_rejects_missing_field() {
        let req = Request::builder()
            .method("PUT")
            .uri("/florerias/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"nombre":"x"}"#))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn docs_page_and_document_are_served() {
        let resp = test_app()
            .oneshot(Request::builder().uri("/apis-docs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp.into_body()).await.contains("swagger-ui"));

        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/apis-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_str(&body_string(resp.into_body()).await).unwrap();
        assert_eq!(doc["info"]["title"], "API de Dreaming Flowers");
    }

    #[tokio::test]
    async fn cors_preflight_is_permitted() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/florerias")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
