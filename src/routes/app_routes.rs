// src/routes/app_routes.rs

use axum::http::{HeaderValue, Method};
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::contact_handlers::{create_contact_message, list_contact_messages};

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/", get(root))
        .route(
            "/contact",
            post(create_contact_message).get(list_contact_messages),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Health/liveness probe
async fn root() -> Json<Value> {
    Json(json!({ "message": "Portfolio API is running" }))
}

/// Builds the CORS layer from configured origins. A wildcard origin cannot
/// be combined with credentials, so `*` gets a fully permissive layer
/// without them and an explicit origin list enables credentials.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repositories::contact_repository::ContactStore;
    use crate::services::email_service::EmailService;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use mongodb::{options::ClientOptions, Client};
    use std::sync::Arc;
    use tower::ServiceExt;

    // The Mongo driver connects lazily, so no server is needed for routes
    // that never reach the store.
    async fn test_app() -> Router {
        let config = AppConfig {
            mongo_url: "mongodb://127.0.0.1:27017".to_string(),
            db_name: "portfolio_test".to_string(),
            mailgun_api_key: String::new(),
            mailgun_domain: "example.test".to_string(),
            sender_email: "noreply@example.test".to_string(),
            receiver_email: "owner@example.test".to_string(),
            cors_origins: vec!["*".to_string()],
        };

        let options = ClientOptions::parse(&config.mongo_url).await.unwrap();
        let client = Client::with_options(options).unwrap();
        let db = client.database(&config.db_name);

        let state = AppState::new(
            ContactStore::new(&db),
            EmailService::new(&config).unwrap(),
            Arc::new(config),
        );
        create_router(state)
    }

    #[tokio::test]
    async fn health_endpoint_reports_running() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Portfolio API is running");
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_any_store_access() {
        let app = test_app().await;

        let payload =
            r#"{"name":"Ada","email":"not-an-email","subject":"Hello","message":"Hi"}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["errors"]["email"].is_array());
    }
}
