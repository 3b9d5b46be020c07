pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::skills::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills/extract", post(handlers::handle_extract))
        .route("/api/v1/skills/taxonomy", get(handlers::handle_taxonomy))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, SkillBackend};
    use crate::skills::backends::KeywordSkillExtractor;
    use crate::skills::taxonomy::entries;

    fn test_state(max_text_chars: usize) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                skill_backend: SkillBackend::Keyword,
                anthropic_api_key: None,
                anthropic_api_url: None,
                skills_service_url: None,
                max_text_chars,
            },
            extractor: Arc::new(KeywordSkillExtractor),
        }
    }

    async fn post_extract(app: Router, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/skills/extract")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let app = build_router(test_state(100));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "keyword");
    }

    #[tokio::test]
    async fn test_extract_returns_ranked_skills() {
        let app = build_router(test_state(1000));
        let response = post_extract(app, json!({"text": "python python python and rust"})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({
                "skills": [
                    {"name": "Python", "value": 100, "category": "language"},
                    {"name": "Rust", "value": 60, "category": "language"}
                ],
                "confidence": 0.33
            })
        );
    }

    #[tokio::test]
    async fn test_extract_blank_text_is_empty_result() {
        let app = build_router(test_state(1000));
        let response = post_extract(app, json!({"text": "   "})).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"skills": [], "confidence": 0.0})
        );
    }

    #[tokio::test]
    async fn test_extract_rejects_oversized_text() {
        let app = build_router(test_state(10));
        let response = post_extract(app, json!({"text": "rust ".repeat(5)})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = build_router(test_state(100));
        let response = app
            .oneshot(Request::builder().uri("/api/v1/roadmaps").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_taxonomy_lists_every_entry() {
        let app = build_router(test_state(100));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/skills/taxonomy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let listed = body.as_array().unwrap();
        assert_eq!(listed.len(), entries().len());
        assert_eq!(listed[0]["name"], "Python");
        assert_eq!(listed[0]["category"], "language");
        assert!(listed[0]["keywords"].as_array().unwrap().contains(&json!("django")));
    }
}
