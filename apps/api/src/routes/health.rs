use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the active model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "matcher-api",
        "model": state.config.hf_model,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::inference::testing::stub_client;
    use crate::routes::build_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn health_reports_status_and_model() {
        let state = AppState {
            inference: stub_client("http://127.0.0.1:1/models"),
            config: Config {
                hf_api_key: "test-key".to_string(),
                hf_model: "stub-model".to_string(),
                hf_api_base: "http://127.0.0.1:1/models".to_string(),
                hf_timeout_secs: 5,
                port: 0,
                rust_log: "info".to_string(),
            },
        };
        let app = build_router(state);

        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "stub-model");
    }
}
