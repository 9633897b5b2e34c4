use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;

use authgate::config::cors::CorsConfig;
use authgate::config::rate_limit::RateLimitConfig;
use authgate::provider::fake::FakeProvider;
use authgate::provider::model::Identity;
use authgate::router::init_router;
use authgate::state::AppState;

/// Build the app against a fake provider, with rate limits high enough
/// to stay out of the way.
pub fn test_app(provider: Arc<FakeProvider>) -> axum::Router {
    test_app_with_rate_limit(provider, RateLimitConfig::default())
}

pub fn test_app_with_rate_limit(
    provider: Arc<FakeProvider>,
    rate_limit_config: RateLimitConfig,
) -> axum::Router {
    let state = AppState {
        provider,
        cors_config: CorsConfig::default(),
        rate_limit_config,
        started_at: Instant::now(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn user_identity() -> Identity {
    Identity {
        id: "11111111-1111-4111-8111-111111111111".to_string(),
        email: Some("user@test.com".to_string()),
        role: Some("user".to_string()),
    }
}

#[allow(dead_code)]
pub fn admin_identity() -> Identity {
    Identity {
        id: "22222222-2222-4222-8222-222222222222".to_string(),
        email: Some("admin@test.com".to_string()),
        role: Some("admin".to_string()),
    }
}

/// JSON request with the client-ip header the rate limiter keys on.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", "192.168.1.10")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn json_request_with_token(
    method: &str,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", "192.168.1.10")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-forwarded-for", "192.168.1.10");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
