mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use authgate::provider::fake::FakeProvider;
use common::{admin_identity, body_json, json_request, json_request_with_token, test_app, user_identity};

#[tokio::test]
async fn test_admin_can_assign_role() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("admin-token", admin_identity());
    let target = provider.seed_account("target@test.com", "Pa$$w0rd", Some("user"));
    let app = test_app(provider.clone());

    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({ "userId": target.id.clone(), "role": "admin" }),
        "admin-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("User role updated successfully"));
    assert_eq!(body["data"]["user"]["role"], json!("admin"));

    assert_eq!(
        provider.role_updates(),
        vec![(target.id, "admin".to_string())]
    );
}

#[tokio::test]
async fn test_unknown_role_is_rejected_without_provider_call() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("admin-token", admin_identity());
    let app = test_app(provider.clone());

    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({
            "userId": "11111111-1111-4111-8111-111111111111",
            "role": "superuser"
        }),
        "admin-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Invalid role"));
    assert!(provider.role_updates().is_empty());
}

#[tokio::test]
async fn test_malformed_user_id_is_400() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("admin-token", admin_identity());
    let app = test_app(provider.clone());

    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({ "userId": "not-a-uuid", "role": "admin" }),
        "admin-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("userId must be a valid UUID."));
    assert!(provider.role_updates().is_empty());
}

#[tokio::test]
async fn test_empty_role_is_400() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("admin-token", admin_identity());
    let app = test_app(provider);

    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({
            "userId": "11111111-1111-4111-8111-111111111111",
            "role": ""
        }),
        "admin-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("role cannot be empty."));
}

#[tokio::test]
async fn test_malformed_body_is_rejected_before_role_gate() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("user-token", user_identity());
    let app = test_app(provider.clone());

    // A non-admin caller with a malformed body gets the validation 400,
    // not the gate's 403.
    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({ "userId": "not-a-uuid", "role": "admin" }),
        "user-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("userId must be a valid UUID."));
}

#[tokio::test]
async fn test_malformed_body_without_token_is_400() {
    let app = test_app(Arc::new(FakeProvider::new()));

    let request = json_request(
        "PATCH",
        "/api/users/set-role",
        json!({ "userId": "not-a-uuid", "role": "admin" }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("userId must be a valid UUID."));
}

#[tokio::test]
async fn test_non_admin_caller_is_403() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("user-token", user_identity());
    let app = test_app(provider.clone());

    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({
            "userId": "11111111-1111-4111-8111-111111111111",
            "role": "admin"
        }),
        "user-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(provider.role_updates().is_empty());
}

#[tokio::test]
async fn test_unauthenticated_caller_is_401() {
    let app = test_app(Arc::new(FakeProvider::new()));

    let request = json_request(
        "PATCH",
        "/api/users/set-role",
        json!({
            "userId": "11111111-1111-4111-8111-111111111111",
            "role": "admin"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_provider_rejection_surfaces_as_500() {
    let provider = Arc::new(FakeProvider::new());
    provider.seed_token("admin-token", admin_identity());
    let app = test_app(provider);

    // Valid UUID, but the provider has no such user.
    let request = json_request_with_token(
        "PATCH",
        "/api/users/set-role",
        json!({
            "userId": "99999999-9999-4999-8999-999999999999",
            "role": "admin"
        }),
        "admin-token",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("User not found"));
}
