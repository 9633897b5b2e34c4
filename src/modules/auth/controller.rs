use axum::Json;
use axum::extract::{Extension, State};
use serde_json::json;
use tracing::instrument;

use crate::provider::model::Identity;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, RefreshTokenRequest, RegisterRequest, SessionResponse, UserResponse};
use super::service::AuthService;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = ApiResponse),
        (status = 400, description = "Validation error or provider rejection", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let outcome = AuthService::register(state.provider.as_ref(), &dto.email, &dto.password).await?;

    Ok(Json(ApiResponse::success(
        "User registered successfully",
        json!({
            "user": UserResponse::from(&outcome.user),
            "session": {
                "access_token": outcome.session.as_ref().map(|s| s.access_token.clone()),
            },
        }),
    )))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse),
        (status = 400, description = "Validation error", body = ApiResponse),
        (status = 401, description = "Invalid email or password", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let outcome = AuthService::login(state.provider.as_ref(), &dto.email, &dto.password).await?;

    Ok(Json(ApiResponse::success(
        "Login successful",
        json!({
            "user": UserResponse::from(&outcome.user),
            "session": outcome.session.as_ref().map(SessionResponse::from),
        }),
    )))
}

/// Exchange a refresh token for a new session
#[utoipa::path(
    post,
    path = "/api/auth/refresh-token",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed successfully", body = ApiResponse),
        (status = 400, description = "Validation error or invalid refresh token", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state))]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let outcome = AuthService::refresh(state.provider.as_ref(), &dto.refresh_token).await?;

    Ok(Json(ApiResponse::success(
        "Token refreshed successfully",
        json!({
            "user": UserResponse::from(&outcome.user),
            "session": outcome.session.as_ref().map(SessionResponse::from),
        }),
    )))
}

/// Current user info, as resolved by the role gate
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = ApiResponse),
        (status = 401, description = "Missing or invalid token", body = ApiResponse),
        (status = 403, description = "Role not allowed", body = ApiResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth"
)]
#[instrument]
pub async fn me(Extension(identity): Extension<Identity>) -> Json<ApiResponse> {
    Json(ApiResponse::success(
        "User info retrieved successfully",
        json!({ "user": identity }),
    ))
}
