//! Demo routes showing the role gate in action.

use axum::Json;
use axum::extract::Extension;
use serde_json::json;
use tracing::instrument;

use crate::provider::model::Identity;
use crate::response::ApiResponse;

/// Admin-only route
#[utoipa::path(
    get,
    path = "/api/protected/admin-only",
    responses(
        (status = 200, description = "Caller is an admin", body = ApiResponse),
        (status = 401, description = "Missing or invalid token", body = ApiResponse),
        (status = 403, description = "Caller is not an admin", body = ApiResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Protected"
)]
#[instrument]
pub async fn admin_only(Extension(identity): Extension<Identity>) -> Json<ApiResponse> {
    Json(ApiResponse::success(
        "Hello Admin!",
        json!({ "user": identity }),
    ))
}

/// Route open to users and admins
#[utoipa::path(
    get,
    path = "/api/protected/user-or-admin",
    responses(
        (status = 200, description = "Caller holds an accepted role", body = ApiResponse),
        (status = 401, description = "Missing or invalid token", body = ApiResponse),
        (status = 403, description = "Role not allowed", body = ApiResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Protected"
)]
#[instrument]
pub async fn user_or_admin(Extension(identity): Extension<Identity>) -> Json<ApiResponse> {
    Json(ApiResponse::success(
        "Hello User or Admin!",
        json!({ "user": identity }),
    ))
}
