use axum::Json;
use axum::extract::State;
use serde_json::json;
use tracing::instrument;

use crate::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Role, SetRoleRequest};
use super::service::UserService;

/// Assign a role to a user
#[utoipa::path(
    patch,
    path = "/api/users/set-role",
    request_body = SetRoleRequest,
    responses(
        (status = 200, description = "User role updated successfully", body = ApiResponse),
        (status = 400, description = "Validation error or unknown role", body = ApiResponse),
        (status = 401, description = "Missing or invalid token", body = ApiResponse),
        (status = 403, description = "Caller is not an admin", body = ApiResponse),
        (status = 500, description = "Provider error", body = ApiResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn set_user_role(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SetRoleRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    if Role::parse(&dto.role).is_none() {
        return Err(AppError::bad_request("Invalid role"));
    }

    let identity = UserService::set_role(state.provider.as_ref(), &dto.user_id, &dto.role).await?;

    Ok(Json(ApiResponse::success(
        "User role updated successfully",
        json!({ "user": identity }),
    )))
}
