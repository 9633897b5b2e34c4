use axum::{Router, middleware, routing::patch};

use crate::middleware::role::require_admin;
use crate::state::AppState;
use crate::validator::validate_body;

use super::controller::set_user_role;
use super::model::SetRoleRequest;

pub fn init_users_router(state: AppState) -> Router<AppState> {
    // The validation layer is added last so it runs first: a malformed
    // body is rejected with 400 before the admin gate resolves the caller.
    Router::new().route(
        "/set-role",
        patch(set_user_role)
            .route_layer(middleware::from_fn_with_state(state, require_admin))
            .route_layer(middleware::from_fn(validate_body::<SetRoleRequest>)),
    )
}
