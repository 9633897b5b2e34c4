use axum::{Router, middleware, routing::get};

use crate::middleware::role::{require_admin, require_user_or_admin};
use crate::state::AppState;

use super::controller::{admin_only, user_or_admin};

pub fn init_protected_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/admin-only",
            get(admin_only).route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_admin,
            )),
        )
        .route(
            "/user-or-admin",
            get(user_or_admin).route_layer(middleware::from_fn_with_state(
                state,
                require_user_or_admin,
            )),
        )
}
