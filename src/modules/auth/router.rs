use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::require_user;
use crate::state::AppState;

use super::controller::{login_user, me, refresh_token, register_user};

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
        .route("/refresh-token", post(refresh_token))
        .route(
            "/me",
            get(me).route_layer(middleware::from_fn_with_state(state, require_user)),
        )
}
