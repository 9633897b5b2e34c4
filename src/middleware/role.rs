//! Role-based authorization middleware.
//!
//! [`require_roles`] resolves the request's bearer token to an identity
//! through the hosted provider and checks the identity's role against the
//! route's allowed set. On success the identity is attached to the
//! request so handlers can read it via `Extension<Identity>`.
//!
//! Every check re-resolves the token against the provider; nothing is
//! cached, so a revoked token or changed role takes effect on the next
//! request at the cost of one remote round trip per protected call.

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::modules::users::model::Role;
use crate::provider::model::ProviderError;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware function that authorizes the request if the bearer token
/// resolves to an identity whose role is in `allowed_roles`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected_routes = Router::new()
///     .route("/admin-only", get(admin_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    allowed_roles: Vec<Role>,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = bearer_token(auth_header).ok_or_else(|| AppError::unauthorized("Missing token"))?;

    let identity = match state.provider.get_user_by_token(token).await {
        Ok(identity) => identity,
        Err(ProviderError::Rejected(_)) => {
            return Err(AppError::unauthorized("Invalid token or user not found"));
        }
        Err(ProviderError::Transport(err)) => {
            return Err(AppError::internal(anyhow!("Error checking user role: {err}")));
        }
    };

    // Identities without a role are treated as plain users, which makes
    // this branch unreachable; kept so that changing the default cannot
    // silently grant access to role-less identities.
    let role = identity.role_or_default();
    if role.is_empty() {
        return Err(AppError::forbidden("No role assigned to the user"));
    }

    if !allowed_roles.iter().any(|allowed| allowed.as_str() == role) {
        return Err(AppError::forbidden("Access denied"));
    }

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// The token is the second whitespace-delimited segment of the header,
/// so both `Bearer <token>` and any other scheme prefix are accepted.
fn bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .split_whitespace()
        .nth(1)
        .filter(|token| !token.is_empty())
}

/// Admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Routes open to plain users.
pub async fn require_user(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![Role::User]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Routes open to any authenticated role.
pub async fn require_user_or_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, vec![Role::User, Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
