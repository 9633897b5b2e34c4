use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use chrono::Utc;
use serde_json::json;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::cors::CorsConfig;
use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::protected::router::init_protected_router;
use crate::modules::users::router::init_users_router;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let governor_config = state.rate_limit_config.governor_config();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(health))
        .route("/favicon.ico", get(favicon))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router(state.clone()))
                .nest("/protected", init_protected_router(state.clone()))
                .nest("/users", init_users_router(state.clone()))
                .layer(GovernorLayer {
                    config: governor_config,
                }),
        )
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

/// Health check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is online", body = ApiResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse> {
    let uptime = state.started_at.elapsed().as_secs();
    Json(ApiResponse::success(
        "🚀 Server is online!",
        json!({
            "uptime": format!("{uptime} seconds"),
            "timestamp": Utc::now().format("%d.%m.%Y %H:%M:%S").to_string(),
        }),
    ))
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn route_not_found(uri: Uri) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(format!(
            "The route you are looking for [{}] does not exist...",
            uri.path()
        ))),
    )
}
