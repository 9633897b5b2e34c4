use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower_governor::GovernorError;
use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

use crate::response::ApiResponse;

/// Rate limit configuration for the API.
///
/// One budget of `max_requests` per client IP per `window_secs` window,
/// applied to everything under `/api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 15 * 60,
            max_requests: 200,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15 * 60),
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
        }
    }

    /// Create the governor config backing the `/api` rate limit layer.
    pub fn governor_config(
        &self,
    ) -> Arc<GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware>> {
        let period = Duration::from_secs(self.window_secs) / self.max_requests.max(1);
        Arc::new(
            GovernorConfigBuilder::default()
                .period(period)
                .burst_size(self.max_requests.max(1))
                .key_extractor(SmartIpKeyExtractor)
                .error_handler(rate_limit_error_handler)
                .finish()
                .expect("Failed to build rate limiter config"),
        )
    }
}

fn rate_limit_error_handler(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiResponse::error(
                "Too many requests, please try again later.",
            )),
        )
            .into_response(),
        GovernorError::UnableToExtractKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(
                "Unable to identify client for rate limiting",
            )),
        )
            .into_response(),
        GovernorError::Other { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Rate limiter failure")),
        )
            .into_response(),
    }
}
