use std::sync::Arc;
use std::time::Instant;

use crate::config::cors::CorsConfig;
use crate::config::provider::ProviderConfig;
use crate::config::rate_limit::RateLimitConfig;
use crate::provider::IdentityProvider;
use crate::provider::gotrue::GoTrue;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Handle to the hosted identity provider; the only stateful
    /// collaborator, shared by the role gate and all handlers.
    pub provider: Arc<dyn IdentityProvider>,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub started_at: Instant,
}

pub fn init_app_state() -> AppState {
    AppState {
        provider: Arc::new(GoTrue::new(ProviderConfig::from_env())),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        started_at: Instant::now(),
    }
}
