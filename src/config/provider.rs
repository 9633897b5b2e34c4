use std::env;

/// Connection settings for the hosted identity provider.
///
/// The anon key authenticates public operations (sign-up, sign-in,
/// refresh, token introspection); the service key authenticates admin
/// operations and must never reach clients.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub base_url: String,
    pub anon_key: String,
    pub service_key: String,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("GOTRUE_URL").expect("GOTRUE_URL must be set"),
            anon_key: env::var("GOTRUE_ANON_KEY").expect("GOTRUE_ANON_KEY must be set"),
            service_key: env::var("GOTRUE_SERVICE_KEY").expect("GOTRUE_SERVICE_KEY must be set"),
        }
    }
}
