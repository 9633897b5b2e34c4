//! Data returned by the identity provider.
//!
//! Identities and sessions are owned and persisted by the provider; this
//! system only passes them through to callers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to identities the provider knows nothing about.
pub const DEFAULT_ROLE: &str = "user";

/// A user record as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    /// Opaque provider-assigned identifier.
    pub id: String,
    pub email: Option<String>,
    /// Role stored in the provider's app metadata, if any.
    pub role: Option<String>,
}

impl Identity {
    /// The effective role, defaulting to `"user"` when the provider has
    /// no role recorded for this identity.
    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

/// A session issued by the provider on login, register or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<i64>,
}

/// Outcome of a provider operation that authenticates an identity.
///
/// Sign-up may return no session when the provider requires email
/// confirmation before issuing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user: Identity,
    pub session: Option<Session>,
}

/// Failure reported by the identity provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider processed the request and rejected it (bad
    /// credentials, duplicate account, unknown token, ...).
    #[error("{0}")]
    Rejected(String),
    /// The provider could not be reached or replied with something
    /// unexpected.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
