//! Identity provider integration.
//!
//! All identity storage and credential verification is delegated to an
//! external hosted provider. The [`IdentityProvider`] trait is the
//! capability boundary: handlers and middleware only ever see this trait,
//! so the real client ([`gotrue::GoTrue`]) can be swapped for the fake in
//! tests.

use async_trait::async_trait;

pub mod gotrue;
pub mod model;

#[cfg(any(test, feature = "test-utils"))]
pub mod fake;

use model::{AuthSession, Identity, ProviderError};

/// Operations this system consumes from the hosted identity provider.
///
/// Every call is a single network round trip with no retries; idempotency
/// is the provider's concern.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug {
    /// Create a new account.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, ProviderError>;

    /// Authenticate with email and password.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ProviderError>;

    /// Exchange a refresh token for a new session.
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, ProviderError>;

    /// Resolve a bearer token to the identity it belongs to.
    async fn get_user_by_token(&self, token: &str) -> Result<Identity, ProviderError>;

    /// Admin operation: set the role stored in a user's app metadata.
    async fn update_user_role(&self, user_id: &str, role: &str)
    -> Result<Identity, ProviderError>;
}
