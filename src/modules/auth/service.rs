use anyhow::anyhow;

use crate::provider::IdentityProvider;
use crate::provider::model::{AuthSession, ProviderError};
use crate::utils::errors::AppError;

/// Thin orchestration over the identity provider: one call per operation,
/// provider rejections mapped to the operation's client-error status,
/// everything else to a wrapped 500.
pub struct AuthService;

impl AuthService {
    pub async fn register(
        provider: &dyn IdentityProvider,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AppError> {
        match provider.sign_up(email, password).await {
            Ok(outcome) => Ok(outcome),
            Err(ProviderError::Rejected(message)) => Err(AppError::bad_request(message)),
            Err(ProviderError::Transport(err)) => {
                Err(AppError::internal(anyhow!("Failed to register user: {err}")))
            }
        }
    }

    pub async fn login(
        provider: &dyn IdentityProvider,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AppError> {
        match provider.sign_in_with_password(email, password).await {
            Ok(outcome) => Ok(outcome),
            Err(ProviderError::Rejected(message)) => Err(AppError::unauthorized(message)),
            Err(ProviderError::Transport(err)) => {
                Err(AppError::internal(anyhow!("Failed to login user: {err}")))
            }
        }
    }

    pub async fn refresh(
        provider: &dyn IdentityProvider,
        refresh_token: &str,
    ) -> Result<AuthSession, AppError> {
        match provider.refresh_session(refresh_token).await {
            Ok(outcome) => Ok(outcome),
            Err(ProviderError::Rejected(message)) => Err(AppError::bad_request(message)),
            Err(ProviderError::Transport(err)) => Err(AppError::internal(anyhow!(
                "Failed to refresh session: {err}"
            ))),
        }
    }
}
