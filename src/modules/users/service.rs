use anyhow::anyhow;

use crate::provider::IdentityProvider;
use crate::provider::model::{Identity, ProviderError};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Set the target user's role through the provider's admin interface.
    ///
    /// Any provider failure, including a rejection, surfaces as a 500
    /// with the provider's message; unlike the auth flows there is no
    /// caller mistake the provider could be reporting here.
    pub async fn set_role(
        provider: &dyn IdentityProvider,
        user_id: &str,
        role: &str,
    ) -> Result<Identity, AppError> {
        match provider.update_user_role(user_id, role).await {
            Ok(identity) => Ok(identity),
            Err(ProviderError::Rejected(message)) => Err(AppError::internal(anyhow!("{message}"))),
            Err(ProviderError::Transport(err)) => Err(AppError::internal(anyhow!(
                "Failed to update user role: {err}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::FakeProvider;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_set_role_updates_identity() {
        let provider = FakeProvider::new();
        let identity = provider.seed_account("a@b.com", "Pa$$w0rd", Some("user"));

        let updated = UserService::set_role(&provider, &identity.id, "admin")
            .await
            .unwrap();
        assert_eq!(updated.role.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_provider_rejection_maps_to_500() {
        let provider = FakeProvider::new();
        let err = UserService::set_role(&provider, "missing-id", "admin")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.to_string(), "User not found");
    }
}
