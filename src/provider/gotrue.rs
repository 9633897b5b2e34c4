//! Reqwest client for a GoTrue-compatible identity provider.
//!
//! Endpoint shapes follow the GoTrue REST API: `/signup`,
//! `/token?grant_type=password`, `/token?grant_type=refresh_token`,
//! `/user` and `/admin/users/{id}`. Client-errors from the provider are
//! surfaced as [`ProviderError::Rejected`] with the provider's own
//! message; anything else is a transport failure.

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::provider::ProviderConfig;

use super::IdentityProvider;
use super::model::{AuthSession, Identity, ProviderError, Session};

#[derive(Debug, Clone)]
pub struct GoTrue {
    base_url: String,
    anon_key: String,
    service_key: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize, Default)]
struct AppMetadata {
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    id: String,
    email: Option<String>,
    #[serde(default)]
    app_metadata: AppMetadata,
}

impl From<RawUser> for Identity {
    fn from(raw: RawUser) -> Self {
        Identity {
            id: raw.id,
            email: raw.email,
            role: raw.app_metadata.role,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
    user: RawUser,
}

impl From<TokenResponse> for AuthSession {
    fn from(token: TokenResponse) -> Self {
        AuthSession {
            user: token.user.into(),
            session: Some(Session {
                access_token: token.access_token,
                refresh_token: token.refresh_token,
                expires_at: token.expires_at,
            }),
        }
    }
}

/// Pull the human-readable message out of a GoTrue error body. The field
/// name varies across endpoints and server versions.
fn error_message(body: &Value) -> String {
    for key in ["msg", "message", "error_description", "error"] {
        if let Some(message) = body.get(key).and_then(Value::as_str) {
            return message.to_string();
        }
    }
    body.to_string()
}

impl GoTrue {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
            service_key: config.service_key,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.into()))?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|err| ProviderError::Transport(err.into()))?;

        if status.is_success() {
            Ok(body)
        } else if status.is_client_error() {
            Err(ProviderError::Rejected(error_message(&body)))
        } else {
            Err(ProviderError::Transport(anyhow!(
                "provider returned {}: {}",
                status,
                error_message(&body)
            )))
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, ProviderError> {
        serde_json::from_value(body)
            .map_err(|err| ProviderError::Transport(anyhow!("unexpected provider payload: {err}")))
    }
}

#[async_trait]
impl IdentityProvider for GoTrue {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, ProviderError> {
        let body = self
            .send(
                self.http
                    .post(self.url("/signup"))
                    .header("apikey", &self.anon_key)
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;

        // With email confirmation enabled the provider returns the bare
        // user record instead of a token payload.
        if body.get("access_token").is_some() {
            let token: TokenResponse = Self::parse(body)?;
            Ok(token.into())
        } else {
            let user: RawUser = Self::parse(body)?;
            Ok(AuthSession {
                user: user.into(),
                session: None,
            })
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ProviderError> {
        let body = self
            .send(
                self.http
                    .post(self.url("/token?grant_type=password"))
                    .header("apikey", &self.anon_key)
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;
        let token: TokenResponse = Self::parse(body)?;
        Ok(token.into())
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, ProviderError> {
        let body = self
            .send(
                self.http
                    .post(self.url("/token?grant_type=refresh_token"))
                    .header("apikey", &self.anon_key)
                    .json(&json!({ "refresh_token": refresh_token })),
            )
            .await?;
        let token: TokenResponse = Self::parse(body)?;
        Ok(token.into())
    }

    async fn get_user_by_token(&self, token: &str) -> Result<Identity, ProviderError> {
        let body = self
            .send(
                self.http
                    .get(self.url("/user"))
                    .header("apikey", &self.anon_key)
                    .bearer_auth(token),
            )
            .await?;
        let user: RawUser = Self::parse(body)?;
        Ok(user.into())
    }

    async fn update_user_role(
        &self,
        user_id: &str,
        role: &str,
    ) -> Result<Identity, ProviderError> {
        let body = self
            .send(
                self.http
                    .put(self.url(&format!("/admin/users/{user_id}")))
                    .header("apikey", &self.service_key)
                    .bearer_auth(&self.service_key)
                    .json(&json!({ "app_metadata": { "role": role } })),
            )
            .await?;
        let user: RawUser = Self::parse(body)?;
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_known_keys() {
        let body = json!({ "msg": "User already registered" });
        assert_eq!(error_message(&body), "User already registered");

        let body = json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" });
        assert_eq!(error_message(&body), "Invalid login credentials");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        let body = json!({ "unexpected": true });
        assert_eq!(error_message(&body), body.to_string());
    }

    #[test]
    fn test_raw_user_maps_metadata_role() {
        let raw: RawUser = serde_json::from_value(json!({
            "id": "7f8a6e42-9b1c-4f16-8a56-2f1f5b9c0d31",
            "email": "user@example.com",
            "app_metadata": { "role": "admin", "provider": "email" }
        }))
        .unwrap();
        let identity: Identity = raw.into();
        assert_eq!(identity.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_raw_user_without_metadata() {
        let raw: RawUser = serde_json::from_value(json!({
            "id": "7f8a6e42-9b1c-4f16-8a56-2f1f5b9c0d31",
            "email": "user@example.com"
        }))
        .unwrap();
        let identity: Identity = raw.into();
        assert_eq!(identity.role, None);
        assert_eq!(identity.role_or_default(), "user");
    }

    #[test]
    fn test_token_response_to_auth_session() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "jwt",
            "refresh_token": "refresh",
            "expires_at": 1735689600,
            "user": { "id": "abc", "email": "user@example.com" }
        }))
        .unwrap();
        let outcome: AuthSession = token.into();
        let session = outcome.session.unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(session.expires_at, Some(1735689600));
    }
}
