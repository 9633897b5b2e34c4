//! In-memory identity provider for tests.
//!
//! Behaves like the hosted provider for the flows this system exercises:
//! accounts can be seeded or registered, bearer tokens resolve to seeded
//! identities, and admin role updates are recorded so tests can assert
//! whether the provider was called.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use uuid::Uuid;

use super::IdentityProvider;
use super::model::{AuthSession, Identity, ProviderError, Session};

const FAKE_EXPIRES_AT: i64 = 4_102_444_800;

#[derive(Debug)]
struct Account {
    password: String,
    id: String,
}

#[derive(Debug, Default)]
pub struct FakeProvider {
    accounts: Mutex<HashMap<String, Account>>,
    users: Mutex<HashMap<String, Identity>>,
    tokens: Mutex<HashMap<String, String>>,
    refresh_tokens: Mutex<HashMap<String, String>>,
    role_updates: Mutex<Vec<(String, String)>>,
    fail_transport: AtomicBool,
    counter: AtomicU64,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a bearer token directly to an identity, as if the provider had
    /// issued it earlier.
    pub fn seed_token(&self, token: &str, identity: Identity) {
        self.users
            .lock()
            .unwrap()
            .insert(identity.id.clone(), identity.clone());
        self.tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), identity.id);
    }

    /// Register an account the fake will accept credentials for.
    pub fn seed_account(&self, email: &str, password: &str, role: Option<&str>) -> Identity {
        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            email: Some(email.to_string()),
            role: role.map(str::to_string),
        };
        self.accounts.lock().unwrap().insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                id: identity.id.clone(),
            },
        );
        self.users
            .lock()
            .unwrap()
            .insert(identity.id.clone(), identity.clone());
        identity
    }

    /// Make every subsequent call fail as if the provider were down.
    pub fn fail_with_transport_errors(&self) {
        self.fail_transport.store(true, Ordering::SeqCst);
    }

    /// The `(user_id, role)` pairs passed to [`update_user_role`] so far.
    ///
    /// [`update_user_role`]: IdentityProvider::update_user_role
    pub fn role_updates(&self) -> Vec<(String, String)> {
        self.role_updates.lock().unwrap().clone()
    }

    fn check_transport(&self) -> Result<(), ProviderError> {
        if self.fail_transport.load(Ordering::SeqCst) {
            return Err(ProviderError::Transport(anyhow!("connection refused")));
        }
        Ok(())
    }

    fn issue_session(&self, user_id: &str) -> Session {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let access_token = format!("access-token-{n}");
        let refresh_token = format!("refresh-token-{n}");
        self.tokens
            .lock()
            .unwrap()
            .insert(access_token.clone(), user_id.to_string());
        self.refresh_tokens
            .lock()
            .unwrap()
            .insert(refresh_token.clone(), user_id.to_string());
        Session {
            access_token,
            refresh_token: Some(refresh_token),
            expires_at: Some(FAKE_EXPIRES_AT),
        }
    }

    fn identity(&self, user_id: &str) -> Option<Identity> {
        self.users.lock().unwrap().get(user_id).cloned()
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, ProviderError> {
        self.check_transport()?;
        if self.accounts.lock().unwrap().contains_key(email) {
            return Err(ProviderError::Rejected(
                "User already registered".to_string(),
            ));
        }
        let identity = self.seed_account(email, password, None);
        let session = self.issue_session(&identity.id);
        Ok(AuthSession {
            user: identity,
            session: Some(session),
        })
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ProviderError> {
        self.check_transport()?;
        let user_id = {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(email) {
                Some(account) if account.password == password => account.id.clone(),
                _ => {
                    return Err(ProviderError::Rejected(
                        "Invalid login credentials".to_string(),
                    ));
                }
            }
        };
        let session = self.issue_session(&user_id);
        Ok(AuthSession {
            user: self.identity(&user_id).expect("account without identity"),
            session: Some(session),
        })
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, ProviderError> {
        self.check_transport()?;
        let user_id = self
            .refresh_tokens
            .lock()
            .unwrap()
            .get(refresh_token)
            .cloned()
            .ok_or_else(|| ProviderError::Rejected("Invalid Refresh Token".to_string()))?;
        let session = self.issue_session(&user_id);
        Ok(AuthSession {
            user: self.identity(&user_id).expect("session without identity"),
            session: Some(session),
        })
    }

    async fn get_user_by_token(&self, token: &str) -> Result<Identity, ProviderError> {
        self.check_transport()?;
        let user_id = self
            .tokens
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ProviderError::Rejected("invalid JWT".to_string()))?;
        self.identity(&user_id)
            .ok_or_else(|| ProviderError::Rejected("User not found".to_string()))
    }

    async fn update_user_role(
        &self,
        user_id: &str,
        role: &str,
    ) -> Result<Identity, ProviderError> {
        self.check_transport()?;
        self.role_updates
            .lock()
            .unwrap()
            .push((user_id.to_string(), role.to_string()));
        let mut users = self.users.lock().unwrap();
        let identity = users
            .get_mut(user_id)
            .ok_or_else(|| ProviderError::Rejected("User not found".to_string()))?;
        identity.role = Some(role.to_string());
        Ok(identity.clone())
    }
}
