use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{Role, User};

/// Registration form contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Turns credentials into an identity.
///
/// Implementations may take arbitrarily long; a network-backed one can replace
/// the stub without callers changing.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User>;

    async fn register(&self, new_user: NewUser) -> Result<User>;

    fn backend_name(&self) -> &'static str;
}

/// Credential-free stub: every call succeeds after a fixed delay.
///
/// Not a security mechanism. The password is ignored and the role is guessed
/// from the email address.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    delay: Duration,
}

impl MockAuthBackend {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<User> {
        debug!("Simulating login round trip ({:?})", self.delay);
        tokio::time::sleep(self.delay).await;

        Ok(User {
            id: "1".to_string(),
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            role: Role::from_email(email),
            phone: None,
            avatar: None,
            is_approved: true,
            created_at: Utc::now(),
        })
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        debug!("Simulating register round trip ({:?})", self.delay);
        tokio::time::sleep(self.delay).await;

        let now = Utc::now();
        Ok(User {
            id: now.timestamp_millis().to_string(),
            is_approved: new_user.role == Role::Renter,
            email: new_user.email,
            name: new_user.name,
            role: new_user.role,
            phone: new_user.phone,
            avatar: new_user.avatar,
            created_at: now,
        })
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
