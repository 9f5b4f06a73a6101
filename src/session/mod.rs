pub mod auth;
pub mod store;

pub use auth::{AuthBackend, MockAuthBackend, NewUser};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Role, User};

/// Fixed key the signed-in identity is stored under
pub const SESSION_KEY: &str = "user";

/// The current identity, passed explicitly to whatever needs it.
///
/// Starts out loading; call [`Session::restore`] to read back a stored
/// identity. Each login or register overwrites the stored identity, so the
/// last completed call wins.
pub struct Session {
    backend: Box<dyn AuthBackend>,
    store: Box<dyn KeyValueStore>,
    user: Option<User>,
    loading: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("backend", &self.backend.backend_name())
            .field("user", &self.user)
            .field("loading", &self.loading)
            .finish()
    }
}

impl Session {
    pub fn new(backend: impl AuthBackend + 'static, store: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            store: Box::new(store),
            user: None,
            loading: true,
        }
    }

    /// Read the stored identity back. A record that fails to parse leaves the
    /// session signed out.
    pub async fn restore(&mut self) -> Result<Option<&User>> {
        self.loading = true;
        let stored = self.store.get(SESSION_KEY).await;
        self.loading = false;

        self.user = match stored? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, role = ?user.role, "Restored session");
                    Some(user)
                }
                Err(err) => {
                    warn!("Ignoring malformed stored session: {}", err);
                    None
                }
            },
            None => None,
        };
        Ok(self.user.as_ref())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        self.loading = true;
        let result = self.backend.login(email, password).await;
        self.loading = false;

        let user = result?;
        info!(user_id = %user.id, role = ?user.role, "Logged in");
        self.persist(user).await
    }

    pub async fn register(&mut self, new_user: NewUser) -> Result<&User> {
        self.loading = true;
        let result = self.backend.register(new_user).await;
        self.loading = false;

        let user = result?;
        info!(
            user_id = %user.id,
            role = ?user.role,
            approved = user.is_approved,
            "Registered"
        );
        self.persist(user).await
    }

    pub async fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Logged out");
        }
        self.store.remove(SESSION_KEY).await
    }

    async fn persist(&mut self, user: User) -> Result<&User> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(SESSION_KEY, &raw).await?;
        Ok(&*self.user.insert(user))
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
