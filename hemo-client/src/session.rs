//! Session cache
//!
//! Tracks who is logged in. The identity is loaded optimistically from
//! durable storage at construction and is stale until the host re-validates
//! it with [`ApiClient::get_current_user`].

use crate::error::{SessionError, SessionResult};
use crate::http::ApiClient;
use crate::storage::{CURRENT_USER_KEY, SessionStore, remove_or_warn, set_or_warn};
use shared::models::{User, UserRole};
use std::sync::{Arc, PoisonError, RwLock};

/// Login state as seen by the host
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// Logged-in identity, mirrored to durable storage
///
/// A credential rejected by the backend is purged from storage by the API
/// layer, but the in-memory identity here stays until [`logout`](Self::logout);
/// hosts re-check and redirect.
#[derive(Debug)]
pub struct SessionCache {
    api: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
    user: RwLock<Option<User>>,
}

impl SessionCache {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        let user = load_cached_user(store.as_ref());
        if let Some(user) = &user {
            tracing::debug!(email = %user.email, role = %user.role, "Restored cached identity");
        }
        Self {
            api,
            store,
            user: RwLock::new(user),
        }
    }

    /// Log in and fetch the full identity
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        self.api.login(email, password).await?;

        let user = match self.api.get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Login succeeded but identity lookup failed");
                return Err(SessionError::UserInfoUnavailable);
            }
        };

        self.cache(user.clone());
        Ok(user)
    }

    /// Create an account and cache the returned identity
    pub async fn register(&self, email: &str, password: &str, role: UserRole) -> SessionResult<User> {
        let user = self.api.register(email, password, role).await?;
        tracing::info!(email = %user.email, role = %user.role, "Registered");
        self.cache(user.clone());
        Ok(user)
    }

    /// Forget the identity and the credential
    pub fn logout(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.api.logout();
        remove_or_warn(self.store.as_ref(), CURRENT_USER_KEY);
        tracing::info!("Logged out");
    }

    /// Cached identity; no network call
    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> SessionState {
        match self.current_user() {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(UserRole::Admin)
    }

    pub fn is_donor(&self) -> bool {
        self.role() == Some(UserRole::Donor)
    }

    pub fn is_receiver(&self) -> bool {
        self.role() == Some(UserRole::Receiver)
    }

    fn role(&self) -> Option<UserRole> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|u| u.role)
    }

    fn cache(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => set_or_warn(self.store.as_ref(), CURRENT_USER_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize identity"),
        }
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }
}

fn load_cached_user(store: &dyn SessionStore) -> Option<User> {
    let json = store.get(CURRENT_USER_KEY)?;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring corrupt cached identity");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::storage::MemoryStore;

    fn user(role: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "email": "a@x.com",
            "role": role,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn cache_with(store: Arc<MemoryStore>) -> SessionCache {
        let api = ApiClient::new(&ClientConfig::default(), store.clone()).unwrap();
        SessionCache::new(Arc::new(api), store)
    }

    #[test]
    fn test_anonymous_by_default() {
        let session = cache_with(Arc::new(MemoryStore::new()));
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_restores_cached_identity() {
        let store = Arc::new(MemoryStore::new());
        let cached = user("recv");
        store
            .set(CURRENT_USER_KEY, &serde_json::to_string(&cached).unwrap())
            .unwrap();

        let session = cache_with(store);
        assert_eq!(session.current_user(), Some(cached));
        assert!(session.is_receiver());
        assert!(!session.is_donor());
        assert_eq!(session.state().user().map(|u| u.role), Some(UserRole::Receiver));
    }

    #[test]
    fn test_corrupt_cache_ignored() {
        let store = Arc::new(MemoryStore::new());
        store.set(CURRENT_USER_KEY, "{not json").unwrap();
        let session = cache_with(store);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(CURRENT_USER_KEY, &serde_json::to_string(&user("admin")).unwrap())
            .unwrap();
        store.set(crate::storage::TOKEN_KEY, "t").unwrap();

        let session = cache_with(store.clone());
        assert!(session.is_admin());

        session.logout();
        assert!(session.current_user().is_none());
        assert!(!store.contains(CURRENT_USER_KEY));
        assert!(!store.contains(crate::storage::TOKEN_KEY));

        // idempotent
        session.logout();
        assert_eq!(session.state(), SessionState::Anonymous);
    }
}
