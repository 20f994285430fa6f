//! Bearer token store.
//!
//! Tracks presence or absence of the session token. There is no expiry
//! bookkeeping: the server signals a stale token with a 401, which clears
//! the store.

use std::sync::Arc;

use marquee_domain::Token;
use tracing::debug;

use crate::ports::TokenStorage;

/// Process-wide token store backed by a storage port.
///
/// Transitions: absent to present on login or registration success,
/// present to absent on logout or any 401 response.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn TokenStorage>,
}

impl TokenStore {
    /// Creates a token store over the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Reads the active token. Never fails; returns `None` when no token
    /// is persisted or the storage is unavailable.
    #[must_use]
    pub fn get(&self) -> Option<Token> {
        self.storage.load()
    }

    /// Persists a new active token.
    pub fn set(&self, token: &Token) {
        debug!("storing session token");
        self.storage.store(token);
    }

    /// Clears the active token.
    pub fn remove(&self) {
        debug!("clearing session token");
        self.storage.clear();
    }

    /// Returns true iff a token is currently persisted.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        token: Mutex<Option<Token>>,
    }

    impl TokenStorage for MemoryStorage {
        fn load(&self) -> Option<Token> {
            self.token.lock().unwrap().clone()
        }

        fn store(&self, token: &Token) {
            *self.token.lock().unwrap() = Some(token.clone());
        }

        fn clear(&self) {
            *self.token.lock().unwrap() = None;
        }
    }

    /// Models storage outside a usable context: reads are absent, writes
    /// are silently dropped.
    struct UnavailableStorage;

    impl TokenStorage for UnavailableStorage {
        fn load(&self) -> Option<Token> {
            None
        }

        fn store(&self, _token: &Token) {}

        fn clear(&self) {}
    }

    #[test]
    fn set_then_get_returns_same_token() {
        let store = TokenStore::new(Arc::new(MemoryStorage::default()));
        let token = Token::new("t-1");

        store.set(&token);
        assert_eq!(store.get(), Some(token.clone()));

        // Stable across repeated reads until removed.
        assert_eq!(store.get(), Some(token));
        store.remove();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn is_logged_in_tracks_presence() {
        let store = TokenStore::new(Arc::new(MemoryStorage::default()));
        assert!(!store.is_logged_in());

        store.set(&Token::new("t-1"));
        assert!(store.is_logged_in());

        store.remove();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn set_replaces_previous_token() {
        let store = TokenStore::new(Arc::new(MemoryStorage::default()));
        store.set(&Token::new("first"));
        store.set(&Token::new("second"));
        assert_eq!(store.get(), Some(Token::new("second")));
    }

    #[test]
    fn unavailable_storage_never_fails() {
        let store = TokenStore::new(Arc::new(UnavailableStorage));
        assert_eq!(store.get(), None);

        store.set(&Token::new("ignored"));
        assert_eq!(store.get(), None);
        assert!(!store.is_logged_in());

        store.remove();
        assert_eq!(store.get(), None);
    }
}
