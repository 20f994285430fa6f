//! Token storage adapters.
//!
//! The storage port is infallible by contract: a missing or unreadable
//! token reads as absent, and failed writes are logged and dropped rather
//! than propagated. `FileTokenStorage` is the production adapter;
//! `MemoryTokenStorage` backs tests and ephemeral sessions;
//! `UnavailableStorage` models a context with no storage at all.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use marquee_application::ports::TokenStorage;
use marquee_domain::Token;
use tracing::{debug, warn};

/// The single token string, stored at `<data_dir>/marquee/token`.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates a storage over an explicit file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a storage under the platform's user data directory.
    ///
    /// Returns `None` when no data directory exists on this system; the
    /// caller typically falls back to [`UnavailableStorage`].
    #[must_use]
    pub fn in_user_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("marquee").join("token")))
    }

    /// The file this storage reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<Token> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let raw = contents.trim();
                if raw.is_empty() {
                    None
                } else {
                    Some(Token::new(raw))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read token");
                None
            }
        }
    }

    fn store(&self, token: &Token) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "failed to create token directory");
            return;
        }
        if let Err(e) = fs::write(&self.path, token.as_str()) {
            warn!(path = %self.path.display(), error = %e, "failed to write token");
        } else {
            debug!(path = %self.path.display(), "token persisted");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "token removed"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to remove token"),
        }
    }
}

/// In-memory token storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<Token>>,
}

impl MemoryTokenStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<Token> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: &Token) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// Storage for contexts with nowhere to persist a token.
///
/// Reads are always absent and writes are silently dropped, so callers
/// behave as logged out without special-casing the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl TokenStorage for UnavailableStorage {
    fn load(&self) -> Option<Token> {
        None
    }

    fn store(&self, _token: &Token) {}

    fn clear(&self) {}
}
