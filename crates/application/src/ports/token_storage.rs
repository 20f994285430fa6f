//! Token storage port.

use marquee_domain::Token;

/// Port for persisting the bearer token.
///
/// The contract is deliberately infallible: `load` returns `None` when no
/// token exists or the storage is unavailable, and `store`/`clear` are
/// no-ops on an unavailable storage. Adapters log failures instead of
/// propagating them, so callers never have to handle storage errors.
pub trait TokenStorage: Send + Sync {
    /// Reads the persisted token, if any.
    fn load(&self) -> Option<Token>;

    /// Persists the token, replacing any previous one.
    fn store(&self, token: &Token);

    /// Removes the persisted token.
    fn clear(&self);
}
