//! Authentication module.
//!
//! Provides the token store: presence-only bearer token management over a
//! substitutable storage port.

mod token_store;

pub use token_store::TokenStore;
