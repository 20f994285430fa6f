//! Bearer token and navigation types.

use serde::{Deserialize, Serialize};

/// Opaque bearer credential proving an authenticated session.
///
/// At most one token is active per client context. The client never
/// inspects the contents; expiry is signaled by the server through 401
/// responses rather than tracked locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Client-side navigation targets signaled by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Landing page after an authentication failure.
    Unauthorized,
    /// User home, shown after logout.
    UserHome,
    /// The event listing.
    Events,
}

impl Destination {
    /// Returns the route path for this destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Unauthorized => "/unauthorized",
            Self::UserHome => "/user",
            Self::Events => "/events",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
