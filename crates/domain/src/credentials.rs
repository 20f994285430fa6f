//! Login and registration credentials.

use serde::Serialize;

/// Email/password pair used to construct login and registration requests.
///
/// Transient by design: serializable for the outbound request body, never
/// deserialized or persisted. The `Debug` impl redacts the password so
/// credentials cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
