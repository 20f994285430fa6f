//! Login and registration pages.

use std::sync::Arc;

use marquee_domain::{Credentials, Destination, PageState};

use crate::gateway::Gateway;
use crate::ports::HttpClient;

/// View-model for the registration form.
///
/// Submitting registers the account; the gateway stores the returned token,
/// so a successful submit lands the user on the event listing already
/// logged in.
pub struct RegisterPage<C: HttpClient> {
    gateway: Arc<Gateway<C>>,
    state: PageState<()>,
}

impl<C: HttpClient> RegisterPage<C> {
    /// Creates the page over a gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway<C>>) -> Self {
        Self {
            gateway,
            state: PageState::Idle,
        }
    }

    /// Current render state.
    #[must_use]
    pub const fn state(&self) -> &PageState<()> {
        &self.state
    }

    /// Submits the registration form.
    pub async fn submit(&mut self, email: &str, password: &str) {
        self.state = PageState::Loading;
        let credentials = Credentials::new(email, password);
        self.state = match self.gateway.register(&credentials).await {
            Ok(_) => {
                self.gateway
                    .context()
                    .navigator
                    .redirect(Destination::Events);
                PageState::Loaded(())
            }
            Err(e) => PageState::failed(e.user_message()),
        };
    }
}

/// View-model for the login form. Same flow as [`RegisterPage`] against
/// the login endpoint.
pub struct LoginPage<C: HttpClient> {
    gateway: Arc<Gateway<C>>,
    state: PageState<()>,
}

impl<C: HttpClient> LoginPage<C> {
    /// Creates the page over a gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway<C>>) -> Self {
        Self {
            gateway,
            state: PageState::Idle,
        }
    }

    /// Current render state.
    #[must_use]
    pub const fn state(&self) -> &PageState<()> {
        &self.state
    }

    /// Submits the login form.
    pub async fn submit(&mut self, email: &str, password: &str) {
        self.state = PageState::Loading;
        let credentials = Credentials::new(email, password);
        self.state = match self.gateway.login(&credentials).await {
            Ok(_) => {
                self.gateway
                    .context()
                    .navigator
                    .redirect(Destination::Events);
                PageState::Loaded(())
            }
            Err(e) => PageState::failed(e.user_message()),
        };
    }
}
