//! Event listing page.

use std::sync::Arc;

use marquee_domain::{Destination, Event, PageState};
use tracing::debug;

use crate::gateway::Gateway;
use crate::ports::HttpClient;

/// View-model for the event listing.
///
/// Holds the single in-memory list the page renders from; there is no
/// caching beyond it. Loading requires a logged-in session: without one
/// the page redirects to the unauthorized destination instead of calling
/// the backend.
pub struct EventsPage<C: HttpClient> {
    gateway: Arc<Gateway<C>>,
    state: PageState<Vec<Event>>,
}

impl<C: HttpClient> EventsPage<C> {
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
    pub const fn state(&self) -> &PageState<Vec<Event>> {
        &self.state
    }

    /// Fetches the listing.
    pub async fn load(&mut self) {
        if !self.gateway.tokens().is_logged_in() {
            debug!("not logged in, redirecting away from events page");
            self.gateway
                .context()
                .navigator
                .redirect(Destination::Unauthorized);
            self.state = PageState::failed("You must be logged in to browse events.");
            return;
        }

        self.state = PageState::Loading;
        self.state = match self.gateway.list_events().await {
            Ok(events) => PageState::Loaded(events),
            Err(e) => PageState::failed(e.user_message()),
        };
    }

    /// Deletes an event and drops it from the loaded list.
    pub async fn remove(&mut self, id: &str) {
        match self.gateway.delete_event(id).await {
            Ok(_) => {
                if let PageState::Loaded(events) = &mut self.state {
                    events.retain(|event| event.id != id);
                }
            }
            Err(e) => self.state = PageState::failed(e.user_message()),
        }
    }
}
