//! Navigation adapter.

use marquee_application::ports::Navigator;
use marquee_domain::Destination;
use tracing::info;

/// Navigator that records redirects in the log stream.
///
/// A CLI has no routing to perform; the redirect signal still matters to
/// the user, so it is surfaced as a log line where a browser front end
/// would change location.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl TracingNavigator {
    /// Creates the navigator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Navigator for TracingNavigator {
    fn redirect(&self, destination: Destination) {
        info!(destination = %destination, "redirect signaled");
    }
}
