//! Navigation port.

use marquee_domain::Destination;

/// Port for signaling client-side navigation.
///
/// The gateway redirects as a side effect of authentication events (401,
/// logout); the front end decides what a redirect actually does. Callers
/// must tolerate navigation occurring mid-call.
pub trait Navigator: Send + Sync {
    /// Signals a redirect to the given destination.
    fn redirect(&self, destination: Destination);
}
