//! Page view-models.
//!
//! Each page owns a [`marquee_domain::PageState`] and drives the gateway;
//! rendering is left to the front end. Errors become user-visible messages
//! in the `Failed` state, while auth failures additionally trigger
//! navigation through the gateway's interceptor chain.

mod auth_pages;
mod events;

pub use auth_pages::{LoginPage, RegisterPage};
pub use events::EventsPage;
