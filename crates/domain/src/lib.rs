//! Marquee Domain - Core business types
//!
//! This crate defines the domain model for the Marquee marketplace client.
//! All types here are pure Rust with no I/O dependencies.

pub mod credentials;
pub mod error;
pub mod event;
pub mod price;
pub mod state;
pub mod token;

pub use credentials::Credentials;
pub use error::{DomainError, DomainResult};
pub use event::{DeleteConfirmation, Event, EventDraft};
pub use price::parse_price;
pub use state::PageState;
pub use token::{Destination, Token};
