//! Marketplace event types.
//!
//! `Event` mirrors the backend's JSON representation; `EventDraft` is the
//! client-side payload for create and update requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A marketplace event as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier. Some deployments expose it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Ticket price. Always finite.
    pub price: f64,
    /// Creation timestamp set by the backend.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating an event.
///
/// The price has already been validated as a finite number by the time a
/// draft exists; see [`crate::price::parse_price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Ticket price as a number.
    pub price: f64,
}

impl EventDraft {
    /// Creates a draft from already-validated parts.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
        }
    }
}

/// Confirmation returned by the backend after a deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// Optional human-readable confirmation message.
    #[serde(default)]
    pub message: Option<String>,
}
