//! Page view state types for UI binding.
//!
//! Each page view holds a `PageState` so the front end can render
//! appropriate feedback at each stage of a fetch.

/// State machine for a page view's data.
///
/// - `Idle`: nothing requested yet
/// - `Loading`: a request is in flight
/// - `Loaded`: data available for rendering
/// - `Failed`: a user-visible error message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState<T> {
    /// No request has been issued yet.
    #[default]
    Idle,

    /// A request is in progress.
    Loading,

    /// The page's data is available.
    Loaded(T),

    /// The request failed with a user-visible message.
    Failed {
        /// Human-readable error message.
        message: String,
    },
}

impl<T> PageState<T> {
    /// Creates a Failed state.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Returns true if a request is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if data is available.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns the loaded data, if any.
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message, if the state is Failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state: PageState<Vec<i32>> = PageState::default();
        assert_eq!(state, PageState::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn loaded_exposes_data() {
        let state = PageState::Loaded(vec![1, 2]);
        assert!(state.is_loaded());
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn failed_exposes_message() {
        let state: PageState<()> = PageState::failed("boom");
        assert_eq!(state.error_message(), Some("boom"));
        assert_eq!(state.data(), None);
    }
}
