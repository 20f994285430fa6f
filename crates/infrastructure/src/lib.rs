//! Marquee Infrastructure - Adapters for the application ports
//!
//! Implementations backed by real I/O:
//! - reqwest HTTP transport
//! - file-backed token storage
//! - tracing-based navigation sink

pub mod http;
pub mod navigation;
pub mod persistence;

pub use http::ReqwestHttpClient;
pub use navigation::TracingNavigator;
pub use persistence::{FileTokenStorage, MemoryTokenStorage, UnavailableStorage};
