//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer, or by a mock in tests.

mod http_client;
mod navigator;
mod token_storage;

pub use http_client::{ApiRequest, ApiResponse, HttpClient, HttpClientError, HttpMethod};
pub use navigator::Navigator;
pub use token_storage::TokenStorage;
