//! Marquee Application - Gateway, ports and page view-models
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, token storage, navigation)
//! - The token store and the authenticated request gateway
//! - Page view-models driving the front end
//! - Application-level error handling

pub mod auth;
pub mod error;
pub mod gateway;
pub mod pages;
pub mod ports;

pub use auth::TokenStore;
pub use error::{GatewayError, GatewayResult};
pub use gateway::{
    BearerAuth, ClientContext, Gateway, RequestInterceptor, ResponseInterceptor,
    UnauthorizedRedirect,
};
pub use pages::{EventsPage, LoginPage, RegisterPage};
pub use ports::{
    ApiRequest, ApiResponse, HttpClient, HttpClientError, HttpMethod, Navigator, TokenStorage,
};
