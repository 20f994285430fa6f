//! Request/response interceptor chain.
//!
//! Interceptors are ordered middleware run by the gateway around every
//! outbound call: request interceptors may rewrite the request before it
//! reaches the transport, response interceptors observe the raw response
//! and may fail the call. Both receive the [`ClientContext`], the explicit
//! seam through which they touch client state (token store, navigation).

use std::sync::Arc;

use async_trait::async_trait;
use marquee_domain::Destination;
use tracing::{debug, warn};

use crate::auth::TokenStore;
use crate::error::GatewayError;
use crate::ports::{ApiRequest, ApiResponse, Navigator};

/// Shared client state handed to every interceptor.
///
/// Replaces ambient global access with an explicit context object, which
/// keeps storage and navigation substitutable in tests.
#[derive(Clone)]
pub struct ClientContext {
    /// The bearer token store.
    pub tokens: TokenStore,
    /// Navigation sink for auth-driven redirects.
    pub navigator: Arc<dyn Navigator>,
}

impl ClientContext {
    /// Creates a context from its parts.
    #[must_use]
    pub fn new(tokens: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { tokens, navigator }
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

/// Pre-request middleware.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Transforms the request before it is handed to the transport.
    ///
    /// # Errors
    ///
    /// An error aborts the call before any network traffic.
    async fn intercept(
        &self,
        request: ApiRequest,
        cx: &ClientContext,
    ) -> Result<ApiRequest, GatewayError>;
}

/// Post-response middleware.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Observes or transforms the raw response.
    ///
    /// # Errors
    ///
    /// An error is surfaced to the caller in place of the response.
    async fn intercept(
        &self,
        response: ApiResponse,
        cx: &ClientContext,
    ) -> Result<ApiResponse, GatewayError>;
}

/// Attaches `Authorization: Bearer <token>` when a token is present.
///
/// The token store is consulted on every call, so a token set after the
/// gateway was constructed is picked up without reconfiguration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuth;

#[async_trait]
impl RequestInterceptor for BearerAuth {
    async fn intercept(
        &self,
        request: ApiRequest,
        cx: &ClientContext,
    ) -> Result<ApiRequest, GatewayError> {
        match cx.tokens.get() {
            Some(token) => Ok(request.with_header("Authorization", token.bearer_header())),
            None => Ok(request),
        }
    }
}

/// Handles authentication failures.
///
/// On a 401 the active token is cleared, a redirect to the unauthorized
/// page is signaled, and the failure is re-raised to the caller. All other
/// responses pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnauthorizedRedirect;

#[async_trait]
impl ResponseInterceptor for UnauthorizedRedirect {
    async fn intercept(
        &self,
        response: ApiResponse,
        cx: &ClientContext,
    ) -> Result<ApiResponse, GatewayError> {
        if response.status == 401 {
            warn!("received 401, clearing session and redirecting");
            cx.tokens.remove();
            cx.navigator.redirect(Destination::Unauthorized);
            return Err(GatewayError::Unauthorized);
        }
        debug!(status = response.status, "response passed auth check");
        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::{HttpMethod, TokenStorage};
    use marquee_domain::Token;
    use serde_json::Value;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        token: Mutex<Option<Token>>,
    }

    impl TokenStorage for MemoryStorage {
        fn load(&self) -> Option<Token> {
            self.token.lock().unwrap().clone()
        }

        fn store(&self, token: &Token) {
            *self.token.lock().unwrap() = Some(token.clone());
        }

        fn clear(&self) {
            *self.token.lock().unwrap() = None;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: Mutex<Vec<Destination>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, destination: Destination) {
            self.redirects.lock().unwrap().push(destination);
        }
    }

    fn context() -> (ClientContext, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let tokens = TokenStore::new(Arc::new(MemoryStorage::default()));
        (
            ClientContext::new(tokens, navigator.clone() as Arc<dyn Navigator>),
            navigator,
        )
    }

    #[tokio::test]
    async fn bearer_attaches_header_when_token_present() {
        let (cx, _) = context();
        cx.tokens.set(&Token::new("t-1"));

        let request = ApiRequest::new(HttpMethod::Get, "http://x/events");
        let request = BearerAuth.intercept(request, &cx).await.unwrap();

        assert_eq!(request.header("authorization"), Some("Bearer t-1"));
    }

    #[tokio::test]
    async fn bearer_leaves_request_alone_without_token() {
        let (cx, _) = context();

        let request = ApiRequest::new(HttpMethod::Get, "http://x/events");
        let request = BearerAuth.intercept(request, &cx).await.unwrap();

        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn unauthorized_clears_token_redirects_and_raises() {
        let (cx, navigator) = context();
        cx.tokens.set(&Token::new("t-1"));

        let response = ApiResponse::new(401, Value::Null);
        let result = UnauthorizedRedirect.intercept(response, &cx).await;

        assert!(matches!(result, Err(GatewayError::Unauthorized)));
        assert!(!cx.tokens.is_logged_in());
        assert_eq!(
            navigator.redirects.lock().unwrap().as_slice(),
            &[Destination::Unauthorized]
        );
    }

    #[tokio::test]
    async fn non_401_passes_through() {
        let (cx, navigator) = context();
        cx.tokens.set(&Token::new("t-1"));

        let response = ApiResponse::new(500, Value::Null);
        let result = UnauthorizedRedirect.intercept(response, &cx).await;

        assert!(result.is_ok());
        assert!(cx.tokens.is_logged_in());
        assert!(navigator.redirects.lock().unwrap().is_empty());
    }
}
