//! Authenticated request gateway.
//!
//! The gateway issues HTTP calls on behalf of page views: every request is
//! resolved against a fixed base origin and run through the interceptor
//! chain, which attaches the bearer token on the way out and reacts to 401
//! responses on the way back. Domain operations (events CRUD, auth) are
//! thin specializations of [`Gateway::call`] with fixed paths and payload
//! shapes.

mod interceptor;

pub use interceptor::{
    BearerAuth, ClientContext, RequestInterceptor, ResponseInterceptor, UnauthorizedRedirect,
};

use std::sync::Arc;

use marquee_domain::{
    Credentials, DeleteConfirmation, Destination, Event, EventDraft, Token, parse_price,
};
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

use crate::auth::TokenStore;
use crate::error::{GatewayError, GatewayResult};
use crate::ports::{ApiRequest, ApiResponse, HttpClient, HttpClientError, HttpMethod};

/// Authenticated HTTP gateway over a transport port.
///
/// Generic over the [`HttpClient`] implementation so tests can substitute
/// a mock transport while production wires in the reqwest adapter.
pub struct Gateway<C: HttpClient> {
    base_url: Url,
    client: Arc<C>,
    context: ClientContext,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl<C: HttpClient> Gateway<C> {
    /// Creates a gateway with the default interceptor chain: bearer token
    /// injection on requests, 401 handling on responses.
    ///
    /// The base URL is normalized to end with a slash so relative paths
    /// resolve under it rather than replacing its final segment.
    #[must_use]
    pub fn new(base_url: Url, client: Arc<C>, context: ClientContext) -> Self {
        let mut gateway = Self {
            base_url: normalize_base(base_url),
            client,
            context,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        };
        gateway.request_interceptors.push(Box::new(BearerAuth));
        gateway
            .response_interceptors
            .push(Box::new(UnauthorizedRedirect));
        gateway
    }

    /// Appends a request interceptor after the default chain.
    pub fn push_request_interceptor(&mut self, interceptor: Box<dyn RequestInterceptor>) {
        self.request_interceptors.push(interceptor);
    }

    /// Appends a response interceptor after the default chain.
    pub fn push_response_interceptor(&mut self, interceptor: Box<dyn ResponseInterceptor>) {
        self.response_interceptors.push(interceptor);
    }

    /// The token store this gateway consults.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.context.tokens
    }

    /// The client context shared with interceptors.
    #[must_use]
    pub const fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Issues a request to `path` relative to the base origin.
    ///
    /// Runs the request interceptors, executes via the transport, then runs
    /// the response interceptors. Non-2xx statuses other than 401 (which
    /// the default chain turns into [`GatewayError::Unauthorized`]) are
    /// surfaced as [`GatewayError::Api`] carrying the server's `message`
    /// field when one is present.
    ///
    /// # Errors
    ///
    /// Transport failures, interceptor failures and error statuses all
    /// surface here; nothing is retried.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> GatewayResult<ApiResponse> {
        let url = self.endpoint(path)?;
        let mut request = ApiRequest::new(method, url);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        for interceptor in &self.request_interceptors {
            request = interceptor.intercept(request, &self.context).await?;
        }

        debug!(%method, path, "issuing request");
        let mut response = self.client.execute(request).await?;

        for interceptor in &self.response_interceptors {
            response = interceptor.intercept(response, &self.context).await?;
        }

        if response.is_success() {
            Ok(response)
        } else {
            let message = response
                .server_message()
                .map_or_else(|| "request failed".to_string(), str::to_string);
            Err(GatewayError::Api {
                status: response.status,
                message,
            })
        }
    }

    /// Fetches the event listing.
    ///
    /// # Errors
    ///
    /// See [`Gateway::call`]; additionally fails if the body is not a list
    /// of events.
    pub async fn list_events(&self) -> GatewayResult<Vec<Event>> {
        let response = self.call(HttpMethod::Get, "events", None).await?;
        decode(response.body)
    }

    /// Creates an event.
    ///
    /// The price input must parse as a finite number; otherwise the call
    /// fails validation without any network traffic.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Domain`] on a bad price, otherwise see
    /// [`Gateway::call`].
    pub async fn create_event(
        &self,
        title: &str,
        description: &str,
        price: &str,
    ) -> GatewayResult<Event> {
        let draft = EventDraft::new(title, description, parse_price(price)?);
        let body =
            serde_json::to_value(&draft).map_err(|e| GatewayError::Decode(e.to_string()))?;

        let response = self.call(HttpMethod::Post, "events", Some(body)).await?;
        decode(response.body)
    }

    /// Updates an event.
    ///
    /// Note: unlike [`Gateway::create_event`], the price input is forwarded
    /// to the server as given, without client-side validation. The backend
    /// is the sole validator on this path.
    ///
    /// # Errors
    ///
    /// See [`Gateway::call`].
    pub async fn update_event(
        &self,
        id: &str,
        title: &str,
        description: &str,
        price: &str,
    ) -> GatewayResult<Event> {
        let body = json!({
            "title": title,
            "description": description,
            "price": price,
        });

        let response = self
            .call(HttpMethod::Put, &format!("events/{id}"), Some(body))
            .await?;
        decode(response.body)
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// See [`Gateway::call`].
    pub async fn delete_event(&self, id: &str) -> GatewayResult<DeleteConfirmation> {
        let response = self
            .call(HttpMethod::Delete, &format!("events/{id}"), None)
            .await?;
        // Some backends answer deletions with an empty body.
        if response.body.is_null() {
            return Ok(DeleteConfirmation::default());
        }
        decode(response.body)
    }

    /// Logs in and stores the received token.
    ///
    /// # Errors
    ///
    /// [`GatewayError::MissingToken`] when the response succeeds over HTTP
    /// but carries no `token` field; otherwise see [`Gateway::call`].
    pub async fn login(&self, credentials: &Credentials) -> GatewayResult<Token> {
        self.authenticate("auth/login", credentials).await
    }

    /// Registers a new account and stores the received token.
    ///
    /// # Errors
    ///
    /// Same contract as [`Gateway::login`].
    pub async fn register(&self, credentials: &Credentials) -> GatewayResult<Token> {
        self.authenticate("auth/register", credentials).await
    }

    /// Ends the session: clears the token and signals a redirect to the
    /// user home. Does not contact the server.
    pub fn logout(&self) {
        info!("logging out");
        self.context.tokens.remove();
        self.context.navigator.redirect(Destination::UserHome);
    }

    async fn authenticate(&self, path: &str, credentials: &Credentials) -> GatewayResult<Token> {
        let body = serde_json::to_value(credentials)
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        let response = self.call(HttpMethod::Post, path, Some(body)).await?;

        match response.body.get("token").and_then(Value::as_str) {
            Some(raw) if !raw.is_empty() => {
                let token = Token::new(raw);
                self.context.tokens.set(&token);
                info!("session established");
                Ok(token)
            }
            _ => Err(GatewayError::MissingToken),
        }
    }

    fn endpoint(&self, path: &str) -> GatewayResult<String> {
        let joined = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| GatewayError::Http(HttpClientError::InvalidUrl(e.to_string())))?;
        Ok(joined.into())
    }
}

impl<C: HttpClient> std::fmt::Debug for Gateway<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field(
                "request_interceptors",
                &self.request_interceptors.len(),
            )
            .field(
                "response_interceptors",
                &self.response_interceptors.len(),
            )
            .finish_non_exhaustive()
    }
}

fn normalize_base(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

fn decode<T: serde::de::DeserializeOwned>(body: Value) -> GatewayResult<T> {
    serde_json::from_value(body).map_err(|e| GatewayError::Decode(e.to_string()))
}
