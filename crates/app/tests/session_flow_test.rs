//! End-to-end session flow over real adapters: reqwest transport against a
//! mock server, file token storage in a temp directory.

use std::sync::{Arc, Mutex};

use marquee_application::ports::{Navigator, TokenStorage};
use marquee_application::{ClientContext, Gateway, GatewayError, TokenStore};
use marquee_domain::{Credentials, Destination, Token};
use marquee_infrastructure::{FileTokenStorage, ReqwestHttpClient};
use serde_json::json;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNavigator {
    redirects: Mutex<Vec<Destination>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, destination: Destination) {
        self.redirects.lock().expect("navigator lock").push(destination);
    }
}

struct Harness {
    gateway: Gateway<ReqwestHttpClient>,
    storage: FileTokenStorage,
    navigator: Arc<RecordingNavigator>,
    _dir: TempDir,
}

fn harness(server: &MockServer) -> Harness {
    let dir = TempDir::new().expect("temp dir");
    let storage = FileTokenStorage::new(dir.path().join("token"));
    let navigator = Arc::new(RecordingNavigator::default());
    let tokens = TokenStore::new(Arc::new(storage.clone()));
    let context = ClientContext::new(tokens, navigator.clone());
    let transport = Arc::new(ReqwestHttpClient::new().expect("client"));
    let base = Url::parse(&server.uri()).expect("base url");

    Harness {
        gateway: Gateway::new(base, transport, context),
        storage,
        navigator,
        _dir: dir,
    }
}

#[tokio::test]
async fn login_persists_token_and_authorizes_subsequent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t-disk"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("Authorization", "Bearer t-disk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.gateway
        .login(&Credentials::new("a@example.com", "hunter2"))
        .await
        .expect("login");

    // Token lands on disk, not only in memory.
    assert_eq!(h.storage.load(), Some(Token::new("t-disk")));

    let events = h.gateway.list_events().await.expect("list");
    assert!(events.is_empty());
}

#[tokio::test]
async fn server_401_clears_persisted_token_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.storage.store(&Token::new("stale"));

    let result = h.gateway.list_events().await;

    assert!(matches!(result, Err(GatewayError::Unauthorized)));
    assert_eq!(h.storage.load(), None);
    assert_eq!(
        h.navigator.redirects.lock().expect("lock").as_slice(),
        &[Destination::Unauthorized]
    );
}

#[tokio::test]
async fn logout_clears_persisted_token_without_contacting_server() {
    // No mocks mounted: any request would fail the test via the transport.
    let server = MockServer::start().await;
    let h = harness(&server);
    h.storage.store(&Token::new("t-1"));

    h.gateway.logout();

    assert_eq!(h.storage.load(), None);
    assert_eq!(
        h.navigator.redirects.lock().expect("lock").as_slice(),
        &[Destination::UserHome]
    );
    assert!(server.received_requests().await.expect("requests").is_empty());
}

#[tokio::test]
async fn full_event_lifecycle_against_mock_backend() {
    let server = MockServer::start().await;
    let created = json!({
        "_id": "ev-1",
        "title": "Launch party",
        "description": "Snacks provided",
        "price": 12.5,
        "createdAt": "2026-03-01T20:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_json(json!({
            "title": "Launch party",
            "description": "Snacks provided",
            "price": 12.5
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/events/ev-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/events/ev-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "gone"})))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.storage.store(&Token::new("t-1"));

    let event = h
        .gateway
        .create_event("Launch party", "Snacks provided", "12.50")
        .await
        .expect("create");
    assert_eq!(event.id, "ev-1");

    h.gateway
        .update_event("ev-1", "Launch party", "Snacks provided", "15")
        .await
        .expect("update");

    let confirmation = h.gateway.delete_event("ev-1").await.expect("delete");
    assert_eq!(confirmation.message.as_deref(), Some("gone"));
}
