use super::*;
use crate::storage::MemoryStorage;
use crate::test_support::MockTransport;

fn client() -> (HttpClient, Arc<MemoryStorage>, Arc<MockTransport>) {
    let storage = Arc::new(MemoryStorage::new());
    let transport = MockTransport::new();
    let config = ApiConfig::with_base_url("https://api.test/").unwrap();
    let http = HttpClient::new(&config, transport.clone(), storage.clone());
    (http, storage, transport)
}

#[test]
fn url_joins_base_and_path() {
    let (http, _, _) = client();
    assert_eq!(http.base_url(), "https://api.test");
    assert_eq!(http.url("/api/Auth/login"), "https://api.test/api/Auth/login");
}

#[test]
fn no_token_means_no_authorization() {
    let (http, _, _) = client();
    let req = http.prepare(Method::Get, "/api/fields", None);
    assert_eq!(req.bearer, None);
    assert_eq!(req.authorization(), None);
}

#[test]
fn stored_token_is_attached() {
    let (http, storage, _) = client();
    storage.set(TOKEN_STORAGE_KEY, "abc").unwrap();
    let req = http.prepare(Method::Get, "/api/fields", None);
    assert_eq!(req.authorization().as_deref(), Some("Bearer abc"));
}

#[test]
fn stored_token_wins_over_default() {
    let (http, storage, _) = client();
    http.set_default_bearer(Some("old".to_owned()));
    assert_eq!(http.bearer_token().as_deref(), Some("old"));
    storage.set(TOKEN_STORAGE_KEY, "new").unwrap();
    assert_eq!(http.bearer_token().as_deref(), Some("new"));
}

#[test]
fn empty_stored_token_is_ignored() {
    let (http, storage, _) = client();
    storage.set(TOKEN_STORAGE_KEY, "").unwrap();
    assert_eq!(http.bearer_token(), None);
}

#[tokio::test]
async fn post_json_sends_body_and_header() {
    let (http, storage, transport) = client();
    storage.set(TOKEN_STORAGE_KEY, "abc").unwrap();
    transport.push_raw(200, "{}");

    let resp = http
        .post_json("/api/Auth/email-verification", &serde_json::json!({ "email": "a@b.c", "code": "1" }))
        .await
        .unwrap();
    assert_eq!(resp, ApiResponse { status: 200, body: "{}".to_owned() });

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "https://api.test/api/Auth/email-verification");
    assert_eq!(sent[0].bearer.as_deref(), Some("abc"));
    assert_eq!(sent[0].body, Some(serde_json::json!({ "email": "a@b.c", "code": "1" })));
}

#[tokio::test]
async fn transport_failure_passes_through_without_retry() {
    let (http, _, transport) = client();
    transport.push_failure("connection refused");
    transport.push_raw(200, "{}");

    let err = http.get("/api/fields").await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn error_status_is_a_response() {
    let (http, _, transport) = client();
    transport.push_raw(401, "");
    let resp = http.get("/api/fields").await.unwrap();
    assert_eq!(resp.status, 401);
}
