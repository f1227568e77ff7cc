use serde_json::{json, Value};
use tokensoft_client::{
    sign, ClientConfig, ClientError, GraphQlRequest, TokensoftClient, ACCESS_KEY_HEADER,
    ACCESS_SIGN_HEADER, ACCESS_TIMESTAMP_HEADER,
};
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVER_TIME: &str = "1700000000000";

fn client_for(server: &MockServer) -> TokensoftClient {
    let config = ClientConfig::new(format!("{}/graphql", server.uri()), "key-1", "secret-1");
    TokensoftClient::new(config).unwrap()
}

async fn mount_time_probe(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("{ time }"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "time": SERVER_TIME } })),
        )
        .mount(server)
        .await;
}

async fn mount_signed(server: &MockServer, reply: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header_exists(ACCESS_SIGN_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .mount(server)
        .await;
}

fn header<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

// ── Time probe ──────────────────────────────────────────────────

#[tokio::test]
async fn server_time_comes_from_unsigned_probe() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    let client = client_for(&server);

    let time: i64 = client.server_time().await.unwrap().parse().unwrap();
    assert!(time >= SERVER_TIME.parse::<i64>().unwrap());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let probe = &requests[0];
    assert_eq!(String::from_utf8_lossy(&probe.body), r#"{"query":"{ time }"}"#);
    assert!(header(probe, ACCESS_SIGN_HEADER).is_none());
    assert!(header(probe, ACCESS_KEY_HEADER).is_none());
    assert_eq!(header(probe, "content-type"), Some("application/json"));
}

// ── Signing ─────────────────────────────────────────────────────

#[tokio::test]
async fn signed_request_carries_verifiable_headers() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    mount_signed(&server, json!({ "data": { "ping": "pong" } })).await;
    let client = client_for(&server);

    let body = r#"{"query":"{ ping }"}"#;
    let response = client.send_request(body).await.unwrap();
    assert_eq!(response.data.unwrap()["ping"], "pong");

    let requests = server.received_requests().await.unwrap();
    let signed = requests
        .iter()
        .find(|r| header(r, ACCESS_SIGN_HEADER).is_some())
        .expect("signed request");

    assert_eq!(String::from_utf8_lossy(&signed.body), body);
    assert_eq!(header(signed, ACCESS_KEY_HEADER), Some("key-1"));
    assert_eq!(header(signed, "content-type"), Some("application/json"));

    let timestamp = header(signed, ACCESS_TIMESTAMP_HEADER).unwrap();
    assert!(timestamp.parse::<i64>().unwrap() >= SERVER_TIME.parse::<i64>().unwrap());

    let expected = sign("secret-1", timestamp, body).unwrap();
    assert_eq!(header(signed, ACCESS_SIGN_HEADER), Some(expected.as_str()));
}

#[tokio::test]
async fn time_is_probed_once_across_requests() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    mount_signed(&server, json!({ "data": { "ping": "pong" } })).await;
    let client = client_for(&server);

    for _ in 0..3 {
        client.execute(&GraphQlRequest::new("{ ping }")).await.unwrap();
    }

    let requests = server.received_requests().await.unwrap();
    let probes = requests
        .iter()
        .filter(|r| header(r, ACCESS_SIGN_HEADER).is_none())
        .count();
    assert_eq!(probes, 1);
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn variables_are_serialized_with_the_query() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    mount_signed(&server, json!({ "data": {} })).await;
    let client = client_for(&server);

    let request = GraphQlRequest::new("query ($id: String!) { user(id: $id) { id } }")
        .with_variables(json!({ "id": "u\"1" }));
    client.execute(&request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let signed = requests.last().unwrap();
    let body: Value = serde_json::from_slice(&signed.body).unwrap();
    assert_eq!(body["variables"]["id"], "u\"1");
}

// ── Faults ──────────────────────────────────────────────────────

#[tokio::test]
async fn non_json_reply_is_a_transport_error() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    Mock::given(method("POST"))
        .and(header_exists(ACCESS_SIGN_HEADER))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.send_request(r#"{"query":"{ x }"}"#).await.unwrap_err();
    assert!(err.is_transport(), "{err}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let config = ClientConfig::new("http://127.0.0.1:9/graphql", "key-1", "secret-1");
    let client = TokensoftClient::new(config).unwrap();

    let err = client.server_time().await.unwrap_err();
    assert!(err.is_transport(), "{err}");
}

#[tokio::test]
async fn envelope_errors_surface_on_endpoints() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    mount_signed(
        &server,
        json!({
            "errors": [{ "message": "Invalid signature", "name": "AuthError", "time_thrown": "now" }],
            "data": null
        }),
    )
    .await;
    let client = client_for(&server);

    let err = client.current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
    assert_eq!(err.to_string(), "Errors: AuthError: Invalid signature");
}

#[tokio::test]
async fn send_request_returns_error_envelopes_untouched() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    mount_signed(
        &server,
        json!({
            "errors": [{ "message": "nope", "name": "E", "time_thrown": "now" }],
            "data": null
        }),
    )
    .await;
    let client = client_for(&server);

    let response = client.send_request(r#"{"query":"{ x }"}"#).await.unwrap();
    assert!(response.has_errors());
    assert!(response.data.is_none());
}

// ── Endpoints over HTTP ─────────────────────────────────────────

#[tokio::test]
async fn current_user_over_http() {
    let server = MockServer::start().await;
    mount_time_probe(&server).await;
    mount_signed(
        &server,
        json!({ "data": { "currentUser": { "id": "u1", "email": "ops@tokensoft.io" } } }),
    )
    .await;
    let client = client_for(&server);

    let user = client.current_user().await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "ops@tokensoft.io");
}
