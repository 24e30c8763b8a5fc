//! Mock-server tests for the dispatch core: retry behavior, node error
//! handling, auth headers, and request envelope shape.

use mockito::{Matcher, Server};
use nano_rpc::{AuthScheme, LogSink, NanoRpc, RpcConfig, RpcError};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

fn config(url: &str, retries: u32) -> RpcConfig {
    RpcConfig {
        url: url.to_string(),
        retries,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    }
}

#[derive(Default)]
struct CapturingSink {
    lines: Mutex<Vec<String>>,
}

impl LogSink for CapturingSink {
    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

// ─── 1. Retry Behavior ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_exhausts_retry_budget_on_persistent_failure() {
    let mut server = Server::new_async().await;
    // retries = 2 means exactly 3 attempts on the wire.
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("internal error")
        .expect(3)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 2));
    let err = node.version().await.unwrap_err();

    match err {
        RpcError::RetriesExhausted {
            action, retries, ..
        } => {
            assert_eq!(action, "version");
            assert_eq!(retries, 2);
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_recovers_within_retry_budget() {
    let mut server = Server::new_async().await;
    let hits = Arc::new(Mutex::new(0u32));
    let hits_in_mock = hits.clone();
    // First two responses carry a node error, third succeeds. The caller
    // sees only the success and the mock sees no fourth request.
    let mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_req| {
            let mut h = hits_in_mock.lock().unwrap();
            *h += 1;
            if *h < 3 {
                br#"{"error": "Gateway busy"}"#.to_vec()
            } else {
                br#"{"count": "100", "unchecked": "10"}"#.to_vec()
            }
        })
        .expect(3)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 2));
    let count = node.block_count(None).await.unwrap();

    assert_eq!(count.count, "100");
    assert_eq!(count.unchecked, "10");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_node_error_field_is_raised_and_retried() {
    let mut server = Server::new_async().await;
    // HTTP 200 with a non-empty `error` field is a failure like any other:
    // retried, and never surfaced as a success.
    let mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Bad account number"}"#)
        .expect(3)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 2));
    let err = node
        .account_balance("nano_1nonsense", None)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("account_balance"), "got: {}", message);
    assert!(message.contains("Bad account number"), "got: {}", message);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_json_body_is_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_body("<html>502 Bad Gateway</html>")
        .expect(2)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 1));
    let err = node.version().await.unwrap_err();

    assert!(matches!(err, RpcError::RetriesExhausted { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_status_reported_in_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(403)
        .with_body("forbidden")
        .expect(1)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 0));
    let err = node.version().await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("403"), "got: {}", message);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_backoff_grows_linearly() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .expect(3)
        .create_async()
        .await;

    let node = NanoRpc::with_config(RpcConfig {
        url: server.url(),
        retries: 2,
        retry_delay: Duration::from_millis(20),
        ..Default::default()
    });

    let start = Instant::now();
    let _ = node.version().await;
    let elapsed = start.elapsed();

    // Waits of 20ms and 40ms separate the three attempts.
    assert!(elapsed >= Duration::from_millis(60), "got: {:?}", elapsed);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sink_sees_every_failed_attempt() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let sink = Arc::new(CapturingSink::default());
    let node = NanoRpc::with_config(RpcConfig {
        url: server.url(),
        retries: 1,
        retry_delay: Duration::from_millis(5),
        sink: sink.clone(),
        ..Default::default()
    });
    let _ = node.version().await;

    let lines = sink.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("RPC call 'version' attempt 1 failed"), "got: {}", lines[0]);
    assert!(lines[1].contains("RPC call 'version' attempt 2 failed"), "got: {}", lines[1]);
    mock.assert_async().await;
}

// ─── 2. Auth Headers ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_bearer_token_on_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer sekrit")
        .with_header("content-type", "application/json")
        .with_body(r#"{"seconds": "3600"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(RpcConfig {
        url: server.url(),
        auth: AuthScheme::Bearer {
            token: "sekrit".to_string(),
        },
        retries: 0,
        ..Default::default()
    });
    let uptime = node.uptime().await.unwrap();

    assert_eq!(uptime.seconds, "3600");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_bearer_token_still_sends_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer ")
        .with_header("content-type", "application/json")
        .with_body(r#"{"seconds": "1"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(RpcConfig {
        url: server.url(),
        auth: AuthScheme::Bearer {
            token: String::new(),
        },
        retries: 0,
        ..Default::default()
    });
    node.uptime().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_key_on_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-api-key", "k123")
        .match_header("authorization", Matcher::Missing)
        .with_header("content-type", "application/json")
        .with_body(r#"{"seconds": "1"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(RpcConfig {
        url: server.url(),
        auth: AuthScheme::ApiKey {
            key: "k123".to_string(),
        },
        retries: 0,
        ..Default::default()
    });
    node.uptime().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_basic_auth_on_the_wire() {
    let mut server = Server::new_async().await;
    // base64("user:pass") == "dXNlcjpwYXNz"
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_header("content-type", "application/json")
        .with_body(r#"{"seconds": "1"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(RpcConfig {
        url: server.url(),
        auth: AuthScheme::Basic {
            username: "user".to_string(),
            password: "pass".to_string(),
        },
        retries: 0,
        ..Default::default()
    });
    node.uptime().await.unwrap();
    mock.assert_async().await;
}

// ─── 3. Envelope Shape ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_unset_optional_params_are_omitted() {
    let mut server = Server::new_async().await;
    // Exact-body match: no `include_cemented` key when the caller passes None.
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({ "action": "block_count" })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": "1", "unchecked": "0"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 0));
    node.block_count(None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_count_sent_as_decimal_string() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "action": "account_history",
            "account": "nano_1abc",
            "count": "5",
        })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"account": "nano_1abc", "history": []}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 0));
    let history = node.account_history("nano_1abc", 5, None).await.unwrap();

    assert!(history.history.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_port_sent_as_decimal_string() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "action": "keepalive",
            "address": "::ffff:192.169.0.1",
            "port": "7075",
        })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"started": "1"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 0));
    let ack = node.keepalive("::ffff:192.169.0.1", 7075).await.unwrap();

    assert_eq!(ack.started, "1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_option_struct_fields_merged_into_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "action": "account_history",
            "account": "nano_1abc",
            "count": "10",
            "raw": true,
            "head": "80392607E85E73CC3E94B4126F24488EBDFEB174944B890C97E8F36D89591DC5",
        })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"account": "nano_1abc", "history": []}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 0));
    node.account_history(
        "nano_1abc",
        10,
        Some(nano_rpc::node::AccountHistoryOptions {
            raw: Some(true),
            head: Some(
                "80392607E85E73CC3E94B4126F24488EBDFEB174944B890C97E8F36D89591DC5".to_string(),
            ),
            ..Default::default()
        }),
    )
    .await
    .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_raw_execute_passes_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "action": "some_future_action",
            "flag": "1",
        })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": "ok"}"#)
        .create_async()
        .await;

    let node = NanoRpc::with_config(config(&server.url(), 0));
    let val = node
        .client()
        .execute("some_future_action", json!({ "flag": "1" }))
        .await
        .unwrap();

    assert_eq!(val.get("result").unwrap(), "ok");
    mock.assert_async().await;
}
