mod support;

use serde_json::json;
use support::{SESSION_TTL_SECONDS, issue_token, start_gateway};

const SESSION_ADDRESS: &str = "0x00a329c0648769A73afAc7F9381E08FB43dBEA72";

#[tokio::test]
async fn test_granted_session_window_spans_the_ttl() {
    let gateway = start_gateway().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/wallet/sessions", gateway.base_url))
        .bearer_auth(issue_token("gamer@example.test"))
        .json(&json!({"session_address": SESSION_ADDRESS}))
        .send()
        .await
        .expect("grant request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("grant body");
    assert_eq!(body["data"]["address"], SESSION_ADDRESS);
    assert_eq!(body["data"]["revoked"], false);
    let valid_after = body["data"]["valid_after"].as_u64().expect("valid_after");
    let valid_until = body["data"]["valid_until"].as_u64().expect("valid_until");
    assert_eq!(valid_until - valid_after, SESSION_TTL_SECONDS);
}

#[tokio::test]
async fn test_revoked_session_reports_revocation() {
    let gateway = start_gateway().await;
    let client = reqwest::Client::new();
    let token = issue_token("gamer@example.test");

    client
        .post(format!("{}/wallet/sessions", gateway.base_url))
        .bearer_auth(&token)
        .json(&json!({"session_address": SESSION_ADDRESS}))
        .send()
        .await
        .expect("grant request");

    let response = client
        .post(format!("{}/wallet/sessions/revoke", gateway.base_url))
        .bearer_auth(&token)
        .json(&json!({"session_address": SESSION_ADDRESS}))
        .send()
        .await
        .expect("revoke request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("revoke body");
    assert_eq!(body["data"]["revoked"], true);
    assert_eq!(gateway.upstream.player_count().await, 1);
}

#[tokio::test]
async fn test_invalid_session_address_is_rejected() {
    let gateway = start_gateway().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/wallet/sessions", gateway.base_url))
        .bearer_auth(issue_token("gamer@example.test"))
        .json(&json!({"session_address": "sess-123"}))
        .send()
        .await
        .expect("grant request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("error body");
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("session_address")
    );
    assert_eq!(gateway.upstream.player_count().await, 0);
}

#[tokio::test]
async fn test_upstream_failure_is_relayed_with_status() {
    let gateway = start_gateway().await;
    let client = reqwest::Client::new();
    gateway
        .upstream
        .fail_next_with(503, "upstream maintenance window")
        .await;

    let response = client
        .post(format!("{}/wallet/sessions", gateway.base_url))
        .bearer_auth(issue_token("gamer@example.test"))
        .json(&json!({"session_address": SESSION_ADDRESS}))
        .send()
        .await
        .expect("grant request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "upstream maintenance window");
    assert_eq!(body["upstream_status"], 503);
}
