mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn full_stats() -> Value {
    json!({
        "stats1": {"data": "10k+", "desc": "Active investors"},
        "stats2": {"data": "$2M", "desc": "Paid out"},
        "stats3": {"data": "24/7", "desc": "Support"},
        "stats4": {"data": "5", "desc": "Years online"}
    })
}

#[tokio::test]
async fn test_create_and_get_stats() {
    let (server, _dir) = common::create_default_server();
    let (auth, token) = common::bearer(common::ADMIN_ID);

    let response = server
        .post("/home/stats")
        .add_header(auth, token)
        .json(&full_stats())
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"savedStats": full_stats()}));

    let response = server.get("/home/stats").await;

    response.assert_status_ok();
    response.assert_json(&json!({"stats": full_stats()}));
}

#[tokio::test]
async fn test_stats_null_before_creation() {
    let (server, _dir) = common::create_default_server();

    let response = server.get("/home/stats").await;

    response.assert_status_ok();
    response.assert_json(&json!({"stats": null}));
}

#[tokio::test]
async fn test_incomplete_stats_rejected_with_echo() {
    let (server, _dir) = common::create_default_server();
    let (auth, token) = common::bearer(common::ADMIN_ID);

    let mut partial = full_stats();
    partial.as_object_mut().unwrap().remove("stats4");

    let response = server
        .post("/home/stats")
        .add_header(auth, token)
        .json(&partial)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Some data missing");
    assert_eq!(json["stats"]["stats1"]["data"], "10k+");
    assert!(json["stats"]["stats4"].is_null());
}

#[tokio::test]
async fn test_entry_without_desc_rejected_with_echo() {
    let (server, _dir) = common::create_default_server();
    let (auth, token) = common::bearer(common::ADMIN_ID);

    let mut submitted = full_stats();
    submitted["stats1"] = json!({"data": "1"});

    let response = server
        .post("/home/stats")
        .add_header(auth, token)
        .json(&submitted)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Some data missing");
    assert_eq!(json["stats"], submitted);
}

#[tokio::test]
async fn test_stats_shown_with_intro() {
    let (server, _dir) = common::create_default_server();
    let (auth, token) = common::bearer(common::ADMIN_ID);
    let (host, host_value) = common::host();

    server
        .post("/home/stats")
        .add_header(auth, token)
        .json(&full_stats())
        .await
        .assert_status(StatusCode::CREATED);

    let json = server
        .get("/home/intro")
        .add_header(host, host_value)
        .await
        .json::<Value>();

    assert!(json["intro"].is_null());
    assert_eq!(json["stats"]["stats2"]["desc"], "Paid out");
}

#[tokio::test]
async fn test_non_admin_cannot_create_stats() {
    let (server, _dir) = common::create_default_server();
    let (auth, token) = common::bearer(common::USER_ID);

    let response = server
        .post("/home/stats")
        .add_header(auth, token)
        .json(&full_stats())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({"message": "You are not permitted to create stats"}));
}

#[tokio::test]
async fn test_save_failure_is_bad_request() {
    let (server, _dir) = common::create_failing_server();
    let (auth, token) = common::bearer(common::ADMIN_ID);

    let response = server
        .post("/home/stats")
        .add_header(auth, token)
        .json(&full_stats())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Storage error: database offline"}));
}
