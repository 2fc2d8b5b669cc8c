use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use crate::test_utils::{test_server, TestContext};

#[tokio::test]
async fn test_create_session_starts_home() {
    let server = test_server(4);

    let response = server.post("/api/sessions").await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert!(body["id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
    assert_eq!(body["screen"], "home");
    assert_eq!(body["detailOpen"], false);
    assert_eq!(body["addClassOpen"], false);
    assert_eq!(body["selectedRoom"], Value::Null);
}

#[tokio::test]
async fn test_get_session_follows_navigation() {
    let ctx = TestContext::new().await;
    ctx.enter_module("laboratorios").await;

    let body: Value = ctx.server.get(&ctx.path("")).await.json();
    assert_eq!(body["id"], ctx.session_id.to_string());
    assert_eq!(body["screen"], "module");
    assert_eq!(body["module"], "Laboratorios");
    assert_eq!(body["viewMode"], "map");
}

#[tokio::test]
async fn test_delete_session() {
    let ctx = TestContext::new().await;

    ctx.server
        .delete(&ctx.path(""))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server
        .get(&ctx.path(""))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .delete(&ctx.path(""))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session() {
    let server = test_server(4);
    let path = format!("/api/sessions/{}/grid", Uuid::new_v4());

    let response = server.get(&path).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Session with ID"));
}

async fn open_session(server: &TestServer) -> String {
    let response = server.post("/api/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_session_limit_evicts_abandoned_session() {
    let server = test_server(1);

    let abandoned = open_session(&server).await;
    let current = open_session(&server).await;

    server
        .get(&format!("/api/sessions/{}", abandoned))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get(&format!("/api/sessions/{}", current))
        .await
        .assert_status_ok();

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["sessions"], 1);
}

#[tokio::test]
async fn test_session_limit_keeps_recently_used_sessions() {
    let server = test_server(2);

    let active = open_session(&server).await;
    let idle = open_session(&server).await;
    server
        .put(&format!("/api/sessions/{}/module", active))
        .json(&serde_json::json!({ "module": "modulo-a" }))
        .await
        .assert_status_ok();

    let newest = open_session(&server).await;

    server
        .get(&format!("/api/sessions/{}", idle))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    for id in [&active, &newest] {
        server
            .get(&format!("/api/sessions/{}", id))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let ctx = TestContext::new().await;
    ctx.enter_module("laboratorios").await;
    ctx.assign_class("Laboratorios-1", "Química", "Dra. Marta Gil", "08:00", "10:00")
        .await;

    let other: Value = ctx.server.post("/api/sessions").await.json();
    let other_id = other["id"].as_str().unwrap();
    ctx.server
        .put(&format!("/api/sessions/{}/module", other_id))
        .json(&serde_json::json!({ "module": "laboratorios" }))
        .await
        .assert_status_ok();

    let overview: Value = ctx
        .server
        .get(&format!("/api/sessions/{}/overview", other_id))
        .await
        .json();
    assert_eq!(overview["occupiedCount"], 0);
}

#[tokio::test]
async fn test_health_reports_sessions() {
    let ctx = TestContext::new().await;

    let body: Value = ctx.server.get("/health").await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sessions"], 1);

    let version: Value = ctx.server.get("/version").await.json();
    assert!(version["version"].as_str().is_some());
}
