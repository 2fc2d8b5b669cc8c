use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

/// Module B with the detail overlay open on room B04.
async fn with_open_room() -> TestContext {
    let ctx = TestContext::new().await;
    ctx.enter_module("modulo-b").await;
    ctx.server
        .post(&ctx.room_path("Módulo B-4"))
        .await
        .assert_status_ok();
    ctx
}

async fn patch_field(ctx: &TestContext, field: &str, value: &str) -> Value {
    let response = ctx
        .server
        .patch(&ctx.path("/draft"))
        .json(&json!({ "field": field, "value": value }))
        .await;
    response.assert_status_ok();
    response.json()
}

async fn patch_slot(ctx: &TestContext, index: usize, field: &str, value: &str) -> Value {
    let response = ctx
        .server
        .patch(&ctx.path(&format!("/draft/slots/{}", index)))
        .json(&json!({ "field": field, "value": value }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_open_draft_starts_empty() {
    let ctx = with_open_room().await;

    let response = ctx.server.post(&ctx.path("/draft")).await;
    response.assert_status(StatusCode::CREATED);

    let view: Value = response.json();
    assert_eq!(view["roomCode"], "M04");
    assert_eq!(view["isValid"], false);
    assert_eq!(
        view["draft"],
        json!({
            "className": "",
            "professor": "",
            "coordinator": "",
            "schedule": [{ "day": "Lunes", "startTime": "", "endTime": "" }]
        })
    );

    // the form replaces the detail overlay
    let session: Value = ctx.server.get(&ctx.path("")).await.json();
    assert_eq!(session["detailOpen"], false);
    assert_eq!(session["addClassOpen"], true);
}

#[tokio::test]
async fn test_draft_requires_open_form() {
    let ctx = with_open_room().await;

    ctx.server
        .get(&ctx.path("/draft"))
        .await
        .assert_status(StatusCode::CONFLICT);
    ctx.server
        .patch(&ctx.path("/draft"))
        .json(&json!({ "field": "className", "value": "Álgebra" }))
        .await
        .assert_status(StatusCode::CONFLICT);
    ctx.server
        .post(&ctx.path("/draft/submit"))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_open_draft_without_selection() {
    let ctx = TestContext::new().await;
    ctx.enter_module("modulo-b").await;

    ctx.server
        .post(&ctx.path("/draft"))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_open_draft_on_occupied_room() {
    let ctx = TestContext::new().await;
    ctx.enter_module("modulo-b").await;
    ctx.assign_class("Módulo B-4", "Álgebra", "Dra. Ana Ruiz", "08:00", "10:00")
        .await;

    ctx.server
        .post(&ctx.room_path("Módulo B-4"))
        .await
        .assert_status_ok();
    ctx.server
        .post(&ctx.path("/draft"))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_full_flow_assigns_class() {
    let ctx = with_open_room().await;
    ctx.server
        .post(&ctx.path("/draft"))
        .await
        .assert_status(StatusCode::CREATED);

    patch_field(&ctx, "className", "Cálculo I").await;
    patch_field(&ctx, "professor", "Dr. Carlos Méndez").await;
    let view = patch_field(&ctx, "coordinator", "Dra. Ana Ruiz").await;
    assert_eq!(view["isValid"], false);

    patch_slot(&ctx, 0, "startTime", "10:00").await;
    let view = patch_slot(&ctx, 0, "endTime", "12:00").await;
    assert_eq!(view["isValid"], true);

    let view: Value = ctx.server.post(&ctx.path("/draft/slots")).await.json();
    assert_eq!(view["draft"]["schedule"].as_array().unwrap().len(), 2);
    assert_eq!(view["isValid"], false);

    patch_slot(&ctx, 1, "day", "Miércoles").await;
    patch_slot(&ctx, 1, "startTime", "14:00").await;
    let view = patch_slot(&ctx, 1, "endTime", "16:00").await;
    assert_eq!(view["isValid"], true);

    let notice: Value = ctx.server.post(&ctx.path("/draft/submit")).await.json();
    assert_eq!(
        notice["message"],
        "Clase \"Cálculo I\" agregada exitosamente al aula M04"
    );

    let session: Value = ctx.server.get(&ctx.path("")).await.json();
    assert_eq!(session["addClassOpen"], false);

    let detail: Value = ctx.server.post(&ctx.room_path("Módulo B-4")).await.json();
    assert_eq!(detail["status"], "Ocupada");
    assert_eq!(detail["room"]["className"], "Cálculo I");
    assert_eq!(detail["room"]["professor"], "Dr. Carlos Méndez");
    assert_eq!(
        detail["room"]["schedule"],
        json!([
            { "day": "Lunes", "startTime": "10:00", "endTime": "12:00" },
            { "day": "Miércoles", "startTime": "14:00", "endTime": "16:00" }
        ])
    );
}

#[tokio::test]
async fn test_submit_invalid_draft() {
    let ctx = with_open_room().await;
    ctx.server.post(&ctx.path("/draft")).await;

    patch_field(&ctx, "className", "Cálculo I").await;
    patch_field(&ctx, "professor", "Dr. Carlos Méndez").await;
    patch_field(&ctx, "coordinator", "Dra. Ana Ruiz").await;
    patch_slot(&ctx, 0, "startTime", "12:00").await;
    patch_slot(&ctx, 0, "endTime", "10:00").await;

    let response = ctx.server.post(&ctx.path("/draft/submit")).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // the form stays open with its contents
    let view: Value = ctx.server.get(&ctx.path("/draft")).await.json();
    assert_eq!(view["draft"]["className"], "Cálculo I");

    let overview: Value = ctx.server.get(&ctx.path("/overview")).await.json();
    assert_eq!(overview["occupiedCount"], 0);
}

#[tokio::test]
async fn test_slot_errors() {
    let ctx = with_open_room().await;
    ctx.server.post(&ctx.path("/draft")).await;

    ctx.server
        .patch(&ctx.path("/draft/slots/0"))
        .json(&json!({ "field": "day", "value": "Domingo" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.server
        .patch(&ctx.path("/draft/slots/3"))
        .json(&json!({ "field": "startTime", "value": "08:00" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.server
        .delete(&ctx.path("/draft/slots/3"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_slot_keeps_last_one() {
    let ctx = with_open_room().await;
    ctx.server.post(&ctx.path("/draft")).await;

    ctx.server.post(&ctx.path("/draft/slots")).await;
    patch_slot(&ctx, 1, "day", "Viernes").await;

    let view: Value = ctx.server.delete(&ctx.path("/draft/slots/0")).await.json();
    let schedule = view["draft"]["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0]["day"], "Viernes");

    let view: Value = ctx.server.delete(&ctx.path("/draft/slots/0")).await.json();
    assert_eq!(view["draft"]["schedule"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_close_draft_resets_form() {
    let ctx = with_open_room().await;
    ctx.server.post(&ctx.path("/draft")).await;
    patch_field(&ctx, "className", "Cálculo I").await;

    ctx.server
        .delete(&ctx.path("/draft"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server
        .get(&ctx.path("/draft"))
        .await
        .assert_status(StatusCode::CONFLICT);

    ctx.server.post(&ctx.room_path("Módulo B-4")).await;
    let view: Value = ctx.server.post(&ctx.path("/draft")).await.json();
    assert_eq!(view["draft"]["className"], "");
}

#[tokio::test]
async fn test_submit_ignores_room_opened_while_form_is_open() {
    let ctx = TestContext::new().await;
    ctx.enter_module("modulo-b").await;
    ctx.assign_class("Módulo B-2", "Álgebra", "Dra. Ana Ruiz", "08:00", "10:00")
        .await;

    ctx.server.post(&ctx.room_path("Módulo B-4")).await;
    ctx.server.post(&ctx.path("/draft")).await;
    patch_field(&ctx, "className", "Cálculo I").await;
    patch_field(&ctx, "professor", "Dr. Carlos Méndez").await;
    patch_field(&ctx, "coordinator", "Dra. Ana Ruiz").await;
    patch_slot(&ctx, 0, "startTime", "10:00").await;
    patch_slot(&ctx, 0, "endTime", "12:00").await;

    ctx.server
        .post(&ctx.room_path("Módulo B-2"))
        .await
        .assert_status_ok();
    let view: Value = ctx.server.get(&ctx.path("/draft")).await.json();
    assert_eq!(view["roomCode"], "M04");

    let notice: Value = ctx.server.post(&ctx.path("/draft/submit")).await.json();
    assert_eq!(
        notice["message"],
        "Clase \"Cálculo I\" agregada exitosamente al aula M04"
    );

    let occupied: Value = ctx.server.post(&ctx.room_path("Módulo B-2")).await.json();
    assert_eq!(occupied["room"]["className"], "Álgebra");
}
