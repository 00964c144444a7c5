// ABOUTME: Integration tests for workout CRUD and completion routes
// ABOUTME: Exercises list/create/update/delete and the partner completion toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

mod common;

use axum::http::StatusCode;
use common::{create_test_app, run_workout_body, TestRequest};
use serde_json::json;

#[tokio::test]
async fn test_list_starts_empty() {
    let (_resources, app) = create_test_app().await;
    let response = TestRequest::get("/api/workouts").send(&app).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_assigns_id_and_returns_201() {
    let (_resources, app) = create_test_app().await;
    let response = TestRequest::post("/api/workouts")
        .json(&run_workout_body("2025-03-10", 8.0))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["id"].is_string());
    assert_eq!(response.body["type"], "run");
    assert_eq!(response.body["date"], "2025-03-10");
    assert_eq!(response.body["completedBy"], json!([]));

    let list = TestRequest::get("/api/workouts").send(&app).await;
    assert_eq!(list.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_list_filters_by_date() {
    let (_resources, app) = create_test_app().await;
    for date in ["2025-03-10", "2025-03-10", "2025-03-11"] {
        TestRequest::post("/api/workouts")
            .json(&run_workout_body(date, 5.0))
            .send(&app)
            .await;
    }

    let response = TestRequest::get("/api/workouts?date=2025-03-10")
        .send(&app)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));

    let bad = TestRequest::get("/api/workouts?date=not-a-date")
        .send(&app)
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_partial_update_merges_fields() {
    let (_resources, app) = create_test_app().await;
    let created = TestRequest::post("/api/workouts")
        .json(&run_workout_body("2025-03-10", 8.0))
        .send(&app)
        .await;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let response = TestRequest::put(&format!("/api/workouts/{id}"))
        .json(&json!({ "title": "Tempo run", "duration": 50 }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Tempo run");
    assert_eq!(response.body["duration"], 50);
    // Untouched fields survive the merge
    assert_eq!(response.body["distance"], 8.0);
    assert_eq!(response.body["id"], id.as_str());
}

#[tokio::test]
async fn test_update_with_null_clears_optionals() {
    let (_resources, app) = create_test_app().await;
    let created = TestRequest::post("/api/workouts")
        .json(&run_workout_body("2025-03-10", 8.0))
        .send(&app)
        .await;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let response = TestRequest::put(&format!("/api/workouts/{id}"))
        .json(&json!({ "distance": null }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("distance").is_none());
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let (_resources, app) = create_test_app().await;
    let response = TestRequest::put("/api/workouts/6f9619ff-8b86-4d01-b42d-00cf4fc964ff")
        .json(&json!({ "title": "Ghost" }))
        .send(&app)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_then_404() {
    let (_resources, app) = create_test_app().await;
    let created = TestRequest::post("/api/workouts")
        .json(&run_workout_body("2025-03-10", 8.0))
        .send(&app)
        .await;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let deleted = TestRequest::delete(&format!("/api/workouts/{id}"))
        .send(&app)
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = TestRequest::delete(&format!("/api/workouts/{id}"))
        .send(&app)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_completion_toggle_per_partner() {
    let (_resources, app) = create_test_app().await;
    let created = TestRequest::post("/api/workouts")
        .json(&run_workout_body("2025-03-10", 8.0))
        .send(&app)
        .await;
    let id = created.body["id"].as_str().unwrap().to_owned();
    let uri = format!("/api/workouts/{id}/completion");

    let first = TestRequest::put(&uri)
        .json(&json!({ "partner": "partner1" }))
        .send(&app)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["completedBy"], json!(["partner1"]));

    let second = TestRequest::put(&uri)
        .json(&json!({ "partner": "partner2" }))
        .send(&app)
        .await;
    assert_eq!(second.body["completedBy"], json!(["partner1", "partner2"]));

    // Toggling again removes only that partner's flag
    let third = TestRequest::put(&uri)
        .json(&json!({ "partner": "partner1" }))
        .send(&app)
        .await;
    assert_eq!(third.body["completedBy"], json!(["partner2"]));
}

#[tokio::test]
async fn test_unknown_partner_value_is_structured_400() {
    let (_resources, app) = create_test_app().await;
    let created = TestRequest::post("/api/workouts")
        .json(&run_workout_body("2025-03-10", 8.0))
        .send(&app)
        .await;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let response = TestRequest::put(&format!("/api/workouts/{id}/completion"))
        .raw_body(r#"{ "partner": "partner3" }"#)
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "INVALID_FORMAT");
    assert!(response.body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_syntactically_invalid_body_is_structured_400() {
    let (_resources, app) = create_test_app().await;
    let response = TestRequest::post("/api/workouts")
        .raw_body("not json {")
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_health_and_ready() {
    let (_resources, app) = create_test_app().await;
    let health = TestRequest::get("/api/health").send(&app).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");

    let ready = TestRequest::get("/api/ready").send(&app).await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["status"], "ready");
}
