//! Integration tests for the chat dialog over HTTP.
//!
//! These tests drive the full application router with the on-disk adapters:
//! 1. A user walks through the calculation dialog
//! 2. The schedule lands in the JSON data file in the persisted format
//! 3. A fresh process (new adapters over the same files) still sees it

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use vitamin_bot::adapters::http::{app_router, ChatHandlers, ScheduleHandlers};
use vitamin_bot::adapters::{
    FixedClock, InMemoryDialogStateStore, JsonFileScheduleRepository, LocalExportStorage,
};
use vitamin_bot::application::ChatHandler;
use vitamin_bot::domain::foundation::CourseDate;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(dir: &TempDir, today: &str) -> Router {
    let repository = Arc::new(JsonFileScheduleRepository::new(
        dir.path().join("user_data.json"),
    ));
    let storage = Arc::new(LocalExportStorage::new(dir.path().join("exports")));
    let clock = Arc::new(FixedClock::new(CourseDate::parse(today).unwrap()));
    let chat = ChatHandler::new(
        repository.clone(),
        storage.clone(),
        Arc::new(InMemoryDialogStateStore::new()),
        clock.clone(),
    );
    app_router(
        ChatHandlers::new(Arc::new(chat)),
        ScheduleHandlers::from_ports(repository, storage, clock),
        Duration::from_secs(5),
    )
}

async fn say(app: &Router, user_id: i64, text: &str) -> Vec<Value> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "user_id": user_id, "text": text }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["replies"].as_array().cloned().unwrap_or_default()
}

fn buttons(reply: &Value) -> Vec<String> {
    reply["keyboard"]["rows"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|row| row.as_array().cloned().unwrap_or_default())
        .filter_map(|b| b.as_str().map(str::to_string))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn calculation_dialog_persists_schedule() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, "15.12.2023");

    let replies = say(&app, 1001, "/start").await;
    assert_eq!(buttons(&replies[0]), vec!["Get calculation"]);

    let replies = say(&app, 1001, "Get calculation").await;
    assert_eq!(replies[0]["remove_keyboard"], true);

    let replies = say(&app, 1001, "70").await;
    assert!(replies[0]["text"]
        .as_str()
        .unwrap()
        .contains("Minimum dose: 0.2 ml"));

    let replies = say(&app, 1001, "01.01.2024").await;
    assert_eq!(replies.len(), 3);
    let summary = replies[0]["text"].as_str().unwrap();
    assert!(summary.contains("Dates: 01.01.2024 - 09.03.2024"));
    assert!(summary.contains("The course starts in 17 days"));
    assert_eq!(replies[1]["document"]["filename"], "vitamin_schedule_1001.txt");
    assert_eq!(
        buttons(&replies[2]),
        vec!["Get calculation", "Download schedule", "Current dose"]
    );

    // Persisted format: one object keyed by the decimal user id
    let raw = std::fs::read_to_string(dir.path().join("user_data.json")).unwrap();
    let data: Value = serde_json::from_str(&raw).unwrap();
    let record = &data["1001"];
    assert_eq!(record["weight"], 70.0);
    assert_eq!(record["min_dose"], 0.2);
    assert_eq!(record["max_dose"], 7.0);
    assert_eq!(record["step"], 0.2);
    assert_eq!(record["start_date"], "01.01.2024");
    assert_eq!(record["end_date"], "09.03.2024");
    assert_eq!(record["schedule"].as_array().unwrap().len(), 69);
    assert_eq!(record["schedule"][34], json!({"date": "04.02.2024", "dose": 7.0}));

    assert!(dir.path().join("exports/vitamin_schedule_1001.txt").exists());
}

#[tokio::test]
async fn saved_schedule_survives_restart() {
    let dir = TempDir::new().unwrap();

    let first = app(&dir, "01.01.2024");
    say(&first, 7, "95").await;
    say(&first, 7, "01.01.2024").await;
    drop(first);

    let restarted = app(&dir, "19.01.2024");
    let replies = say(&restarted, 7, "Current dose").await;
    assert_eq!(replies[0]["text"], "Today (19.01.2024) dose: 8.0 ml");
    drop(restarted);

    let next_day = app(&dir, "20.01.2024");
    let replies = say(&next_day, 7, "Current dose").await;
    assert_eq!(replies[0]["text"], "Today (20.01.2024) dose: 7.6 ml");
}

#[tokio::test]
async fn users_do_not_share_dialogs_or_schedules() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, "01.01.2024");

    say(&app, 1, "50").await;
    let replies = say(&app, 2, "01.01.2024").await;
    assert_eq!(replies[0]["text"], "Enter a valid weight (a number > 0)");

    say(&app, 1, "01.01.2024").await;
    let replies = say(&app, 2, "Download schedule").await;
    assert_eq!(
        replies[0]["text"],
        "No saved schedule yet. Get a calculation first."
    );

    let replies = say(&app, 1, "Download schedule").await;
    assert_eq!(replies[0]["document"]["filename"], "vitamin_schedule_1.txt");
}

#[tokio::test]
async fn recalculation_replaces_previous_course() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, "01.01.2024");

    say(&app, 5, "70").await;
    say(&app, 5, "01.01.2024").await;
    say(&app, 5, "45").await;
    say(&app, 5, "01.02.2024").await;

    let raw = std::fs::read_to_string(dir.path().join("user_data.json")).unwrap();
    let data: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(data.as_object().unwrap().len(), 1);
    assert_eq!(data["5"]["start_date"], "01.02.2024");
    assert_eq!(data["5"]["max_dose"], 4.0);
}
