//! HTTP routes for schedule endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_schedule, export_schedule, get_schedule, get_status, ScheduleHandlers,
};

/// Creates the schedule router, mounted under `/api/schedules`.
pub fn schedule_routes(handlers: ScheduleHandlers) -> Router {
    Router::new()
        .route("/:user_id", post(create_schedule).get(get_schedule))
        .route("/:user_id/status", get(get_status))
        .route("/:user_id/export", get(export_schedule))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::document::LocalExportStorage;
    use crate::adapters::storage::InMemoryScheduleRepository;
    use crate::domain::foundation::CourseDate;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn router(exports: &TempDir) -> Router {
        let handlers = ScheduleHandlers::from_ports(
            Arc::new(InMemoryScheduleRepository::new()),
            Arc::new(LocalExportStorage::new(exports.path())),
            Arc::new(FixedClock::new(CourseDate::parse("02.01.2024").unwrap())),
        );
        schedule_routes(handlers)
    }

    fn create_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/42")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_schedule() {
        let exports = TempDir::new().unwrap();
        let response = router(&exports)
            .oneshot(create_request(r#"{"weight": 70, "start_date": "01.01.2024"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json(response).await;
        assert_eq!(body["end_date"], "09.03.2024");
        assert_eq!(body["days"], 69);
        assert!(exports.path().join("vitamin_schedule_42.txt").exists());
    }

    #[tokio::test]
    async fn create_rejects_bad_weight_and_date() {
        let exports = TempDir::new().unwrap();

        let response = router(&exports)
            .oneshot(create_request(r#"{"weight": -1, "start_date": "01.01.2024"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["code"], "INVALID_WEIGHT");

        let response = router(&exports)
            .oneshot(create_request(r#"{"weight": 70, "start_date": "2024-01-01"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["code"], "INVALID_DATE");
    }

    #[tokio::test]
    async fn unknown_user_is_404() {
        let exports = TempDir::new().unwrap();

        for uri in ["/7", "/7/status", "/7/export"] {
            let response = router(&exports).oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[tokio::test]
    async fn status_and_export_after_create() {
        let exports = TempDir::new().unwrap();
        let app = router(&exports);

        let response = app
            .clone()
            .oneshot(create_request(r#"{"weight": 70, "start_date": "01.01.2024"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.clone().oneshot(get_request("/42/status")).await.unwrap();
        let body = json(response).await;
        assert_eq!(body["state"], "in_progress");
        assert_eq!(body["dose"], 0.4);

        let response = app
            .clone()
            .oneshot(get_request("/42/status?date=31.12.2023"))
            .await
            .unwrap();
        let body = json(response).await;
        assert_eq!(body["state"], "not_started");
        assert_eq!(body["starting_dose"], 0.2);

        let response = app.clone().oneshot(get_request("/42/export")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"vitamin_schedule_42.txt\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8(bytes.to_vec())
            .unwrap()
            .starts_with("Date\tDose\n01.01.2024\t0.2"));
    }

    #[tokio::test]
    async fn malformed_status_date_is_400() {
        let exports = TempDir::new().unwrap();
        let response = router(&exports)
            .oneshot(get_request("/42/status?date=tomorrow"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
