//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; `app_router` mounts them all:
//!
//! - `GET  /health`
//! - `POST /api/chat/messages`
//! - `/api/schedules/:user_id[/status|/export]`

pub mod chat;
mod error;
pub mod schedule;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use chat::{chat_routes, ChatHandlers};
pub use error::ErrorResponse;
pub use schedule::{schedule_routes, ScheduleHandlers};

/// Builds the complete application router with tracing and a request timeout.
pub fn app_router(
    chat: ChatHandlers,
    schedules: ScheduleHandlers,
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/chat", chat_routes(chat))
        .nest("/api/schedules", schedule_routes(schedules))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}
