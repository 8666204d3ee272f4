//! HTTP adapter for schedule endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateScheduleRequest, ScheduleResponse, StatusQuery, StatusResponse};
pub use handlers::ScheduleHandlers;
pub use routes::schedule_routes;
