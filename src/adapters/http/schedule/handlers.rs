//! HTTP handlers for schedule endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::schedule::{
    ExportScheduleCommand, ExportScheduleHandler, GenerateScheduleCommand,
    GenerateScheduleHandler, GetCurrentDoseHandler, GetCurrentDoseQuery, GetScheduleHandler,
    GetScheduleQuery, ScheduleHandlerError,
};
use crate::domain::foundation::{CourseDate, DomainError, UserId, ValidationError, Weight};
use crate::ports::{Clock, ExportFileStorage, ScheduleRepository};

use super::dto::{CreateScheduleRequest, ScheduleResponse, StatusQuery, StatusResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScheduleHandlers {
    generate_handler: Arc<GenerateScheduleHandler>,
    get_handler: Arc<GetScheduleHandler>,
    current_dose_handler: Arc<GetCurrentDoseHandler>,
    export_handler: Arc<ExportScheduleHandler>,
}

impl ScheduleHandlers {
    pub fn new(
        generate_handler: Arc<GenerateScheduleHandler>,
        get_handler: Arc<GetScheduleHandler>,
        current_dose_handler: Arc<GetCurrentDoseHandler>,
        export_handler: Arc<ExportScheduleHandler>,
    ) -> Self {
        Self {
            generate_handler,
            get_handler,
            current_dose_handler,
            export_handler,
        }
    }

    /// Builds every schedule handler over the same ports.
    pub fn from_ports(
        repository: Arc<dyn ScheduleRepository>,
        export_storage: Arc<dyn ExportFileStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::new(
            Arc::new(GenerateScheduleHandler::new(
                repository.clone(),
                export_storage.clone(),
            )),
            Arc::new(GetScheduleHandler::new(repository.clone())),
            Arc::new(GetCurrentDoseHandler::new(repository.clone(), clock)),
            Arc::new(ExportScheduleHandler::new(repository, export_storage)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/schedules/:user_id - Compute and save a course
pub async fn create_schedule(
    State(handlers): State<ScheduleHandlers>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateScheduleRequest>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let weight = match Weight::try_new(req.weight) {
        Ok(weight) => weight,
        Err(e) => return validation_error(e),
    };
    let start_date = match CourseDate::parse(&req.start_date) {
        Ok(date) => date,
        Err(e) => return validation_error(e),
    };

    let cmd = GenerateScheduleCommand {
        user_id,
        weight,
        start_date,
    };

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(ScheduleResponse::new(user_id, &result.schedule)),
        )
            .into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/schedules/:user_id - Saved course
pub async fn get_schedule(
    State(handlers): State<ScheduleHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetScheduleQuery { user_id }).await {
        Ok(schedule) => (
            StatusCode::OK,
            Json(ScheduleResponse::new(user_id, &schedule)),
        )
            .into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/schedules/:user_id/status - Course status today or on `?date=`
pub async fn get_status(
    State(handlers): State<ScheduleHandlers>,
    Path(user_id): Path<String>,
    Query(params): Query<StatusQuery>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let on = match params.date.as_deref().map(CourseDate::parse).transpose() {
        Ok(on) => on,
        Err(e) => return validation_error(e),
    };

    match handlers
        .current_dose_handler
        .handle(GetCurrentDoseQuery { user_id, on })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(StatusResponse::new(user_id, result))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/schedules/:user_id/export - Tab-separated attachment
pub async fn export_schedule(
    State(handlers): State<ScheduleHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .export_handler
        .handle(ExportScheduleCommand { user_id })
        .await
    {
        Ok(document) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, document.content_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", document.filename),
                ),
            ],
            document.content,
        )
            .into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_user_id(raw: &str) -> Result<UserId, Response> {
    raw.parse::<UserId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid user ID")),
        )
            .into_response()
    })
}

fn validation_error(error: ValidationError) -> Response {
    tracing::warn!(error = %error, "Rejected schedule request");
    let body: ErrorResponse = DomainError::from(error).into();
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn handle_schedule_error(error: ScheduleHandlerError) -> Response {
    match error {
        ScheduleHandlerError::Validation(e) => validation_error(e),
        ScheduleHandlerError::NotFound(user_id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Schedule", &user_id.to_string())),
        )
            .into_response(),
        ScheduleHandlerError::Repository(_) | ScheduleHandlerError::Export(_) => {
            tracing::error!(error = %error, "Schedule request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
