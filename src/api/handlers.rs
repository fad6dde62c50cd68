//! HTTP request handlers for the attendance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
        rejection::JsonRejection,
    },
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::EmployeeReport;
use crate::pipeline::{UploadReport, process_upload};
use crate::report::load_report;
use crate::store::upsert_average;

use super::request::AverageRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

const FILE_FIELD: &str = "file";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/employees", get(employees_handler))
        .route("/average", post(average_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /upload.
///
/// Reads the `file` part of a multipart body and runs it through the upload
/// pipeline. An unreadable report is not an error: it yields an empty
/// insert for the unknown period.
async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadReport> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing upload request");

    let mut multipart = multipart.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Rejected upload body");
        ApiErrorResponse::bad_request(ApiError::malformed_multipart(rejection.body_text()))
    })?;

    let (file_name, bytes) = loop {
        let field = multipart.next_field().await.map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Malformed multipart body");
            ApiErrorResponse::bad_request(ApiError::malformed_multipart(err.body_text()))
        })?;

        let Some(field) = field else {
            warn!(correlation_id = %correlation_id, "Upload without a file part");
            return Err(ApiErrorResponse::bad_request(ApiError::missing_file()));
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|err| {
            ApiErrorResponse::bad_request(ApiError::malformed_multipart(err.body_text()))
        })?;
        break (file_name, bytes);
    };

    let started = Instant::now();
    let config = state.shared_config();
    let store = state.store();
    let task_file_name = file_name.clone();

    let report = tokio::task::spawn_blocking(move || {
        process_upload(&bytes, &task_file_name, config.config(), store.as_ref())
    })
    .await
    .map_err(|err| {
        ApiErrorResponse::internal(ApiError::with_details(
            "UPLOAD_FAILED",
            "Upload processing was interrupted",
            err.to_string(),
        ))
    })?
    .map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Upload failed");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        file_name = %file_name,
        period = %report.period,
        employees = report.employees,
        duration_us = started.elapsed().as_micros(),
        "Upload completed"
    );

    Ok(Json(report))
}

/// Handler for GET /employees.
async fn employees_handler(
    State(state): State<AppState>,
) -> ApiResult<BTreeMap<String, EmployeeReport>> {
    let correlation_id = Uuid::new_v4();

    let report = load_report(state.store().as_ref()).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Report failed");
        ApiErrorResponse::from(err)
    })?;

    info!(correlation_id = %correlation_id, employees = report.len(), "Served employee report");
    Ok(Json(report))
}

/// Handler for POST /average.
async fn average_handler(
    State(state): State<AppState>,
    payload: Result<Json<AverageRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let correlation_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Rejected average body");
        let error = match rejection {
            JsonRejection::JsonDataError(err) => ApiError::validation_error(err.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            other => ApiError::malformed_json(other.body_text()),
        };
        ApiErrorResponse::bad_request(error)
    })?;

    upsert_average(
        state.store().as_ref(),
        request.name.as_deref(),
        request.average,
    )
    .map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Average update rejected");
        ApiErrorResponse::from(err)
    })?;

    Ok(Json(json!({ "status": "updated" })))
}

/// Handler for GET /health.
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
