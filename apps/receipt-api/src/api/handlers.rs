//! Request handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use crate::error::ApiError;
use crate::AppState;

/// POST /receipts/process
///
/// Body rejections (not JSON, wrong content type) are reported in the API's
/// own error shape rather than axum's plain-text default.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let Json(raw) = body.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
    let id = state.service.process_receipt(&raw).await?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// GET /receipts/{id}/points
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.service.get_points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        receipts: state.service.store().len().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
