//! Performance Report API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{PerformanceReport, PerformanceRow, PerformanceSubmit};
use crate::db::repository::PerformanceRepository;
use crate::utils::{AppError, AppResult, time};

/// Submit a performance report for a finished task
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<PerformanceSubmit>,
) -> AppResult<Json<PerformanceReport>> {
    if payload.task_id.trim().is_empty()
        || payload.title.trim().is_empty()
        || payload.description.trim().is_empty()
    {
        return Err(AppError::validation(
            "Task id, title and description are required",
        ));
    }

    let repo = PerformanceRepository::new(state.get_db());
    let report = repo.create(payload, time::now_millis()).await?;
    Ok(Json(report))
}

/// All reports with employee identity joined, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PerformanceRow>>> {
    let repo = PerformanceRepository::new(state.get_db());
    let rows = repo.find_all().await?;
    Ok(Json(rows))
}
