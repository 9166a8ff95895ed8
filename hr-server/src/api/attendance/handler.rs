//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::AttendanceRow;
use crate::db::repository::AttendanceRepository;
use crate::utils::{AppResult, time};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Optional `YYYY-MM` filter; anything malformed is rejected
    pub month: Option<String>,
}

fn month_range(
    query: &MonthQuery,
    tz: chrono_tz::Tz,
) -> AppResult<Option<(i64, i64)>> {
    match query.month.as_deref() {
        Some(month) => Ok(Some(time::parse_month_range(month, tz)?)),
        None => Ok(None),
    }
}

/// Attendance history of a single employee, newest first
pub async fn for_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<AttendanceRow>>> {
    let range = month_range(&query, state.config.timezone)?;
    let repo = AttendanceRepository::new(state.get_db());
    let rows = repo.find_for_employee(&employee_id, range).await?;
    Ok(Json(rows))
}

/// Attendance across the whole company, newest first
pub async fn all(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<AttendanceRow>>> {
    let range = month_range(&query, state.config.timezone)?;
    let repo = AttendanceRepository::new(state.get_db());
    let rows = repo.find_all(range).await?;
    Ok(Json(rows))
}
