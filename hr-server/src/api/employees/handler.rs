//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeBasic, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult, time};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Minimal directory projection
pub async fn list_basic(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeBasic>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all_basic().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// Create a new employee record (no login credentials yet)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(AppError::validation("Name and email are required"));
    }

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(payload, time::now_millis()).await?;

    tracing::info!(
        employee = %employee.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        "Employee created"
    );
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EmployeeRepository::new(state.get_db());
    let deleted = repo.delete(&id).await?;
    Ok(Json(deleted))
}

/// Employees assigned to an HR; an empty assignment list is a 404
pub async fn list_by_hr(
    State(state): State<ServerState>,
    Path(hr_id): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_by_assigned_hr(&hr_id).await?;
    if employees.is_empty() {
        return Err(AppError::not_found("No employees found for this HR"));
    }
    Ok(Json(employees))
}

/// Employees assigned to a project manager; an empty assignment list is
/// a 404
pub async fn list_by_pm(
    State(state): State<ServerState>,
    Path(pm_id): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_by_assigned_pm(&pm_id).await?;
    if employees.is_empty() {
        return Err(AppError::not_found("No employees found for this manager"));
    }
    Ok(Json(employees))
}
