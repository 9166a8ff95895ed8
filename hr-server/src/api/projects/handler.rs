//! Project/Task API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::models::{Employee, ProjectAssignment, TaskStatus};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskRequest {
    pub employee_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Assign a new task to an employee; it starts Pending
pub async fn assign(
    State(state): State<ServerState>,
    Json(req): Json<AssignTaskRequest>,
) -> AppResult<Json<Employee>> {
    if req.title.trim().is_empty() {
        return Err(AppError::validation("Task title is required"));
    }

    let task = ProjectAssignment {
        task_id: Uuid::new_v4().to_string(),
        title: req.title,
        description: req.description,
        timeline: req.timeline,
        status: TaskStatus::Pending,
        files: req.files,
    };

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.push_task(&req.employee_id, task).await?;

    tracing::info!(employee = %req.employee_id, "Task assigned");
    Ok(Json(employee))
}

/// Tasks assigned to one employee
pub async fn tasks(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<ProjectAssignment>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&employee_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", employee_id)))?;
    Ok(Json(employee.projects))
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

/// Update a task's details in place
pub async fn update_task(
    State(state): State<ServerState>,
    Path((employee_id, task_id)): Path<(String, String)>,
    Json(req): Json<UpdateTaskRequest>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .replace_task(&employee_id, &task_id, |task| {
            if let Some(title) = req.title {
                task.title = title;
            }
            if let Some(description) = req.description {
                task.description = Some(description);
            }
            if let Some(timeline) = req.timeline {
                task.timeline = Some(timeline);
            }
            if let Some(files) = req.files {
                task.files = files;
            }
        })
        .await?;
    Ok(Json(employee))
}

#[derive(Debug, Deserialize)]
pub struct TaskStatusRequest {
    pub status: String,
}

/// Set a task's workflow status
pub async fn set_status(
    State(state): State<ServerState>,
    Path((employee_id, task_id)): Path<(String, String)>,
    Json(req): Json<TaskStatusRequest>,
) -> AppResult<Json<Employee>> {
    let status = TaskStatus::parse(&req.status)
        .ok_or_else(|| AppError::validation(format!("Unknown task status: {}", req.status)))?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.set_task_status(&employee_id, &task_id, status).await?;
    Ok(Json(employee))
}
