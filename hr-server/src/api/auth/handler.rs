//! Authentication Handlers
//!
//! Sign-in, sign-out, credential provisioning and directory lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::{CurrentUser, StoredPassword};
use crate::core::ServerState;
use crate::db::models::{Employee, Role, UserSummary};
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::services::CredentialRequest;
use crate::utils::{AppError, AppResult, time};

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    #[serde(flatten)]
    pub user: UserSummary,
    pub token: String,
}

/// Sign-in handler
///
/// Verifies credentials, records attendance as a fire-and-forget side
/// effect, and returns a signed token.
pub async fn signin(
    State(state): State<ServerState>,
    Json(req): Json<SignInRequest>,
) -> AppResult<Json<SignInResponse>> {
    let users = UserRepository::new(state.get_db());

    // Unknown email and wrong password share one error; no leakage of
    // which case occurred
    let user = users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %req.email, "Sign-in failed - user not found");
            AppError::InvalidCredentials
        })?;

    let password_valid = StoredPassword::from_stored(&user.password)
        .verify(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        tracing::warn!(email = %req.email, "Sign-in failed - invalid credentials");
        return Err(AppError::InvalidCredentials);
    }

    // Attendance is best-effort: a failure here is logged on its own
    // channel and never aborts a successful sign-in
    let tracker = state.attendance_tracker();
    let employee = user.employee.clone();
    let now = time::now_millis();
    tokio::spawn(async move {
        if let Err(e) = tracker.record_sign_in(&employee, now).await {
            tracing::error!(employee = %employee, error = %e, "Failed to record sign-in attendance");
        }
    });

    let user_id = user.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let token = state
        .get_jwt_service()
        .generate_token(
            &user_id,
            &user.name,
            user.role.as_str(),
            &user.employee.to_string(),
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, role = %user.role.as_str(), "User signed in");

    Ok(Json(SignInResponse {
        user: UserSummary::from(&user),
        token,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub employee_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Sign-out handler
///
/// Marks the logout timestamp of today's attendance record; first
/// logout of the day wins.
pub async fn logout(
    State(state): State<ServerState>,
    Json(req): Json<LogoutRequest>,
) -> AppResult<Json<MessageResponse>> {
    let tracker = state.attendance_tracker();
    tracker
        .record_sign_out(&req.employee_id, time::now_millis())
        .await?;

    tracing::info!(employee = %req.employee_id, "User signed out");
    Ok(Json(MessageResponse {
        message: "Logout successful".to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Create login credentials for an employee
pub async fn create_credentials(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
    Json(req): Json<CredentialRequest>,
) -> AppResult<Json<CredentialResponse>> {
    let user = state
        .provisioning_service()
        .provision(&employee_id, req)
        .await?;

    Ok(Json(CredentialResponse {
        message: "Credentials created".to_string(),
        user: UserSummary::from(&user),
    }))
}

/// Provisioned users with the employee role
pub async fn assigned_employees(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = UserRepository::new(state.get_db());
    let employees = users.find_by_role(Role::Employee.as_str()).await?;
    Ok(Json(employees.iter().map(UserSummary::from).collect()))
}

/// Employees with the project-manager role
pub async fn project_managers(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let pms = repo.find_by_role(Role::ProjectManager.as_str()).await?;
    Ok(Json(pms))
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub employee_id: String,
}

/// Current token holder, from validated claims
pub async fn me(user: CurrentUser) -> AppResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        id: user.id,
        name: user.name,
        role: user.role,
        employee_id: user.employee_id,
    }))
}
