//! Credential Provisioning Service
//!
//! Creates the login-capable user record for an employee: at most one
//! user per employee, business-id fallback, and the Pending ->
//! Completed credential-status transition.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::hash_password;
use crate::db::models::{Role, User};
use crate::db::repository::{EmployeeRepository, RepoError, UserRepository, user::UserCreate};
use crate::utils::{AppError, AppResult, time};

/// Desired credentials for one employee
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CredentialRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone)]
pub struct ProvisioningService {
    employees: EmployeeRepository,
    users: UserRepository,
}

impl ProvisioningService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }

    /// Provision credentials for the employee.
    ///
    /// The user insert is the atomic create-if-absent point (unique
    /// index on the employee reference); the status update that follows
    /// is idempotent. A crash between the two writes is repaired by a
    /// repeat call: the insert conflicts, the status is re-marked
    /// Completed, and the caller still sees Conflict as "already
    /// processed".
    pub async fn provision(&self, employee_id: &str, req: CredentialRequest) -> AppResult<User> {
        if req.email.trim().is_empty() || req.password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {} not found", employee_id)))?;
        let employee_ref = employee
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Employee record has no id"))?;

        // Business code when present and non-blank, else internal id
        let employee_code = employee.business_id_or_internal();

        // New credentials are only ever stored hashed
        let password = hash_password(&req.password)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

        let created = self
            .users
            .create(
                UserCreate {
                    employee_code,
                    name: employee.name.clone(),
                    email: req.email,
                    password,
                    role: req.role,
                    employee: employee_ref.clone(),
                },
                time::now_millis(),
            )
            .await;

        match created {
            Ok(user) => {
                self.employees
                    .mark_credentials_completed(&employee_ref)
                    .await?;
                tracing::info!(
                    employee = %employee_ref,
                    user = %user.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                    "Credentials provisioned"
                );
                Ok(user)
            }
            Err(RepoError::Duplicate(msg)) => {
                // Already provisioned. Re-mark the status so a crash
                // between the two writes converges on Completed.
                self.employees
                    .mark_credentials_completed(&employee_ref)
                    .await?;
                Err(AppError::conflict(msg))
            }
            Err(e) => Err(e.into()),
        }
    }
}
