//! User (credential record) Model
//!
//! One login-capable record per employee; created once by the
//! provisioning service and immutable thereafter.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::Role;
use super::serde_helpers;

/// User model matching the `user` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Business employee code, never empty: the provisioning service
    /// falls back to the owning employee's internal id string
    pub employee_code: String,
    pub name: String,
    /// Login identifier, matched case-sensitively
    pub email: String,
    /// Stored password value; argon2 PHC hash for all new records,
    /// possibly legacy plaintext for migrated data
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    /// Owning employee reference; unique index enforces at most one
    /// user per employee
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    #[serde(default)]
    pub created_at: i64,
}

/// Public view of a user, safe to return to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub employee_id: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            employee_code: user.employee_code.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            employee_id: user.employee.to_string(),
        }
    }
}
