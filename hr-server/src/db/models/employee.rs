//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Employee ID type
pub type EmployeeRecordId = RecordId;

/// Organizational role of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "employee")]
    Employee,
    #[serde(rename = "project-manager")]
    ProjectManager,
    #[serde(rename = "hr")]
    Hr,
    #[serde(rename = "director")]
    Director,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::ProjectManager => "project-manager",
            Role::Hr => "hr",
            Role::Director => "director",
        }
    }
}

/// Credential provisioning state; transitions Pending -> Completed
/// exactly once and never reverts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialStatus {
    Pending,
    Completed,
}

impl Default for CredentialStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Status of an embedded project assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Project/task assignment embedded in an employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAssignment {
    /// Stable task id inside the embedded list
    pub task_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Employee model matching the `employee` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeRecordId>,
    /// Business employee code, optional and distinct from the internal id
    #[serde(default)]
    pub employee_code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub credential_status: CredentialStatus,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub assigned_hr: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub assigned_pm: Option<RecordId>,
    #[serde(default)]
    pub projects: Vec<ProjectAssignment>,
    /// Denormalized convenience fields, not authoritative (the
    /// attendance table is)
    #[serde(default)]
    pub last_login_at: Option<i64>,
    #[serde(default)]
    pub last_logout_at: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
}

fn default_status() -> String {
    "Active".to_string()
}

impl Employee {
    /// Business id with internal-id fallback: the business code when
    /// present and non-blank, else the internal id rendered as text
    pub fn business_id_or_internal(&self) -> String {
        match &self.employee_code {
            Some(code) if !code.trim().is_empty() => code.clone(),
            _ => self
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default)]
    pub employee_code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub assigned_hr: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub assigned_pm: Option<RecordId>,
}

/// Update employee payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub assigned_hr: Option<RecordId>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub assigned_pm: Option<RecordId>,
}

/// Basic projection used by directory listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBasic {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}
