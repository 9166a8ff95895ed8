//! Performance Report Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Performance report matching the `performance_report` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub task_id: String,
    pub title: String,
    pub description: String,
    #[serde(default = "default_report_status")]
    pub status: String,
    pub submitted_at: i64,
}

fn default_report_status() -> String {
    "Pending".to_string()
}

/// Submit performance report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSubmit {
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub task_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Report row with employee name/email joined in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRow {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub submitted_at: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
}
