//! Attendance Model
//!
//! One record per (employee, calendar day); the natural key is enforced
//! by a unique index at the storage layer.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Presence status for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        Self::Present
    }
}

/// Attendance model matching the `attendance` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    /// Day key: local midnight in the business timezone, Unix millis
    pub date: i64,
    /// First sign-in of the day; None only for manually repaired rows
    #[serde(default)]
    pub login_at: Option<i64>,
    /// First sign-out of the day; later sign-outs do not overwrite
    #[serde(default)]
    pub logout_at: Option<i64>,
    #[serde(default)]
    pub status: AttendanceStatus,
}

/// Attendance row with employee fields joined in, as returned by the
/// listing queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRow {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub date: i64,
    #[serde(default)]
    pub login_at: Option<i64>,
    #[serde(default)]
    pub logout_at: Option<i64>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
    #[serde(default)]
    pub employee_position: Option<String>,
    #[serde(default)]
    pub employee_department: Option<String>,
}
