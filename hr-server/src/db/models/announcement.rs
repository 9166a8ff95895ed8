//! Announcement Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Audience a company announcement is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    #[serde(rename = "HR")]
    Hr,
    ProjectManagers,
    Employees,
}

/// Announcement model matching the `announcement` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub title: String,
    pub message: String,
    pub department: Audience,
    #[serde(default)]
    pub created_at: i64,
}

/// Create announcement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementCreate {
    pub title: String,
    pub message: String,
    pub department: Audience,
}
