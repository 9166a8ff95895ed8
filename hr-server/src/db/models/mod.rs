//! Database Models
//!
//! Typed views over the SurrealDB document collections.

pub mod serde_helpers;

pub mod announcement;
pub mod attendance;
pub mod conversation;
pub mod employee;
pub mod performance;
pub mod settings;
pub mod user;

pub use announcement::{Announcement, AnnouncementCreate, Audience};
pub use attendance::{Attendance, AttendanceRow, AttendanceStatus};
pub use conversation::{Conversation, Message, MessageSend};
pub use employee::{
    CredentialStatus, Employee, EmployeeBasic, EmployeeCreate, EmployeeRecordId, EmployeeUpdate,
    ProjectAssignment, Role, TaskStatus,
};
pub use performance::{PerformanceReport, PerformanceRow, PerformanceSubmit};
pub use settings::{Settings, SettingsUpdate};
pub use user::{User, UserSummary};
