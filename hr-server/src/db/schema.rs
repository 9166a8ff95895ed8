//! Schema definition
//!
//! Tables are schemaless documents; the only storage-level guarantees
//! are the unique indexes on the natural keys. Those indexes are what
//! make create-if-absent a single atomic operation: a concurrent
//! double-create loses at the index instead of inserting a duplicate.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::RepoResult;

/// Unique index names, shared with the conflict-detection paths
pub const EMPLOYEE_EMAIL_UNIQUE: &str = "employee_email_unique";
pub const USER_EMAIL_UNIQUE: &str = "user_email_unique";
pub const USER_EMPLOYEE_UNIQUE: &str = "user_employee_unique";
pub const ATTENDANCE_DAY_UNIQUE: &str = "attendance_day_unique";

const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS employee_email_unique ON TABLE employee FIELDS email UNIQUE;

    DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS user_email_unique ON TABLE user FIELDS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS user_employee_unique ON TABLE user FIELDS employee UNIQUE;

    DEFINE TABLE IF NOT EXISTS attendance SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS attendance_day_unique ON TABLE attendance FIELDS employee, date UNIQUE;

    DEFINE TABLE IF NOT EXISTS announcement SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS performance_report SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS settings SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS conversation SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS message SCHEMALESS;
"#;

/// Apply the schema; safe to run on every startup
pub async fn define_schema(db: &Surreal<Db>) -> RepoResult<()> {
    db.query(SCHEMA).await?.check()?;
    tracing::info!("Database schema applied");
    Ok(())
}
