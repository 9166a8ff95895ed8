//! Repository Module
//!
//! Provides CRUD operations over the SurrealDB collections.

pub mod announcement;
pub mod attendance;
pub mod conversation;
pub mod employee;
pub mod performance;
pub mod settings;
pub mod user;

// Re-exports
pub use announcement::AnnouncementRepository;
pub use attendance::AttendanceRepository;
pub use conversation::ConversationRepository;
pub use employee::EmployeeRepository;
pub use performance::PerformanceRepository;
pub use settings::SettingsRepository;
pub use user::UserRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Whether an error is a unique-index violation on the named index.
///
/// Create-if-absent relies on this: the natural-key indexes reject the
/// loser of a concurrent double-create, and callers treat the conflict
/// as "already processed".
pub(crate) fn is_unique_violation(err: &surrealdb::Error, index: &str) -> bool {
    let msg = err.to_string();
    msg.contains("already contains") && msg.contains(index)
}

/// Parse a path/payload id into a RecordId of the given table.
///
/// Accepts both the full "table:key" form and a bare key.
pub(crate) fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if id.contains(':') {
        let parsed: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if parsed.table() != table {
            return Err(RepoError::Validation(format!(
                "Expected {} id, got: {}",
                table, id
            )));
        }
        Ok(parsed)
    } else if id.is_empty() {
        Err(RepoError::Validation("Empty ID".to_string()))
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
