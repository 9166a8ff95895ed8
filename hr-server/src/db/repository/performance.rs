//! Performance Report Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{PerformanceReport, PerformanceRow, PerformanceSubmit};

#[derive(Clone)]
pub struct PerformanceRepository {
    base: BaseRepository,
}

impl PerformanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Submit a new report
    pub async fn create(
        &self,
        data: PerformanceSubmit,
        now_millis: i64,
    ) -> RepoResult<PerformanceReport> {
        let status = data.status.unwrap_or_else(|| "Pending".to_string());
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE performance_report SET
                    employee = $employee,
                    task_id = $task_id,
                    title = $title,
                    description = $description,
                    status = $status,
                    submitted_at = $submitted_at
                RETURN AFTER"#,
            )
            .bind(("employee", data.employee))
            .bind(("task_id", data.task_id))
            .bind(("title", data.title))
            .bind(("description", data.description))
            .bind(("status", status))
            .bind(("submitted_at", now_millis))
            .await?;

        let created: Option<PerformanceReport> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create report".to_string()))
    }

    /// All reports with employee name/email joined, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<PerformanceRow>> {
        let rows: Vec<PerformanceRow> = self
            .base
            .db()
            .query(
                "SELECT *, employee.name AS employee_name, employee.email AS employee_email \
                 FROM performance_report ORDER BY submitted_at DESC",
            )
            .await?
            .take(0)?;
        Ok(rows)
    }
}
