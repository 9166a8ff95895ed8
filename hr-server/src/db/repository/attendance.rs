//! Attendance Repository
//!
//! One row per (employee, calendar day). Date parameters are Unix
//! millis already normalized to local midnight by the caller.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, is_unique_violation, parse_record_id};
use crate::db::models::{Attendance, AttendanceRow};
use crate::db::schema::ATTENDANCE_DAY_UNIQUE;

const JOINED_FIELDS: &str = "*, \
    employee.name AS employee_name, \
    employee.email AS employee_email, \
    employee.position AS employee_position, \
    employee.department AS employee_department";

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the record for one employee on one day
    pub async fn find_by_employee_and_date(
        &self,
        employee: &RecordId,
        date_millis: i64,
    ) -> RepoResult<Option<Attendance>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE employee = $employee AND date = $date LIMIT 1")
            .bind(("employee", employee.clone()))
            .bind(("date", date_millis))
            .await?;
        let records: Vec<Attendance> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Create the daily record with the first login of the day.
    ///
    /// Atomic create-if-absent: the unique index on (employee, date)
    /// rejects a concurrent duplicate with [`RepoError::Duplicate`].
    pub async fn create_for_day(
        &self,
        employee: &RecordId,
        date_millis: i64,
        login_millis: i64,
    ) -> RepoResult<Attendance> {
        let result = self
            .base
            .db()
            .query(
                r#"CREATE attendance SET
                    employee = $employee,
                    date = $date,
                    login_at = $login_at,
                    logout_at = NONE,
                    status = 'Present'
                RETURN AFTER"#,
            )
            .bind(("employee", employee.clone()))
            .bind(("date", date_millis))
            .bind(("login_at", login_millis))
            .await?;

        let mut result = result.check().map_err(|e| {
            if is_unique_violation(&e, ATTENDANCE_DAY_UNIQUE) {
                RepoError::Duplicate("Attendance already recorded for this day".to_string())
            } else {
                RepoError::from(e)
            }
        })?;

        let created: Option<Attendance> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create attendance".to_string()))
    }

    /// Backfill a missing login timestamp on an existing day record.
    ///
    /// The `login_at = NONE` guard makes this idempotent: a second
    /// sign-in the same day matches no row and changes nothing.
    pub async fn backfill_login(
        &self,
        employee: &RecordId,
        date_millis: i64,
        login_millis: i64,
    ) -> RepoResult<()> {
        self.base
            .db()
            .query(
                "UPDATE attendance SET login_at = $login_at, status = 'Present' \
                 WHERE employee = $employee AND date = $date AND login_at = NONE",
            )
            .bind(("employee", employee.clone()))
            .bind(("date", date_millis))
            .bind(("login_at", login_millis))
            .await?;
        Ok(())
    }

    /// Set the logout timestamp if not already set (first logout wins).
    ///
    /// Returns the record as it stands after the call, whether or not
    /// this call was the winner.
    pub async fn close_day(
        &self,
        employee: &RecordId,
        date_millis: i64,
        logout_millis: i64,
    ) -> RepoResult<Option<Attendance>> {
        self.base
            .db()
            .query(
                "UPDATE attendance SET logout_at = $logout_at \
                 WHERE employee = $employee AND date = $date AND logout_at = NONE",
            )
            .bind(("employee", employee.clone()))
            .bind(("date", date_millis))
            .bind(("logout_at", logout_millis))
            .await?;

        self.find_by_employee_and_date(employee, date_millis).await
    }

    /// Records for one employee, optional [start, end) range, newest first
    pub async fn find_for_employee(
        &self,
        employee_id: &str,
        range_millis: Option<(i64, i64)>,
    ) -> RepoResult<Vec<AttendanceRow>> {
        let employee = parse_record_id("employee", employee_id)?;
        let rows: Vec<AttendanceRow> = match range_millis {
            Some((start, end)) => {
                self.base
                    .db()
                    .query(format!(
                        "SELECT {JOINED_FIELDS} FROM attendance \
                         WHERE employee = $employee AND date >= $start AND date < $end \
                         ORDER BY date DESC"
                    ))
                    .bind(("employee", employee))
                    .bind(("start", start))
                    .bind(("end", end))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query(format!(
                        "SELECT {JOINED_FIELDS} FROM attendance \
                         WHERE employee = $employee ORDER BY date DESC"
                    ))
                    .bind(("employee", employee))
                    .await?
                    .take(0)?
            }
        };
        Ok(rows)
    }

    /// Records across all employees, optional [start, end) range, newest first
    pub async fn find_all(
        &self,
        range_millis: Option<(i64, i64)>,
    ) -> RepoResult<Vec<AttendanceRow>> {
        let rows: Vec<AttendanceRow> = match range_millis {
            Some((start, end)) => {
                self.base
                    .db()
                    .query(format!(
                        "SELECT {JOINED_FIELDS} FROM attendance \
                         WHERE date >= $start AND date < $end ORDER BY date DESC"
                    ))
                    .bind(("start", start))
                    .bind(("end", end))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query(format!(
                        "SELECT {JOINED_FIELDS} FROM attendance ORDER BY date DESC"
                    ))
                    .await?
                    .take(0)?
            }
        };
        Ok(rows)
    }
}
