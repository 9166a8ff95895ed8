//! Session/Attendance Tracker
//!
//! Maintains the one-record-per-(employee, day) invariant on every
//! successful sign-in and on explicit sign-out.
//!
//! State machine per (employee, day):
//!
//! - NoRecord -> sign-in -> LoggedIn (create: login = now, Present)
//! - LoggedIn -> sign-in again -> LoggedIn (no-op, login not overwritten)
//! - Record without login (manual repair) -> sign-in -> backfill login
//! - LoggedIn -> sign-out -> LoggedOut (first logout wins)
//!
//! Timestamps are passed in by the caller, which keeps the clock
//! injectable for tests.

use chrono_tz::Tz;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::Attendance;
use crate::db::repository::{AttendanceRepository, EmployeeRepository, RepoError, RepoResult};
use crate::utils::time;

#[derive(Clone)]
pub struct AttendanceTracker {
    attendance: AttendanceRepository,
    employees: EmployeeRepository,
    tz: Tz,
}

impl AttendanceTracker {
    pub fn new(db: Surreal<Db>, tz: Tz) -> Self {
        Self {
            attendance: AttendanceRepository::new(db.clone()),
            employees: EmployeeRepository::new(db),
            tz,
        }
    }

    /// Record a sign-in at `now_millis` for the employee.
    ///
    /// Creates the daily record if absent, backfills a missing login
    /// timestamp, and is a no-op when the login is already set. A
    /// concurrent duplicate create is absorbed: the unique index on
    /// (employee, date) rejects the loser, which re-reads the winner's
    /// record and proceeds as "already processed".
    pub async fn record_sign_in(
        &self,
        employee: &RecordId,
        now_millis: i64,
    ) -> RepoResult<Attendance> {
        let day = time::day_key_millis(now_millis, self.tz);

        let record = match self.attendance.find_by_employee_and_date(employee, day).await? {
            Some(existing) => {
                if existing.login_at.is_none() {
                    // Repair edge case: day record exists without a login
                    self.attendance.backfill_login(employee, day, now_millis).await?;
                    tracing::info!(
                        employee = %employee,
                        day = %time::format_day(day, self.tz),
                        "Backfilled missing login timestamp"
                    );
                    self.attendance
                        .find_by_employee_and_date(employee, day)
                        .await?
                        .ok_or_else(|| {
                            RepoError::Database("Attendance record vanished during backfill".to_string())
                        })?
                } else {
                    // Second sign-in of the day: keep the first login time
                    existing
                }
            }
            None => match self.attendance.create_for_day(employee, day, now_millis).await {
                Ok(created) => {
                    tracing::info!(
                        employee = %employee,
                        day = %time::format_day(day, self.tz),
                        "Attendance record created"
                    );
                    created
                }
                Err(RepoError::Duplicate(_)) => {
                    // Lost a concurrent create; the winner's record is authoritative
                    self.attendance
                        .find_by_employee_and_date(employee, day)
                        .await?
                        .ok_or_else(|| {
                            RepoError::Database(
                                "Attendance conflict without surviving record".to_string(),
                            )
                        })?
                }
                Err(e) => return Err(e),
            },
        };

        // Denormalized convenience field; not authoritative
        self.employees.touch_last_login(employee, now_millis).await?;

        Ok(record)
    }

    /// Record a sign-out at `now_millis` for the employee.
    ///
    /// First logout of the day wins; later calls do not overwrite it.
    /// A missing day record (sign-out without sign-in) is a no-op.
    pub async fn record_sign_out(
        &self,
        employee_id: &str,
        now_millis: i64,
    ) -> RepoResult<Option<Attendance>> {
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", employee_id)))?;
        let employee_ref = employee
            .id
            .ok_or_else(|| RepoError::Database("Employee record has no id".to_string()))?;

        let day = time::day_key_millis(now_millis, self.tz);
        let record = self.attendance.close_day(&employee_ref, day, now_millis).await?;

        self.employees
            .touch_last_logout(&employee_ref, now_millis)
            .await?;

        Ok(record)
    }
}
