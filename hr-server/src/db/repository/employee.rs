//! Employee Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, is_unique_violation, parse_record_id};
use crate::db::models::{
    Employee, EmployeeBasic, EmployeeCreate, EmployeeUpdate, ProjectAssignment, TaskStatus,
};
use crate::db::schema::EMPLOYEE_EMAIL_UNIQUE;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees, most recently created first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Name/email/position/department projection for directory listings
    pub async fn find_all_basic(&self) -> RepoResult<Vec<EmployeeBasic>> {
        let employees: Vec<EmployeeBasic> = self
            .base
            .db()
            .query("SELECT id, name, email, position, department FROM employee ORDER BY name")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_record_id("employee", id)?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Employees assigned to one HR employee
    pub async fn find_by_assigned_hr(&self, hr_id: &str) -> RepoResult<Vec<Employee>> {
        let hr = parse_record_id("employee", hr_id)?;
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE assigned_hr = $hr ORDER BY name")
            .bind(("hr", hr))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Employees assigned to one project manager
    pub async fn find_by_assigned_pm(&self, pm_id: &str) -> RepoResult<Vec<Employee>> {
        let pm = parse_record_id("employee", pm_id)?;
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE assigned_pm = $pm ORDER BY name")
            .bind(("pm", pm))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Employees with a given role
    pub async fn find_by_role(&self, role: &str) -> RepoResult<Vec<Employee>> {
        let role = role.to_string();
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE role = $role ORDER BY name")
            .bind(("role", role))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Create a new employee; credential status starts Pending
    pub async fn create(&self, data: EmployeeCreate, now_millis: i64) -> RepoResult<Employee> {
        let result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    employee_code = $employee_code,
                    name = $name,
                    dob = $dob,
                    email = $email,
                    role = $role,
                    position = $position,
                    department = $department,
                    salary = $salary,
                    mobile = $mobile,
                    status = 'Active',
                    photo = $photo,
                    credential_status = 'Pending',
                    assigned_hr = $assigned_hr,
                    assigned_pm = $assigned_pm,
                    projects = [],
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("employee_code", data.employee_code))
            .bind(("name", data.name))
            .bind(("dob", data.dob))
            .bind(("email", data.email.clone()))
            .bind(("role", data.role))
            .bind(("position", data.position))
            .bind(("department", data.department))
            .bind(("salary", data.salary))
            .bind(("mobile", data.mobile))
            .bind(("photo", data.photo))
            .bind(("assigned_hr", data.assigned_hr))
            .bind(("assigned_pm", data.assigned_pm))
            .bind(("created_at", now_millis))
            .await?;

        let mut result = result.check().map_err(|e| {
            if is_unique_violation(&e, EMPLOYEE_EMAIL_UNIQUE) {
                RepoError::Duplicate(format!("Email '{}' already exists", data.email))
            } else {
                RepoError::from(e)
            }
        })?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee; absent payload fields are left unchanged
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = parse_record_id("employee", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        let patch = serde_json::to_value(&data)
            .map_err(|e| RepoError::Database(format!("Failed to serialize update: {}", e)))?;

        let result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $patch RETURN AFTER")
            .bind(("thing", thing))
            .bind(("patch", patch))
            .await?;

        let mut result = result.check().map_err(|e| {
            if is_unique_violation(&e, EMPLOYEE_EMAIL_UNIQUE) {
                RepoError::Duplicate("Email already exists".to_string())
            } else {
                RepoError::from(e)
            }
        })?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("employee", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Mark credential provisioning completed.
    ///
    /// Idempotent: re-running after a crash between the user write and
    /// this one converges on Completed.
    pub async fn mark_credentials_completed(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET credential_status = 'Completed'")
            .bind(("thing", id.clone()))
            .await?;
        Ok(())
    }

    /// Update the denormalized last-login timestamp
    pub async fn touch_last_login(&self, id: &RecordId, at_millis: i64) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET last_login_at = $at")
            .bind(("thing", id.clone()))
            .bind(("at", at_millis))
            .await?;
        Ok(())
    }

    /// Update the denormalized last-logout timestamp
    pub async fn touch_last_logout(&self, id: &RecordId, at_millis: i64) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET last_logout_at = $at")
            .bind(("thing", id.clone()))
            .bind(("at", at_millis))
            .await?;
        Ok(())
    }

    // ========== Embedded project assignments ==========

    /// Append a task to an employee's project list
    pub async fn push_task(&self, id: &str, task: ProjectAssignment) -> RepoResult<Employee> {
        let thing = parse_record_id("employee", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET projects += $task RETURN AFTER")
            .bind(("thing", thing))
            .bind(("task", task))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Replace one task in the embedded list, matched by task id
    pub async fn replace_task(
        &self,
        id: &str,
        task_id: &str,
        update: impl FnOnce(&mut ProjectAssignment),
    ) -> RepoResult<Employee> {
        let mut employee = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        let task = employee
            .projects
            .iter_mut()
            .find(|t| t.task_id == task_id)
            .ok_or_else(|| RepoError::NotFound(format!("Task {} not found", task_id)))?;
        update(task);

        let thing = parse_record_id("employee", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET projects = $projects RETURN AFTER")
            .bind(("thing", thing))
            .bind(("projects", employee.projects))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Set the status of one task in the embedded list
    pub async fn set_task_status(
        &self,
        id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> RepoResult<Employee> {
        self.replace_task(id, task_id, |task| task.status = status)
            .await
    }
}
