//! User (credential record) Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, is_unique_violation};
use crate::db::models::{Role, User};
use crate::db::schema::{USER_EMAIL_UNIQUE, USER_EMPLOYEE_UNIQUE};

/// Create payload; password is the already-hashed stored value
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub employee: RecordId,
}

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user by login email, case-sensitive exact match
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find the user owning credentials for one employee
    pub async fn find_by_employee(&self, employee: &RecordId) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE employee = $employee LIMIT 1")
            .bind(("employee", employee.clone()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Users with a given role, for directory listings
    pub async fn find_by_role(&self, role: &str) -> RepoResult<Vec<User>> {
        let role = role.to_string();
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user WHERE role = $role ORDER BY name")
            .bind(("role", role))
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Create a credential record.
    ///
    /// The unique indexes on `employee` and `email` make this the
    /// atomic create-if-absent point: a concurrent double-provision
    /// loses here with [`RepoError::Duplicate`] instead of inserting a
    /// second record.
    pub async fn create(&self, data: UserCreate, now_millis: i64) -> RepoResult<User> {
        let result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    employee_code = $employee_code,
                    name = $name,
                    email = $email,
                    password = $password,
                    role = $role,
                    employee = $employee,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("employee_code", data.employee_code))
            .bind(("name", data.name))
            .bind(("email", data.email.clone()))
            .bind(("password", data.password))
            .bind(("role", data.role))
            .bind(("employee", data.employee.clone()))
            .bind(("created_at", now_millis))
            .await?;

        let mut result = result.check().map_err(|e| {
            if is_unique_violation(&e, USER_EMPLOYEE_UNIQUE) {
                RepoError::Duplicate("Credentials already created for this employee".to_string())
            } else if is_unique_violation(&e, USER_EMAIL_UNIQUE) {
                RepoError::Duplicate(format!("Email '{}' already in use", data.email))
            } else {
                RepoError::from(e)
            }
        })?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
