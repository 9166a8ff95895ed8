//! Shared helpers for integration tests

use hr_server::db::DbService;
use hr_server::db::models::{Employee, EmployeeCreate, Role};
use hr_server::db::repository::EmployeeRepository;
use hr_server::{Config, ServerState};

/// Server state over a fresh in-memory database
pub async fn test_state() -> ServerState {
    test_state_with_tz(chrono_tz::UTC).await
}

pub async fn test_state_with_tz(tz: chrono_tz::Tz) -> ServerState {
    let db = DbService::memory().await.expect("in-memory database");
    let mut config = Config::with_overrides("/tmp/hr-server-test", 0);
    config.timezone = tz;
    ServerState::with_db(config, db.db)
}

pub fn employee_payload(name: &str, email: &str, code: Option<&str>) -> EmployeeCreate {
    EmployeeCreate {
        employee_code: code.map(|c| c.to_string()),
        name: name.to_string(),
        dob: None,
        email: email.to_string(),
        role: Role::Employee,
        position: Some("Engineer".to_string()),
        department: Some("Engineering".to_string()),
        salary: None,
        mobile: None,
        photo: None,
        assigned_hr: None,
        assigned_pm: None,
    }
}

pub async fn create_employee(
    state: &ServerState,
    name: &str,
    email: &str,
    code: Option<&str>,
) -> Employee {
    let repo = EmployeeRepository::new(state.get_db());
    repo.create(employee_payload(name, email, code), hr_server::utils::time::now_millis())
        .await
        .expect("create employee")
}
