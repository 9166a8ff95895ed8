//! On-disk engine: data survives a close-and-reopen cycle.

use hr_server::db::DbService;
use hr_server::db::repository::EmployeeRepository;
use hr_server::db::models::{EmployeeCreate, Role};

#[tokio::test]
async fn employees_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hr.db");
    let path = path.to_string_lossy().to_string();

    let payload = EmployeeCreate {
        employee_code: Some("EMP-100".to_string()),
        name: "Meera".to_string(),
        dob: None,
        email: "meera@example.com".to_string(),
        role: Role::Hr,
        position: None,
        department: None,
        salary: None,
        mobile: None,
        photo: None,
        assigned_hr: None,
        assigned_pm: None,
    };

    let created_id = {
        let db = DbService::new(&path).await.unwrap();
        let repo = EmployeeRepository::new(db.db);
        let employee = repo.create(payload, 1_700_000_000_000).await.unwrap();
        employee.id.unwrap().to_string()
    };

    let db = DbService::new(&path).await.unwrap();
    let repo = EmployeeRepository::new(db.db);
    let found = repo.find_by_id(&created_id).await.unwrap().unwrap();
    assert_eq!(found.name, "Meera");
    assert_eq!(found.employee_code.as_deref(), Some("EMP-100"));
}
