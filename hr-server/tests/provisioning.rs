//! Credential provisioning: at most one user per employee, hashed
//! storage, and status convergence on Completed.

mod common;

use hr_server::db::models::{CredentialStatus, Role};
use hr_server::db::repository::{EmployeeRepository, UserRepository};
use hr_server::services::CredentialRequest;
use hr_server::utils::AppError;

use common::{create_employee, test_state};

fn request(email: &str, password: &str) -> CredentialRequest {
    CredentialRequest {
        email: email.to_string(),
        password: password.to_string(),
        role: Role::Employee,
    }
}

#[tokio::test]
async fn provision_creates_user_and_completes_status() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", Some("EMP-001")).await;
    let employee_key = employee.id.clone().unwrap().to_string();

    let user = state
        .provisioning_service()
        .provision(&employee_key, request("asha@corp.example.com", "s3cret"))
        .await
        .unwrap();

    assert_eq!(user.employee_code, "EMP-001");
    assert_eq!(user.email, "asha@corp.example.com");
    // Never stored in the clear
    assert!(user.password.starts_with("$argon2"));
    assert_ne!(user.password, "s3cret");

    let refreshed = EmployeeRepository::new(state.get_db())
        .find_by_id(&employee_key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refreshed.credential_status, CredentialStatus::Completed);
}

#[tokio::test]
async fn provision_falls_back_to_internal_id_without_business_code() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_key = employee.id.clone().unwrap().to_string();

    let user = state
        .provisioning_service()
        .provision(&employee_key, request("asha@corp.example.com", "s3cret"))
        .await
        .unwrap();

    assert_eq!(user.employee_code, employee_key);
}

#[tokio::test]
async fn provision_unknown_employee_is_not_found() {
    let state = test_state().await;

    let result = state
        .provisioning_service()
        .provision("employee:missing", request("x@example.com", "pw"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn provision_rejects_blank_input() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_key = employee.id.clone().unwrap().to_string();
    let service = state.provisioning_service();

    let no_email = service.provision(&employee_key, request("  ", "pw")).await;
    assert!(matches!(no_email, Err(AppError::Validation(_))));

    let no_password = service.provision(&employee_key, request("a@b.c", "")).await;
    assert!(matches!(no_password, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn second_provision_conflicts_and_keeps_first_user() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    let employee_key = employee_id.to_string();
    let service = state.provisioning_service();

    let first = service
        .provision(&employee_key, request("asha@corp.example.com", "one"))
        .await
        .unwrap();

    let second = service
        .provision(&employee_key, request("other@corp.example.com", "two"))
        .await;
    assert!(matches!(second, Err(AppError::Conflict(_))));

    // The original user is untouched
    let users = UserRepository::new(state.get_db());
    let stored = users.find_by_employee(&employee_id).await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.email, "asha@corp.example.com");
}

#[tokio::test]
async fn repeat_provision_repairs_pending_status() {
    // A crash between the user insert and the status update leaves the
    // employee Pending; the next call converges it to Completed even
    // though it reports Conflict.
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_key = employee.id.clone().unwrap().to_string();
    let service = state.provisioning_service();

    service
        .provision(&employee_key, request("asha@corp.example.com", "pw"))
        .await
        .unwrap();

    // Simulate the missed second write
    state
        .get_db()
        .query("UPDATE employee SET credential_status = 'Pending'")
        .await
        .unwrap();

    let retry = service
        .provision(&employee_key, request("asha@corp.example.com", "pw"))
        .await;
    assert!(matches!(retry, Err(AppError::Conflict(_))));

    let refreshed = EmployeeRepository::new(state.get_db())
        .find_by_id(&employee_key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refreshed.credential_status, CredentialStatus::Completed);
}

#[tokio::test]
async fn user_email_must_be_unique() {
    let state = test_state().await;
    let a = create_employee(&state, "Asha", "asha@example.com", None).await;
    let b = create_employee(&state, "Ravi", "ravi@example.com", None).await;
    let service = state.provisioning_service();

    service
        .provision(
            &a.id.clone().unwrap().to_string(),
            request("shared@corp.example.com", "pw"),
        )
        .await
        .unwrap();

    let clash = service
        .provision(
            &b.id.clone().unwrap().to_string(),
            request("shared@corp.example.com", "pw"),
        )
        .await;
    assert!(matches!(clash, Err(AppError::Conflict(_))));
}
