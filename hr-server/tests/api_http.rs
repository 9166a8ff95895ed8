//! HTTP surface: sign-in/sign-out, attendance queries and the error
//! envelope, exercised through the full router.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_server::api;
use hr_server::db::models::Role;
use hr_server::db::repository::AttendanceRepository;
use hr_server::services::CredentialRequest;
use hr_server::utils::time;

use common::{create_employee, test_state};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let state = test_state().await;
    let app = api::router(state);

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn signin_rejects_unknown_email() {
    let state = test_state().await;
    let app = api::router(state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signin",
        Some(json!({"email": "ghost@example.com", "password": "pw"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E1001");
}

#[tokio::test]
async fn signin_rejects_wrong_password() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    state
        .provisioning_service()
        .provision(
            &employee.id.clone().unwrap().to_string(),
            CredentialRequest {
                email: "asha@corp.example.com".to_string(),
                password: "right".to_string(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap();

    let app = api::router(state);
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signin",
        Some(json!({"email": "asha@corp.example.com", "password": "wrong"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Same envelope as unknown email
    assert_eq!(body["code"], "E1001");
}

#[tokio::test]
async fn signin_returns_token_and_records_attendance() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    state
        .provisioning_service()
        .provision(
            &employee_id.to_string(),
            CredentialRequest {
                email: "asha@corp.example.com".to_string(),
                password: "s3cret".to_string(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap();

    let app = api::router(state.clone());
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signin",
        Some(json!({"email": "asha@corp.example.com", "password": "s3cret"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().unwrap().len() > 20);
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["role"], "employee");

    // The attendance write is spawned off the request path; poll for it
    let repo = AttendanceRepository::new(state.get_db());
    let day = time::day_key_millis(time::now_millis(), chrono_tz::UTC);
    let mut recorded = None;
    for _ in 0..50 {
        if let Some(found) = repo
            .find_by_employee_and_date(&employee_id, day)
            .await
            .unwrap()
        {
            recorded = Some(found);
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    let record = recorded.expect("attendance recorded after sign-in");
    assert!(record.login_at.is_some());
}

#[tokio::test]
async fn token_grants_access_to_me() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    state
        .provisioning_service()
        .provision(
            &employee.id.clone().unwrap().to_string(),
            CredentialRequest {
                email: "asha@corp.example.com".to_string(),
                password: "s3cret".to_string(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap();

    let app = api::router(state);
    let (_, body) = send(
        &app,
        "POST",
        "/api/auth/signin",
        Some(json!({"email": "asha@corp.example.com", "password": "s3cret"})),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let me: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(me["name"], "Asha");
    assert_eq!(me["role"], "employee");

    // And no token means no access
    let (status, _) = send(&app, "GET", "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_for_unknown_employee_is_not_found() {
    let state = test_state().await;
    let app = api::router(state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/logout",
        Some(json!({"employeeId": "employee:missing"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn duplicate_credentials_return_conflict() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_key = employee.id.clone().unwrap().to_string();
    let app = api::router(state);

    let uri = format!("/api/auth/credentials/{employee_key}");
    let payload = json!({
        "email": "asha@corp.example.com",
        "password": "pw",
        "role": "employee"
    });

    let (first, _) = send(&app, "POST", &uri, Some(payload.clone())).await;
    assert_eq!(first, StatusCode::OK);

    let (second, body) = send(&app, "POST", &uri, Some(payload)).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn attendance_month_filter() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    let employee_key = employee_id.to_string();

    let repo = AttendanceRepository::new(state.get_db());
    let march = time::parse_month_range("2026-03", chrono_tz::UTC).unwrap();
    let april = time::parse_month_range("2026-04", chrono_tz::UTC).unwrap();
    repo.create_for_day(&employee_id, march.0, march.0 + 1000).await.unwrap();
    repo.create_for_day(&employee_id, april.0, april.0 + 1000).await.unwrap();

    let app = api::router(state);

    let (status, rows) = send(
        &app,
        "GET",
        &format!("/api/attendance/employee/{employee_key}?month=2026-03"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);

    // Joined employee identity comes along
    assert_eq!(rows[0]["employee_name"], "Asha");

    let (status, rows) = send(
        &app,
        "GET",
        &format!("/api/attendance/employee/{employee_key}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 2);

    let (status, all_rows) = send(&app, "GET", "/api/attendance/all?month=2026-04", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all_rows.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_month_is_rejected() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_key = employee.id.clone().unwrap().to_string();
    let app = api::router(state);

    for month in ["2026-13", "2026-00", "202603", "2026-3", "garbage"] {
        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/attendance/employee/{employee_key}?month={month}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "month {month}");
        assert_eq!(body["code"], "E0002");
    }
}

#[tokio::test]
async fn legacy_plaintext_user_can_still_sign_in() {
    let state = test_state().await;
    let employee = create_employee(&state, "Old Timer", "old@example.com", None).await;

    // Migrated record with the password still in the clear
    hr_server::db::repository::UserRepository::new(state.get_db())
        .create(
            hr_server::db::repository::user::UserCreate {
                employee_code: "EMP-OLD".to_string(),
                name: "Old Timer".to_string(),
                email: "old@corp.example.com".to_string(),
                password: "legacy-pw".to_string(),
                role: Role::Employee,
                employee: employee.id.clone().unwrap(),
            },
            time::now_millis(),
        )
        .await
        .unwrap();

    let app = api::router(state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signin",
        Some(json!({"email": "old@corp.example.com", "password": "legacy-pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/signin",
        Some(json!({"email": "old@corp.example.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn provision_sign_in_out_leaves_one_month_record() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", Some("EMP-001")).await;
    let employee_id = employee.id.clone().unwrap();
    let employee_key = employee_id.to_string();
    let app = api::router(state.clone());

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/auth/credentials/{employee_key}"),
        Some(json!({
            "email": "asha@corp.example.com",
            "password": "s3cret",
            "role": "employee"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Sign in twice, then out
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/signin",
            Some(json!({"email": "asha@corp.example.com", "password": "s3cret"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Wait for the spawned attendance writes to land
    let repo = AttendanceRepository::new(state.get_db());
    let day = time::day_key_millis(time::now_millis(), chrono_tz::UTC);
    for _ in 0..50 {
        if repo
            .find_by_employee_and_date(&employee_id, day)
            .await
            .unwrap()
            .is_some()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/logout",
        Some(json!({"employeeId": employee_key})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Exactly one record this month, login and logout both set
    let month = {
        let date = time::date_of_millis(day, chrono_tz::UTC);
        use chrono::Datelike;
        format!("{:04}-{:02}", date.year(), date.month())
    };
    let (status, rows) = send(
        &app,
        "GET",
        &format!("/api/attendance/employee/{employee_key}?month={month}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["login_at"].is_i64());
    assert!(rows[0]["logout_at"].is_i64());
}

#[tokio::test]
async fn assignment_listings_are_not_found_when_empty() {
    let state = test_state().await;
    let hr = create_employee(&state, "Meera", "meera@example.com", None).await;
    let hr_id = hr.id.clone().unwrap();
    let hr_key = hr_id.to_string();
    let app = api::router(state.clone());

    // No one assigned yet
    let (status, body) = send(&app, "GET", &format!("/api/employees/hr/{hr_key}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (status, _) = send(&app, "GET", &format!("/api/employees/pm/{hr_key}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // With an assignment the listing comes back
    let mut payload = common::employee_payload("Asha", "asha@example.com", None);
    payload.assigned_hr = Some(hr_id);
    hr_server::db::repository::EmployeeRepository::new(state.get_db())
        .create(payload, time::now_millis())
        .await
        .unwrap();

    let (status, rows) = send(&app, "GET", &format!("/api/employees/hr/{hr_key}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "Asha");
}

#[tokio::test]
async fn employee_crud_round_trip() {
    let state = test_state().await;
    let app = api::router(state);

    let (status, created) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "role": "project-manager",
            "department": "Delivery"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ravi");
    assert_eq!(fetched["credential_status"], "Pending");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/employees/{id}"),
        Some(json!({"position": "Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["position"], "Lead");
    assert_eq!(updated["name"], "Ravi");

    let (status, _) = send(&app, "DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
