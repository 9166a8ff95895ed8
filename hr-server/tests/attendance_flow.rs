//! Attendance tracker behavior: one record per employee per local
//! calendar day, first login and first logout win.

mod common;

use chrono::NaiveDate;
use hr_server::db::repository::AttendanceRepository;
use hr_server::utils::time;

use common::{create_employee, test_state, test_state_with_tz};

#[tokio::test]
async fn first_sign_in_creates_day_record() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", Some("EMP-001")).await;
    let employee_id = employee.id.clone().unwrap();

    let now = time::now_millis();
    let tracker = state.attendance_tracker();
    let record = tracker.record_sign_in(&employee_id, now).await.unwrap();

    assert_eq!(record.login_at, Some(now));
    assert_eq!(record.logout_at, None);
    assert_eq!(record.date, time::day_key_millis(now, chrono_tz::UTC));
}

#[tokio::test]
async fn second_sign_in_same_day_keeps_first_login() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    let tracker = state.attendance_tracker();

    let morning = time::day_key_millis(time::now_millis(), chrono_tz::UTC) + 9 * 3_600_000;
    let noon = morning + 3 * 3_600_000;

    let first = tracker.record_sign_in(&employee_id, morning).await.unwrap();
    let second = tracker.record_sign_in(&employee_id, noon).await.unwrap();

    assert_eq!(first.login_at, Some(morning));
    assert_eq!(second.login_at, Some(morning));
    assert_eq!(first.id, second.id);

    // Still one record for the day
    let repo = AttendanceRepository::new(state.get_db());
    let rows = repo
        .find_for_employee(&employee_id.to_string(), None)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn sign_ins_on_different_days_create_separate_records() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    let tracker = state.attendance_tracker();

    let day1 = time::day_start_millis(
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        chrono_tz::UTC,
    );
    let day2 = time::day_start_millis(
        NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
        chrono_tz::UTC,
    );

    tracker.record_sign_in(&employee_id, day1 + 3_600_000).await.unwrap();
    tracker.record_sign_in(&employee_id, day2 + 3_600_000).await.unwrap();

    let repo = AttendanceRepository::new(state.get_db());
    let rows = repo
        .find_for_employee(&employee_id.to_string(), None)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    // Newest first
    assert_eq!(rows[0].date, day2);
    assert_eq!(rows[1].date, day1);
}

#[tokio::test]
async fn day_boundary_follows_business_timezone() {
    // 2026-03-10 21:00 UTC is already 2026-03-11 in Kolkata (UTC+5:30)
    let state = test_state_with_tz(chrono_tz::Asia::Kolkata).await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();

    let at = time::day_start_millis(
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        chrono_tz::UTC,
    ) + 21 * 3_600_000;

    let tracker = state.attendance_tracker();
    let record = tracker.record_sign_in(&employee_id, at).await.unwrap();

    let expected_day = time::day_start_millis(
        NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
        chrono_tz::Asia::Kolkata,
    );
    assert_eq!(record.date, expected_day);
}

#[tokio::test]
async fn first_logout_wins() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    let employee_key = employee_id.to_string();
    let tracker = state.attendance_tracker();

    let morning = time::day_key_millis(time::now_millis(), chrono_tz::UTC) + 9 * 3_600_000;
    tracker.record_sign_in(&employee_id, morning).await.unwrap();

    let evening = morning + 8 * 3_600_000;
    let later = evening + 3_600_000;

    let first = tracker
        .record_sign_out(&employee_key, evening)
        .await
        .unwrap()
        .expect("day record");
    let second = tracker
        .record_sign_out(&employee_key, later)
        .await
        .unwrap()
        .expect("day record");

    assert_eq!(first.logout_at, Some(evening));
    assert_eq!(second.logout_at, Some(evening));
}

#[tokio::test]
async fn sign_out_without_sign_in_is_a_no_op() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_key = employee.id.clone().unwrap().to_string();

    let tracker = state.attendance_tracker();
    let record = tracker
        .record_sign_out(&employee_key, time::now_millis())
        .await
        .unwrap();

    assert!(record.is_none());
}

#[tokio::test]
async fn sign_out_for_unknown_employee_is_not_found() {
    let state = test_state().await;
    let tracker = state.attendance_tracker();

    let result = tracker
        .record_sign_out("employee:missing", time::now_millis())
        .await;
    assert!(matches!(
        result,
        Err(hr_server::db::repository::RepoError::NotFound(_))
    ));
}

#[tokio::test]
async fn sign_in_backfills_record_missing_login() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();

    let day = time::day_key_millis(time::now_millis(), chrono_tz::UTC);
    let repo = AttendanceRepository::new(state.get_db());

    // Seed a day record, then blank out the login to simulate a
    // partially-written record
    repo.create_for_day(&employee_id, day, day + 3_600_000)
        .await
        .unwrap();
    state
        .get_db()
        .query("UPDATE attendance SET login_at = NONE WHERE employee = $employee")
        .bind(("employee", employee_id.clone()))
        .await
        .unwrap();

    let at = day + 10 * 3_600_000;
    let tracker = state.attendance_tracker();
    let record = tracker.record_sign_in(&employee_id, at).await.unwrap();

    assert_eq!(record.login_at, Some(at));
}

#[tokio::test]
async fn duplicate_day_create_is_rejected_by_index() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();

    let day = time::day_key_millis(time::now_millis(), chrono_tz::UTC);
    let repo = AttendanceRepository::new(state.get_db());

    repo.create_for_day(&employee_id, day, day + 1000).await.unwrap();
    let second = repo.create_for_day(&employee_id, day, day + 2000).await;

    assert!(matches!(
        second,
        Err(hr_server::db::repository::RepoError::Duplicate(_))
    ));
}

#[tokio::test]
async fn full_day_cycle() {
    let state = test_state().await;
    let employee = create_employee(&state, "Asha", "asha@example.com", None).await;
    let employee_id = employee.id.clone().unwrap();
    let employee_key = employee_id.to_string();
    let tracker = state.attendance_tracker();

    let day = time::day_key_millis(time::now_millis(), chrono_tz::UTC);
    let login = day + 9 * 3_600_000;
    let logout = day + 17 * 3_600_000;

    tracker.record_sign_in(&employee_id, login).await.unwrap();
    let closed = tracker
        .record_sign_out(&employee_key, logout)
        .await
        .unwrap()
        .expect("day record");

    assert_eq!(closed.login_at, Some(login));
    assert_eq!(closed.logout_at, Some(logout));

    // Denormalized employee fields follow along
    let refreshed = hr_server::db::repository::EmployeeRepository::new(state.get_db())
        .find_by_id(&employee_key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refreshed.last_login_at, Some(login));
    assert_eq!(refreshed.last_logout_at, Some(logout));
}
