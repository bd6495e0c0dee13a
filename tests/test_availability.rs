mod helpers;

use helpers::*;
use renodesk::domain::entities::{
    AvailabilityQuery, CreateAppointmentRequest, CreateBlockedDateRequest,
    UpdateAppointmentRequest, UpdateTemplatesRequest, AppointmentStatus,
};
use renodesk::infrastructure::http::middleware::ApiError;
use serde_json::json;

fn range(start: &str, end: &str) -> AvailabilityQuery {
    AvailabilityQuery {
        month: None,
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
    }
}

fn booking(date: &str, time: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        name: Some("Jan Peeters".to_string()),
        email: Some("jan@example.be".to_string()),
        phone: Some("+32 470 12 34 56".to_string()),
        gemeente: Some("Gent".to_string()),
        selected_date: Some(date.to_string()),
        selected_time: Some(time.to_string()),
        ..Default::default()
    }
}

fn templates(value: serde_json::Value) -> UpdateTemplatesRequest {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_monday_with_confirmed_booking() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let availability = &app.state.availability_service;

    availability
        .update_templates(templates(json!({
            "templates": [{ "dayOfWeek": 1, "timeSlots": ["09:00", "10:00", "14:00"], "isActive": true }]
        })))
        .await
        .unwrap();

    let created = app
        .state
        .appointment_service
        .submit(booking("2026-10-19", "10:00"))
        .await
        .unwrap();
    app.state
        .appointment_service
        .update(
            &created.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Confirmed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let response = availability
        .get_availability(&range("2026-10-19", "2026-10-19"))
        .await
        .unwrap();
    let monday = &response.availability["2026-10-19"];

    assert_eq!(monday.available, vec!["09:00", "14:00"]);
    assert_eq!(monday.booked, vec!["10:00"]);
    assert!(monday.is_open);
}

#[tokio::test]
async fn test_defaults_apply_without_templates() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));

    let response = app
        .state
        .availability_service
        .get_availability(&range("2026-10-17", "2026-10-19"))
        .await
        .unwrap();

    // Saturday and Sunday closed, Monday uses business hours
    assert!(!response.availability["2026-10-17"].is_open);
    assert!(!response.availability["2026-10-18"].is_open);
    assert_eq!(response.availability["2026-10-19"].available.len(), 7);
}

#[tokio::test]
async fn test_today_drops_elapsed_slots() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "10:00"));

    let response = app
        .state
        .availability_service
        .get_availability(&range("2026-10-14", "2026-10-15"))
        .await
        .unwrap();

    let yesterday = &response.availability["2026-10-14"];
    assert!(!yesterday.is_open);
    assert!(yesterday.available.is_empty());

    let today = &response.availability["2026-10-15"];
    assert_eq!(today.available, vec!["11:00", "13:00", "14:00", "15:00", "16:00"]);
}

#[tokio::test]
async fn test_blocked_dates() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let availability = &app.state.availability_service;

    availability
        .add_blocked_date(CreateBlockedDateRequest {
            date: "2026-10-20".to_string(),
            blocked_times: vec![],
            reason: Some("Werfbezoek".to_string()),
        })
        .await
        .unwrap();
    availability
        .add_blocked_date(CreateBlockedDateRequest {
            date: "2026-10-21".to_string(),
            blocked_times: vec!["09:00".to_string(), "16:00".to_string()],
            reason: None,
        })
        .await
        .unwrap();

    let response = availability
        .get_availability(&range("2026-10-20", "2026-10-21"))
        .await
        .unwrap();

    let whole_day = &response.availability["2026-10-20"];
    assert!(whole_day.available.is_empty());
    assert!(!whole_day.is_open);

    let partial = &response.availability["2026-10-21"];
    assert_eq!(partial.available, vec!["10:00", "11:00", "13:00", "14:00", "15:00"]);
    assert!(partial.is_open);

    // Removing by date reopens the day
    availability.remove_blocked_date("2026-10-20").await.unwrap();
    let response = availability
        .get_availability(&range("2026-10-20", "2026-10-20"))
        .await
        .unwrap();
    assert_eq!(response.availability["2026-10-20"].available.len(), 7);

    assert!(matches!(
        availability.remove_blocked_date("2026-10-20").await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_blocked_date_upsert_by_date() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let availability = &app.state.availability_service;

    let first = availability
        .add_blocked_date(CreateBlockedDateRequest {
            date: "2026-11-02".to_string(),
            blocked_times: vec!["09:00".to_string()],
            reason: None,
        })
        .await
        .unwrap();
    let second = availability
        .add_blocked_date(CreateBlockedDateRequest {
            date: "2026-11-02".to_string(),
            blocked_times: vec![],
            reason: Some("Verlof".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert!(second.blocks_whole_day());

    let admin = availability.get_admin_availability().await.unwrap();
    assert_eq!(admin.blocked_dates.len(), 1);
    assert_eq!(admin.templates.len(), 7);
}

#[tokio::test]
async fn test_inactive_template_closes_day() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let availability = &app.state.availability_service;

    availability
        .update_templates(templates(json!({
            "templates": [{ "dayOfWeek": 1, "timeSlots": ["09:00"], "isActive": false }]
        })))
        .await
        .unwrap();

    let response = availability
        .get_availability(&range("2026-10-19", "2026-10-19"))
        .await
        .unwrap();
    assert!(response.availability["2026-10-19"].available.is_empty());
    assert!(!response.availability["2026-10-19"].is_open);
}

#[tokio::test]
async fn test_invalid_templates_are_rejected() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let availability = &app.state.availability_service;

    let result = availability
        .update_templates(templates(json!({
            "templates": [
                { "dayOfWeek": 2, "timeSlots": ["08:00"] },
                { "dayOfWeek": 9, "timeSlots": ["09:00"] }
            ]
        })))
        .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    // Nothing from the rejected batch was stored
    let admin = availability.get_admin_availability().await.unwrap();
    assert_eq!(admin.templates[2].time_slots.len(), 7);
}

#[tokio::test]
async fn test_range_validation() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let availability = &app.state.availability_service;

    let half = AvailabilityQuery {
        start_date: Some("2026-10-19".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        availability.get_availability(&half).await,
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        availability.get_availability(&range("2026-10-20", "2026-10-19")).await,
        Err(ApiError::BadRequest(_))
    ));

    let month = AvailabilityQuery {
        month: Some("2026-11".to_string()),
        ..Default::default()
    };
    let response = availability.get_availability(&month).await.unwrap();
    assert_eq!(response.availability.len(), 30);
}
