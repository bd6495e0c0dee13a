mod helpers;

use helpers::*;
use renodesk::domain::entities::{CreateQuoteRequest, QuoteFilter, QuoteStatus, UpdateQuoteRequest};
use renodesk::infrastructure::http::middleware::ApiError;

fn quote_request() -> CreateQuoteRequest {
    CreateQuoteRequest {
        name: Some("Marie Dubois".to_string()),
        email: Some("marie@example.be".to_string()),
        phone: Some("+32 475 11 22 33".to_string()),
        gemeente: Some("Namur".to_string()),
        services: vec!["Dakwerken".to_string(), "Isolatie".to_string()],
        description: Some("Nouvelle toiture, environ 120 m²".to_string()),
        budget: Some("20-30k".to_string()),
        locale: Some("fr".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_submit_quote() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let service = &app.state.quote_service;

    let first = service.submit(quote_request()).await.unwrap();
    let second = service.submit(quote_request()).await.unwrap();
    assert_eq!(first.reference_number, "OFF-2026-0001");
    assert_eq!(second.reference_number, "OFF-2026-0002");

    let stored = service.get(&first.id).await.unwrap();
    assert_eq!(stored.status, QuoteStatus::New);
    assert_eq!(stored.services, vec!["Dakwerken", "Isolatie"]);
    assert_eq!(stored.locale, "fr");

    app.spawner.drain().await;
    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 4);
    assert!(sent.iter().any(|n| n.subject.starts_with("Confirmation de votre demande de devis")));
}

#[tokio::test]
async fn test_quote_and_appointment_sequences_are_independent() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));

    app.state.quote_service.submit(quote_request()).await.unwrap();
    let booked = app
        .state
        .appointment_service
        .submit(renodesk::domain::entities::CreateAppointmentRequest {
            name: Some("Marie Dubois".to_string()),
            email: Some("marie@example.be".to_string()),
            phone: Some("+32 475 11 22 33".to_string()),
            gemeente: Some("Namur".to_string()),
            selected_date: Some("2026-10-19".to_string()),
            selected_time: Some("09:00".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(booked.reference_number, "AFR-2026-0001");
}

#[tokio::test]
async fn test_quote_validation() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let service = &app.state.quote_service;

    let mut no_services = quote_request();
    no_services.services = vec!["  ".to_string()];
    assert!(matches!(
        service.submit(no_services).await,
        Err(ApiError::BadRequest(_))
    ));

    let mut no_description = quote_request();
    no_description.description = None;
    match service.submit(no_description).await {
        Err(ApiError::BadRequest(msg)) => assert!(msg.contains("description")),
        other => panic!("expected 400, got {:?}", other.map(|r| r.id)),
    }

    assert!(service.list(&QuoteFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_filter_quotes() {
    let test_db = setup_test_db().await;
    let app = test_app(test_db.db(), at("2026-10-15", "08:00"));
    let service = &app.state.quote_service;

    let a = service.submit(quote_request()).await.unwrap();
    service.submit(quote_request()).await.unwrap();

    let updated = service
        .update(
            &a.id,
            UpdateQuoteRequest {
                status: Some(QuoteStatus::Quoted),
                admin_notes: Some("Offerte verstuurd".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, QuoteStatus::Quoted);

    let quoted = service
        .list(&QuoteFilter {
            status: Some(QuoteStatus::Quoted),
        })
        .await
        .unwrap();
    assert_eq!(quoted.len(), 1);
    assert_eq!(quoted[0].admin_notes.as_deref(), Some("Offerte verstuurd"));

    service.delete(&a.id).await.unwrap();
    assert!(matches!(service.get(&a.id).await, Err(ApiError::NotFound(_))));
}
