//! Document management flows over the HTTP surface.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, App};
use serde_json::{json, Value};

use backend::inbound::http::api_scope;
use backend::outbound::notify::RecordingNotifier;
use backend::test_support::{login_as, seeded_data_with_notifier, test_session_middleware};

async fn seeded_app(
    notifier: Arc<RecordingNotifier>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    actix_test::init_service(
        App::new()
            .app_data(seeded_data_with_notifier(notifier))
            .wrap(test_session_middleware())
            .service(api_scope()),
    )
    .await
}

#[actix_web::test]
async fn document_lifecycle_create_update_delete() {
    let notifier = Arc::new(RecordingNotifier::new());
    let app = seeded_app(notifier.clone()).await;
    let cookie = login_as(&app, "admin", "123").await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/documents")
            .cookie(cookie.clone())
            .set_json(json!({
                "title": "Onboarding Checklist",
                "author": "Ajad Singh Parmar",
                "status": "Pending",
                "file": { "fileName": "onboarding.pdf", "byteSize": 48_213 }
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body: Value =
        serde_json::from_slice(&actix_test::read_body(created).await).expect("document JSON");
    let id = created_body.get("id").and_then(Value::as_u64).expect("id");
    assert_eq!(id, 4);
    assert_eq!(
        created_body.get("fileUrl").and_then(Value::as_str),
        Some("/files/onboarding.pdf")
    );
    let date_created = created_body
        .get("dateCreated")
        .and_then(Value::as_str)
        .expect("creation date")
        .to_owned();

    // Update without a fresh file keeps the stored attachment and the
    // creation date.
    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/documents/{id}"))
            .cookie(cookie.clone())
            .set_json(json!({
                "title": "Onboarding Checklist v2",
                "author": "Ajad Singh Parmar",
                "status": "Approved"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated_body: Value =
        serde_json::from_slice(&actix_test::read_body(updated).await).expect("document JSON");
    assert_eq!(
        updated_body.get("fileName").and_then(Value::as_str),
        Some("onboarding.pdf")
    );
    assert_eq!(
        updated_body.get("dateCreated").and_then(Value::as_str),
        Some(date_created.as_str())
    );
    assert_eq!(
        updated_body.get("status").and_then(Value::as_str),
        Some("Approved")
    );

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/documents/{id}?confirm=true"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    assert_eq!(
        notifier.titles(),
        vec![
            "Document added".to_owned(),
            "Document updated".to_owned(),
            "Document deleted".to_owned(),
        ]
    );
}

#[actix_web::test]
async fn filter_scans_title_and_author() {
    let notifier = Arc::new(RecordingNotifier::new());
    let app = seeded_app(notifier).await;
    let cookie = login_as(&app, "admin", "123").await;

    for (query, expected) in [("report", 1), ("MIKE", 1), ("", 3), ("zz-no-match", 0)] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/documents?q={query}"))
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("documents JSON");
        assert_eq!(
            body.as_array().map(Vec::len),
            Some(expected),
            "query {query:?}"
        );
    }
}

#[actix_web::test]
async fn dashboard_tally_tracks_status_changes() {
    let notifier = Arc::new(RecordingNotifier::new());
    let app = seeded_app(notifier).await;
    let cookie = login_as(&app, "admin", "123").await;

    // Move the pending seed document to approved.
    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/documents/1")
            .cookie(cookie.clone())
            .set_json(json!({
                "title": "Proposal Report",
                "author": "Mike Jimenez",
                "status": "Approved"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let dashboard = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/dashboard")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: Value =
        serde_json::from_slice(&actix_test::read_body(dashboard).await).expect("dashboard JSON");
    assert_eq!(body.pointer("/tally/approved").and_then(Value::as_u64), Some(2));
    assert_eq!(body.pointer("/tally/pending").and_then(Value::as_u64), Some(0));
    assert_eq!(body.pointer("/tally/total").and_then(Value::as_u64), Some(3));
}

#[actix_web::test]
async fn seed_proposal_report_opens_inline() {
    let notifier = Arc::new(RecordingNotifier::new());
    let app = seeded_app(notifier).await;
    let cookie = login_as(&app, "docyummy", "123").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/documents/1/view")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("view JSON");
    assert_eq!(
        body.get("disposition").and_then(Value::as_str),
        Some("inline")
    );
}

#[actix_web::test]
async fn unknown_document_is_404() {
    let notifier = Arc::new(RecordingNotifier::new());
    let app = seeded_app(notifier).await;
    let cookie = login_as(&app, "admin", "123").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/documents/99")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
}
