//! Dashboard summary handler.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Document, DomainError, StatusTally};

use super::auth::resolve_identity;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;

const RECENT_DOCUMENTS: usize = 5;
const RECENT_ACCOUNTS: usize = 3;

/// Dashboard landing payload.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Documents per review status.
    pub tally: StatusTally,
    /// Most recently added documents, newest first.
    pub recent_documents: Vec<Document>,
    /// Most recently added accounts, newest first; admins only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_accounts: Option<Vec<Account>>,
}

fn newest_first<T: Clone>(records: &[T], limit: usize) -> Vec<T> {
    records.iter().rev().take(limit).cloned().collect()
}

/// Summarise the stores for the dashboard landing view.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardResponse),
        (status = 401, description = "Unauthorised", body = DomainError)
    ),
    tags = ["dashboard"],
    operation_id = "getDashboard"
)]
#[get("/dashboard")]
pub async fn get_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardResponse>> {
    let identity = resolve_identity(&state.directory, &session)?;
    let documents = state.documents.list("").await;
    let tally = StatusTally::from_documents(&documents);
    let recent_documents = newest_first(&documents, RECENT_DOCUMENTS);
    let recent_accounts = if identity.role().is_admin() {
        let accounts = state.accounts.list("").await;
        Some(newest_first(&accounts, RECENT_ACCOUNTS))
    } else {
        None
    };
    Ok(web::Json(DashboardResponse {
        tally,
        recent_documents,
        recent_accounts,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use rstest::rstest;
    use serde_json::Value;

    use crate::outbound::notify::RecordingNotifier;
    use crate::test_support::{login_as, seeded_data_with_notifier, test_session_middleware};

    use super::super::api_scope;

    #[rstest]
    #[actix_web::test]
    async fn seed_tally_counts_one_of_each_status() {
        let notifier = Arc::new(RecordingNotifier::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_data_with_notifier(notifier))
                .wrap(test_session_middleware())
                .service(api_scope()),
        )
        .await;
        let cookie = login_as(&app, "admin", "123").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("dashboard JSON");
        assert_eq!(body.pointer("/tally/approved").and_then(Value::as_u64), Some(1));
        assert_eq!(body.pointer("/tally/pending").and_then(Value::as_u64), Some(1));
        assert_eq!(body.pointer("/tally/rejected").and_then(Value::as_u64), Some(1));
        assert_eq!(body.pointer("/tally/total").and_then(Value::as_u64), Some(3));
    }

    #[rstest]
    #[actix_web::test]
    async fn recent_documents_come_newest_first() {
        let notifier = Arc::new(RecordingNotifier::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_data_with_notifier(notifier))
                .wrap(test_session_middleware())
                .service(api_scope()),
        )
        .await;
        let cookie = login_as(&app, "admin", "123").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("dashboard JSON");
        let recent = body
            .get("recentDocuments")
            .and_then(Value::as_array)
            .expect("recent documents");
        let ids: Vec<u64> = recent
            .iter()
            .filter_map(|doc| doc.get("id").and_then(Value::as_u64))
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[rstest]
    #[actix_web::test]
    async fn recent_accounts_are_withheld_from_non_admins() {
        let notifier = Arc::new(RecordingNotifier::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_data_with_notifier(notifier))
                .wrap(test_session_middleware())
                .service(api_scope()),
        )
        .await;

        let admin_cookie = login_as(&app, "admin", "123").await;
        let admin_view = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .cookie(admin_cookie)
                .to_request(),
        )
        .await;
        let admin_body: Value =
            serde_json::from_slice(&actix_test::read_body(admin_view).await).expect("JSON");
        assert_eq!(
            admin_body
                .get("recentAccounts")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(3)
        );

        let user_cookie = login_as(&app, "docyummy", "123").await;
        let user_view = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .cookie(user_cookie)
                .to_request(),
        )
        .await;
        let user_body: Value =
            serde_json::from_slice(&actix_test::read_body(user_view).await).expect("JSON");
        assert!(user_body.get("recentAccounts").is_none());
    }
}
