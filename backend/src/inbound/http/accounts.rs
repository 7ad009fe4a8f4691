//! Account management handlers.
//!
//! ```text
//! GET    /api/v1/accounts?q=mike
//! POST   /api/v1/accounts
//! PUT    /api/v1/accounts/{id}
//! DELETE /api/v1/accounts/{id}?confirm=true
//! POST   /api/v1/accounts/{id}/password
//! ```
//!
//! Listing requires only an authenticated session (the admin-only entry is
//! a navigation affordance, not a read boundary); every mutation requires
//! the admin role.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::removal::remove_account;
use crate::domain::{
    Account, AccountDraft, AccountId, AccountStatus, AccountValidationError, DeleteOutcome,
    DomainError, Notification, PasswordChange, PasswordChangeError, UserType,
};

use super::auth::{require_admin, resolve_identity};
use super::params::{ConfirmQuery, SearchQuery};
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;

/// Account fields accepted by create and update.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    /// Full name; required.
    pub name: String,
    /// Username; required.
    pub username: String,
    /// Job title, free text.
    #[serde(default)]
    pub role: String,
    /// Contact email; required.
    pub email: String,
    /// Lifecycle status; defaults to `Active`.
    #[serde(default = "default_status")]
    pub status: AccountStatus,
    /// Permission tier; defaults to `User`.
    #[serde(default = "default_user_type")]
    pub user_type: UserType,
}

fn default_status() -> AccountStatus {
    AccountStatus::Active
}

fn default_user_type() -> UserType {
    UserType::User
}

impl TryFrom<AccountPayload> for AccountDraft {
    type Error = AccountValidationError;

    fn try_from(value: AccountPayload) -> Result<Self, Self::Error> {
        Self::new(
            value.name,
            value.username,
            value.role,
            value.email,
            value.status,
            value.user_type,
        )
    }
}

/// Password-change request body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    /// New password.
    pub new_password: String,
    /// Confirmation entry; must equal `new_password`.
    pub confirm_password: String,
}

/// Outcome payload for gated deletes.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// `deleted` or `cancelled`.
    pub outcome: String,
}

pub(super) fn map_account_validation(err: &AccountValidationError) -> DomainError {
    DomainError::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": "invalid_field" }))
}

fn map_password_change(err: PasswordChangeError) -> DomainError {
    let message = match err {
        PasswordChangeError::EmptyPassword => "password must not be empty",
        PasswordChangeError::Mismatch => "Passwords do not match.",
    };
    DomainError::invalid_request(message)
}

/// List accounts, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    params(("q" = Option<String>, Query, description = "Case-insensitive filter over name, username, and email")),
    responses(
        (status = 200, description = "Accounts in insertion order", body = [Account]),
        (status = 401, description = "Unauthorised", body = DomainError)
    ),
    tags = ["accounts"],
    operation_id = "listAccounts"
)]
#[get("/accounts")]
pub async fn list_accounts(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<Account>>> {
    resolve_identity(&state.directory, &session)?;
    Ok(web::Json(state.accounts.list(query.text()).await))
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = AccountPayload,
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 403, description = "Forbidden", body = DomainError)
    ),
    tags = ["accounts"],
    operation_id = "createAccount"
)]
#[post("/accounts")]
pub async fn create_account(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AccountPayload>,
) -> ApiResult<HttpResponse> {
    let identity = resolve_identity(&state.directory, &session)?;
    require_admin(&identity)?;
    let draft = AccountDraft::try_from(payload.into_inner())
        .map_err(|err| map_account_validation(&err))?;
    let account = state.accounts.create(draft).await;
    state.notifier.notify(&Notification::success(
        "Account added",
        format!("{} has been added.", account.name),
    ));
    Ok(HttpResponse::Created().json(account))
}

/// Update an account.
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{id}",
    params(("id" = u32, Path, description = "Account id")),
    request_body = AccountPayload,
    responses(
        (status = 200, description = "Account updated", body = Account),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 403, description = "Forbidden", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["accounts"],
    operation_id = "updateAccount"
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
    payload: web::Json<AccountPayload>,
) -> ApiResult<web::Json<Account>> {
    let identity = resolve_identity(&state.directory, &session)?;
    require_admin(&identity)?;
    let id = AccountId(path.into_inner());
    let draft = AccountDraft::try_from(payload.into_inner())
        .map_err(|err| map_account_validation(&err))?;
    let account = state
        .accounts
        .update(id, draft)
        .await
        .map_err(|_| DomainError::not_found(format!("no account with id {id}")))?;
    state.notifier.notify(&Notification::success(
        "Account updated",
        format!("{} has been updated.", account.name),
    ));
    Ok(web::Json(account))
}

/// Delete an account after confirmation.
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    params(
        ("id" = u32, Path, description = "Account id"),
        ("confirm" = Option<bool>, Query, description = "Resolved confirmation-dialog answer")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 403, description = "Forbidden", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["accounts"],
    operation_id = "deleteAccount"
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
    query: web::Query<ConfirmQuery>,
) -> ApiResult<web::Json<DeleteResponse>> {
    let identity = resolve_identity(&state.directory, &session)?;
    require_admin(&identity)?;
    let id = AccountId(path.into_inner());
    match remove_account(state.accounts.as_ref(), query.gate(), id).await {
        DeleteOutcome::Deleted(account) => {
            state.notifier.notify(&Notification::success(
                "Account deleted",
                format!("{} has been removed.", account.name),
            ));
            Ok(web::Json(DeleteResponse {
                outcome: "deleted".to_owned(),
            }))
        }
        DeleteOutcome::Cancelled => Ok(web::Json(DeleteResponse {
            outcome: "cancelled".to_owned(),
        })),
        DeleteOutcome::Missing => Err(DomainError::not_found(format!("no account with id {id}"))),
    }
}

/// Validate a password change for an account.
///
/// The identity seed set is immutable, so a successful change validates and
/// notifies without rewriting any credential.
#[utoipa::path(
    post,
    path = "/api/v1/accounts/{id}/password",
    params(("id" = u32, Path, description = "Account id")),
    request_body = PasswordChangeRequest,
    responses(
        (status = 200, description = "Password accepted"),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["accounts"],
    operation_id = "changePassword"
)]
#[post("/accounts/{id}/password")]
pub async fn change_password(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
    payload: web::Json<PasswordChangeRequest>,
) -> ApiResult<HttpResponse> {
    resolve_identity(&state.directory, &session)?;
    let id = AccountId(path.into_inner());
    if state.accounts.find(id).await.is_none() {
        return Err(DomainError::not_found(format!("no account with id {id}")));
    }
    let _change = PasswordChange::try_from_parts(&payload.new_password, &payload.confirm_password)
        .map_err(map_password_change)?;
    state.notifier.notify(&Notification::success(
        "Password changed",
        "Password has been updated successfully.",
    ));
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use rstest::rstest;
    use serde_json::{json, Value};

    use crate::outbound::notify::RecordingNotifier;
    use crate::test_support::{login_as, seeded_data_with_notifier, test_session_middleware};

    use super::super::api_scope;

    #[rstest]
    #[actix_web::test]
    async fn mike_query_returns_exactly_mike_jimenez() {
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
                .uri("/api/v1/accounts?q=mike")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("accounts JSON");
        let hits = body.as_array().expect("array");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].get("name").and_then(Value::as_str),
            Some("Mike Jimenez")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_requires_a_session() {
        let notifier = Arc::new(RecordingNotifier::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_data_with_notifier(notifier))
                .wrap(test_session_middleware())
                .service(api_scope()),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/accounts")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_name_is_rejected_and_collection_unchanged() {
        let notifier = Arc::new(RecordingNotifier::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_data_with_notifier(notifier.clone()))
                .wrap(test_session_middleware())
                .service(api_scope()),
        )
        .await;
        let cookie = login_as(&app, "admin", "123").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/accounts")
                .cookie(cookie.clone())
                .set_json(json!({
                    "name": "",
                    "username": "ghost",
                    "email": "ghost@pbj.com"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(notifier.titles().is_empty());

        let listing = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/accounts")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(listing).await).expect("accounts JSON");
        assert_eq!(body.as_array().map(Vec::len), Some(4));
    }

    #[rstest]
    #[actix_web::test]
    async fn non_admin_cannot_mutate_accounts() {
        let notifier = Arc::new(RecordingNotifier::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_data_with_notifier(notifier))
                .wrap(test_session_middleware())
                .service(api_scope()),
        )
        .await;
        let cookie = login_as(&app, "docyummy", "123").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/accounts")
                .cookie(cookie)
                .set_json(json!({
                    "name": "New User",
                    "username": "new",
                    "email": "new@pbj.com"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[rstest]
    #[actix_web::test]
    async fn password_mismatch_is_rejected() {
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
            actix_test::TestRequest::post()
                .uri("/api/v1/accounts/1/password")
                .cookie(cookie)
                .set_json(json!({
                    "newPassword": "secret",
                    "confirmPassword": "other"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Passwords do not match.")
        );
    }
}
