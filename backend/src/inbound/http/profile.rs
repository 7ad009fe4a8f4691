//! Profile handlers for the signed-in identity.
//!
//! The profile is the account record whose username matches the session
//! identity; identities without a matching account (service logins) get a
//! 404 rather than a synthesised record.

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountDraft, DomainError, Identity, Notification, Role};

use super::accounts::{map_account_validation, AccountPayload};
use super::auth::{require_admin, resolve_identity};
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;

/// Profile view combining the session identity with its account record.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Display name from the identity seed.
    pub display_name: String,
    /// Permission role of the identity.
    pub role: Role,
    /// The matching account record.
    pub account: Account,
}

impl ProfileResponse {
    fn new(identity: &Identity, account: Account) -> Self {
        Self {
            display_name: identity.name().to_owned(),
            role: identity.role(),
            account,
        }
    }
}

fn profile_not_found(identity: &Identity) -> DomainError {
    DomainError::not_found(format!(
        "no account record for username {}",
        identity.username()
    ))
}

/// Fetch the signed-in identity's profile.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Profile for the session identity", body = ProfileResponse),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 404, description = "No matching account record", body = DomainError)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ProfileResponse>> {
    let identity = resolve_identity(&state.directory, &session)?;
    let account = state
        .accounts
        .find_by_username(identity.username())
        .await
        .ok_or_else(|| profile_not_found(&identity))?;
    Ok(web::Json(ProfileResponse::new(&identity, account)))
}

/// Update the signed-in identity's account record.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = AccountPayload,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 403, description = "Forbidden", body = DomainError),
        (status = 404, description = "No matching account record", body = DomainError)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[put("/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AccountPayload>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let identity = resolve_identity(&state.directory, &session)?;
    require_admin(&identity)?;
    let current = state
        .accounts
        .find_by_username(identity.username())
        .await
        .ok_or_else(|| profile_not_found(&identity))?;
    let draft = AccountDraft::try_from(payload.into_inner())
        .map_err(|err| map_account_validation(&err))?;
    let account = state
        .accounts
        .update(current.id, draft)
        .await
        .map_err(|_| profile_not_found(&identity))?;
    state.notifier.notify(&Notification::success(
        "Profile updated",
        "Your profile has been updated.",
    ));
    Ok(web::Json(ProfileResponse::new(&identity, account)))
}
