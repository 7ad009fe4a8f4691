//! Login, logout, and current-session handlers.
//!
//! ```text
//! POST /api/v1/login  {"username":"admin","password":"123"}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    DomainError, Identity, LoginCredentials, LoginValidationError, Role,
};

use super::auth::{authenticate, resolve_identity};
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login username.
    pub username: String,
    /// Login password.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Current-session payload returned to the navigation shell.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Display name of the logged-in identity.
    pub name: String,
    /// Username of the logged-in identity.
    pub username: String,
    /// Identity role.
    pub role: Role,
    /// Whether the Accounts area is advertised in the navigation.
    ///
    /// Advisory only: listing stays readable to any authenticated session,
    /// mutation is enforced separately.
    pub accounts_visible: bool,
}

impl From<&Identity> for SessionResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.name().to_owned(),
            username: identity.username().to_owned(),
            role: identity.role(),
            accounts_visible: identity.role().is_admin(),
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> DomainError {
    match err {
        LoginValidationError::EmptyUsername => {
            DomainError::invalid_request("username must not be empty")
                .with_details(json!({ "field": "username", "code": "empty_username" }))
        }
        LoginValidationError::EmptyPassword => {
            DomainError::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
    }
}

/// Authenticate against the seed directory and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = crate::domain::DomainError),
        (status = 401, description = "Invalid credentials", body = crate::domain::DomainError)
    ),
    tags = ["sessions"],
    operation_id = "login",
    security(())
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    // Cosmetic spinner delay carried over from the original login page.
    if !state.login_delay.is_zero() {
        tokio::time::sleep(state.login_delay).await;
    }
    let identity = authenticate(&state.directory, &credentials)?;
    session.persist(&identity)?;
    Ok(web::Json(SessionResponse::from(&identity)))
}

/// Clear the session; succeeds whether or not one existed.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 200, description = "Session cleared")),
    tags = ["sessions"],
    operation_id = "logout",
    security(())
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::Ok().finish()
}

/// Describe the current session identity.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Current identity", body = SessionResponse),
        (status = 401, description = "Unauthorised", body = crate::domain::DomainError)
    ),
    tags = ["sessions"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionResponse>> {
    let identity = resolve_identity(&state.directory, &session)?;
    Ok(web::Json(SessionResponse::from(&identity)))
}
