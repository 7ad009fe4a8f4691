//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: every endpoint from the inbound layer, the shared
//! domain schemas, and the session cookie security scheme.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Account, AccountStatus, Document, DocumentStatus, DomainError, ErrorCode, Role, StatusTally,
    UserType, ViewDisposition,
};
use crate::inbound::http::accounts::{AccountPayload, DeleteResponse, PasswordChangeRequest};
use crate::inbound::http::dashboard::DashboardResponse;
use crate::inbound::http::documents::{DocumentPayload, FilePayload, ViewResponse};
use crate::inbound::http::profile::ProfileResponse;
use crate::inbound::http::sessions::{LoginRequest, SessionResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "PBJ document management API",
        description = "HTTP interface for session-authenticated document and account management.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::sessions::login,
        crate::inbound::http::sessions::logout,
        crate::inbound::http::sessions::current_session,
        crate::inbound::http::accounts::list_accounts,
        crate::inbound::http::accounts::create_account,
        crate::inbound::http::accounts::update_account,
        crate::inbound::http::accounts::delete_account,
        crate::inbound::http::accounts::change_password,
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::get_document,
        crate::inbound::http::documents::create_document,
        crate::inbound::http::documents::update_document,
        crate::inbound::http::documents::delete_document,
        crate::inbound::http::documents::view_document,
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::dashboard::get_dashboard,
    ),
    components(schemas(
        DomainError,
        ErrorCode,
        Role,
        Account,
        AccountStatus,
        UserType,
        Document,
        DocumentStatus,
        ViewDisposition,
        StatusTally,
        LoginRequest,
        SessionResponse,
        AccountPayload,
        PasswordChangeRequest,
        DeleteResponse,
        DocumentPayload,
        FilePayload,
        ViewResponse,
        ProfileResponse,
        DashboardResponse,
    )),
    tags(
        (name = "sessions", description = "Login, logout, and session lookup"),
        (name = "accounts", description = "Account management"),
        (name = "documents", description = "Document management"),
        (name = "profile", description = "The signed-in identity's profile"),
        (name = "dashboard", description = "Landing-page summary")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/login",
            "/api/v1/logout",
            "/api/v1/session",
            "/api/v1/accounts",
            "/api/v1/accounts/{id}",
            "/api/v1/accounts/{id}/password",
            "/api/v1/documents",
            "/api/v1/documents/{id}",
            "/api/v1/documents/{id}/view",
            "/api/v1/profile",
            "/api/v1/dashboard",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing OpenAPI path {path}"
            );
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("DomainError"));
        assert!(schemas.contains_key("ErrorCode"));
    }
}
