//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod params;
pub mod profile;
pub mod session;
pub mod sessions;
pub mod state;

pub use error::ApiResult;

use actix_web::{web, Scope};

/// All REST endpoints mounted under `/api/v1`.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(sessions::login)
        .service(sessions::logout)
        .service(sessions::current_session)
        .service(accounts::list_accounts)
        .service(accounts::create_account)
        .service(accounts::update_account)
        .service(accounts::delete_account)
        .service(accounts::change_password)
        .service(documents::list_documents)
        .service(documents::create_document)
        .service(documents::update_document)
        .service(documents::delete_document)
        .service(documents::view_document)
        .service(documents::get_document)
        .service(profile::get_profile)
        .service(profile::update_profile)
        .service(dashboard::get_dashboard)
}
