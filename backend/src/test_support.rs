//! Test utilities for the backend crate.
//!
//! Shared helpers for both unit tests (in `src/`) and integration tests
//! (in `tests/`). Only compiled for tests or with the `test-support`
//! feature enabled.

use std::sync::Arc;
use std::time::Duration;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test as actix_test, web};
use serde_json::json;

use crate::domain::Notifier;
use crate::inbound::http::state::HttpState;
use crate::outbound::notify::TracingNotifier;

/// Session middleware configured for tests: a fresh key per invocation,
/// cookie named `session`, `Secure` flag off for plain-HTTP test calls.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Seeded application state with the given notification sink and no
/// login delay.
#[must_use]
pub fn seeded_data_with_notifier(notifier: Arc<dyn Notifier>) -> web::Data<HttpState> {
    let state =
        HttpState::from_seed(notifier, Duration::ZERO).expect("shipped seed data converts");
    web::Data::new(state)
}

/// Seeded application state logging notifications through `tracing`.
#[must_use]
pub fn seeded_data() -> web::Data<HttpState> {
    seeded_data_with_notifier(Arc::new(TracingNotifier))
}

/// Log in through the HTTP surface and return the session cookie.
pub async fn login_as<S, B>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request(),
    )
    .await;
    assert!(
        response.status().is_success(),
        "login as {username} failed with {}",
        response.status()
    );
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
