//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers deal only in domain-friendly
//! operations: persist the logged-in username, read it back, clear it. The
//! cookie stores the username alone; each request resolves it against the
//! identity directory, so a username that no longer resolves simply behaves
//! as unauthenticated.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{DomainError, Identity};

pub(crate) const USERNAME_KEY: &str = "username";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated identity's username in the session cookie.
    pub fn persist(&self, identity: &Identity) -> Result<(), DomainError> {
        self.0
            .insert(USERNAME_KEY, identity.username())
            .map_err(|error| DomainError::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current username from the session, if present.
    pub fn username(&self) -> Result<Option<String>, DomainError> {
        self.0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| DomainError::internal(format!("failed to read session: {error}")))
    }

    /// Require an authenticated username or return `401 Unauthorized`.
    pub fn require_username(&self) -> Result<String, DomainError> {
        self.username()?
            .ok_or_else(|| DomainError::unauthorized("login required"))
    }

    /// Drop the session unconditionally; logout always succeeds.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    use crate::domain::{Identity, Role};

    use super::*;

    fn fixture_identity() -> Identity {
        Identity::new("System Administrator", "admin", "123", Role::Admin)
            .expect("fixture identity")
    }

    #[actix_web::test]
    async fn round_trips_username() {
        let app = test::init_service(
            App::new()
                .wrap(crate::test_support::test_session_middleware())
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist(&fixture_identity())?;
                        Ok::<_, DomainError>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let username = session.require_username()?;
                        Ok::<_, DomainError>(HttpResponse::Ok().body(username))
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "admin");
    }

    #[actix_web::test]
    async fn missing_username_is_unauthorised() {
        let app = test::init_service(
            App::new()
                .wrap(crate::test_support::test_session_middleware())
                .route(
                    "/require",
                    web::get().to(|session: SessionContext| async move {
                        let _ = session.require_username()?;
                        Ok::<_, DomainError>(HttpResponse::Ok())
                    }),
                ),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/require").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
