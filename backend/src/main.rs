//! Backend entry-point: wires REST endpoints, session middleware, and seeded
//! in-memory stores.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::{web, App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::api_scope;
use backend::inbound::http::state::HttpState;
use backend::outbound::notify::TracingNotifier;

/// Default pause before a login attempt resolves, in milliseconds.
///
/// Overridable through `LOGIN_DELAY_MS`; set it to `0` in tests.
const DEFAULT_LOGIN_DELAY_MS: u64 = 1_500;

fn session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

fn login_delay() -> Duration {
    let millis = env::var("LOGIN_DELAY_MS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_LOGIN_DELAY_MS);
    Duration::from_millis(millis)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let state = HttpState::from_seed(Arc::new(TracingNotifier), login_delay())
        .map_err(|e| std::io::Error::other(format!("seed data rejected: {e}")))?;
    let state = web::Data::new(state);

    HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        App::new()
            .app_data(state.clone())
            .service(api_scope().wrap(session))
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
