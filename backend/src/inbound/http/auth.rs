//! Authentication and authorization helpers used by HTTP handlers.
//!
//! Concentrates credential checks and identity resolution here so the
//! handler modules stay focused on request/response mapping.

use crate::domain::{DomainError, Identity, IdentityDirectory, LoginCredentials};

use super::session::SessionContext;
use super::ApiResult;

/// Match credentials against the directory or fail with `401`.
pub fn authenticate(
    directory: &IdentityDirectory,
    credentials: &LoginCredentials,
) -> ApiResult<Identity> {
    directory
        .authenticate(credentials)
        .cloned()
        .ok_or_else(|| DomainError::unauthorized("Invalid credentials."))
}

/// Resolve the session's username to a directory identity.
///
/// A session naming an unknown username (possible only if the cookie
/// outlives a reseed) is treated the same as no session at all.
pub fn resolve_identity(
    directory: &IdentityDirectory,
    session: &SessionContext,
) -> ApiResult<Identity> {
    let username = session.require_username()?;
    directory
        .find(&username)
        .cloned()
        .ok_or_else(|| DomainError::unauthorized("login required"))
}

/// Require the admin role or fail with `403`.
pub fn require_admin(identity: &Identity) -> ApiResult<()> {
    if identity.role().is_admin() {
        Ok(())
    } else {
        Err(DomainError::forbidden("admin role required"))
    }
}
