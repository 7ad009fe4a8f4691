//! Login identities and the fixed directory that authenticates them.
//!
//! The directory is seeded once at startup and never mutated afterwards.
//! Credential comparison is an exact, case-sensitive match on both the
//! username and the password; there is no lockout, expiry, or hashing —
//! this is a demonstration gate over sample data, not a security boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Role attached to a login identity.
///
/// Controls navigation affordances (the Accounts area is advertised to
/// admins only) and server-side mutation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May manage accounts and edit profile fields.
    Admin,
    /// May view documents and their own profile.
    User,
}

impl Role {
    /// Parse a seed-record role string.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        match raw {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(IdentityError::UnknownRole {
                role: other.to_owned(),
            }),
        }
    }

    /// True for the admin role.
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Errors raised while building or querying the identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// A seed identity used a role outside `admin`/`user`.
    #[error("unknown identity role: {role}")]
    UnknownRole { role: String },
    /// An identity field was empty after trimming.
    #[error("identity {field} must not be empty")]
    EmptyField { field: &'static str },
    /// Two seed identities shared a username.
    #[error("duplicate username in identity seed: {username}")]
    DuplicateUsername { username: String },
}

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    username: String,
    password: String,
    role: Role,
}

impl Identity {
    /// Construct an identity, rejecting blank fields.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Result<Self, IdentityError> {
        let name = name.into();
        let username = username.into();
        let password = password.into();
        for (field, value) in [("name", &name), ("username", &username), ("password", &password)] {
            if value.trim().is_empty() {
                return Err(IdentityError::EmptyField { field });
            }
        }
        Ok(Self {
            name,
            username,
            password,
            role,
        })
    }

    /// Display name shown after login.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Login username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Identity role.
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Validated login credentials.
///
/// Both fields keep caller-provided whitespace: the directory match is an
/// exact string comparison, so `" admin"` is simply a mismatch rather than
/// a normalised alias of `admin`. The password buffer is zeroed on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

/// Validation errors for login payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Username was the empty string.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for directory lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// The fixed set of identities accepted by the login gate.
///
/// ## Invariants
/// - Usernames are unique across the directory.
/// - The directory is immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct IdentityDirectory {
    identities: Vec<Identity>,
}

impl IdentityDirectory {
    /// Build a directory, enforcing username uniqueness.
    pub fn new(identities: Vec<Identity>) -> Result<Self, IdentityError> {
        let mut seen = std::collections::HashSet::new();
        for identity in &identities {
            if !seen.insert(identity.username()) {
                return Err(IdentityError::DuplicateUsername {
                    username: identity.username().to_owned(),
                });
            }
        }
        Ok(Self { identities })
    }

    /// Match credentials against the directory.
    ///
    /// Returns the identity on an exact username+password match, `None`
    /// otherwise. Callers decide how a miss surfaces; the directory itself
    /// never mutates state on failure.
    pub fn authenticate(&self, credentials: &LoginCredentials) -> Option<&Identity> {
        self.identities.iter().find(|identity| {
            identity.username == credentials.username()
                && identity.password == credentials.password()
        })
    }

    /// Look up an identity by username.
    pub fn find(&self, username: &str) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| identity.username == username)
    }
}
