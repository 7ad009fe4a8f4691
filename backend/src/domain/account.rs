//! Account entity, its enumerated fields, and draft validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::search::any_field_matches;

/// Stable account identifier assigned by the store's counter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AccountStatus {
    /// Account is in use.
    Active,
    /// Account has been switched off.
    Inactive,
    /// Account awaits activation.
    Pending,
}

impl AccountStatus {
    /// Parse a seed-record status string.
    pub fn parse(raw: &str) -> Result<Self, AccountValidationError> {
        match raw {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "Pending" => Ok(Self::Pending),
            other => Err(AccountValidationError::UnknownStatus {
                status: other.to_owned(),
            }),
        }
    }
}

/// Coarse permission tier shown on the account table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserType {
    /// Full management access.
    Admin,
    /// Regular member.
    User,
    /// Supervisory member.
    Manager,
}

impl UserType {
    /// Parse a seed-record user-type string.
    pub fn parse(raw: &str) -> Result<Self, AccountValidationError> {
        match raw {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            "Manager" => Ok(Self::Manager),
            other => Err(AccountValidationError::UnknownUserType {
                user_type: other.to_owned(),
            }),
        }
    }
}

/// Validation errors raised while building account drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountValidationError {
    /// A required field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Status string outside the known set.
    #[error("unknown account status: {status}")]
    UnknownStatus { status: String },
    /// User-type string outside the known set.
    #[error("unknown account user type: {user_type}")]
    UnknownUserType { user_type: String },
}

impl AccountValidationError {
    /// Field name the error refers to, for structured error details.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => field,
            Self::UnknownStatus { .. } => "status",
            Self::UnknownUserType { .. } => "userType",
        }
    }
}

/// Validated account fields ahead of a create or update.
///
/// ## Invariants
/// - `name`, `username`, and `email` are non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    name: String,
    username: String,
    role: String,
    email: String,
    status: AccountStatus,
    user_type: UserType,
}

impl AccountDraft {
    /// Validate raw field values into a draft.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        status: AccountStatus,
        user_type: UserType,
    ) -> Result<Self, AccountValidationError> {
        let name = name.into();
        let username = username.into();
        let email = email.into();
        for (field, value) in [("name", &name), ("username", &username), ("email", &email)] {
            if value.trim().is_empty() {
                return Err(AccountValidationError::EmptyField { field });
            }
        }
        Ok(Self {
            name,
            username,
            role: role.into(),
            email,
            status,
            user_type,
        })
    }
}

/// A managed account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Stable identifier.
    pub id: AccountId,
    /// Full name.
    pub name: String,
    /// Username correlated (loosely) with a login identity.
    pub username: String,
    /// Job title, free text.
    pub role: String,
    /// Contact email.
    pub email: String,
    /// Lifecycle status.
    pub status: AccountStatus,
    /// Permission tier.
    pub user_type: UserType,
}

impl Account {
    /// Materialise a draft under a store-assigned id.
    #[must_use]
    pub fn from_draft(id: AccountId, draft: AccountDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: draft.username,
            role: draft.role,
            email: draft.email,
            status: draft.status,
            user_type: draft.user_type,
        }
    }

    /// Replace every editable field from a draft, keeping the id.
    #[must_use]
    pub fn with_draft(self, draft: AccountDraft) -> Self {
        Self::from_draft(self.id, draft)
    }

    /// List-view filter: name, username, or email contains `query`.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        any_field_matches([&*self.name, &*self.username, &*self.email], query)
    }
}

/// Password-change request for an account.
///
/// The original flow only verifies the two entries agree and notifies; the
/// identity seed set stays immutable, so no credential is actually written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    new_password: String,
}

/// Validation errors for the password-change flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordChangeError {
    /// One of the password fields was blank.
    #[error("password must not be empty")]
    EmptyPassword,
    /// The two entries disagree.
    #[error("passwords do not match")]
    Mismatch,
}

impl PasswordChange {
    /// Validate a new-password/confirmation pair.
    pub fn try_from_parts(
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self, PasswordChangeError> {
        if new_password.is_empty() || confirm_password.is_empty() {
            return Err(PasswordChangeError::EmptyPassword);
        }
        if new_password != confirm_password {
            return Err(PasswordChangeError::Mismatch);
        }
        Ok(Self {
            new_password: new_password.to_owned(),
        })
    }

    /// The agreed password value.
    pub fn new_password(&self) -> &str {
        self.new_password.as_str()
    }
}
