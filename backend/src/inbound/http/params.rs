//! Query-string parameter types shared by the list and delete handlers.

use serde::Deserialize;

use crate::domain::{AlwaysConfirm, ConfirmationGate, NeverConfirm};

/// Free-text filter for list endpoints; absent means "return all".
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against the searched fields.
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// The query text, with absence normalised to the empty string.
    #[must_use]
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// Confirmation flag carried by delete requests.
///
/// The HTTP client answers the yes/no dialog before the request is sent, so
/// the wire carries the resolved boolean and this type replays it through
/// the confirmation-gate port. An absent flag counts as "cancelled".
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    /// `true` when the user confirmed the prompt.
    #[serde(default)]
    pub confirm: Option<bool>,
}

impl ConfirmQuery {
    /// Gate implementation replaying the carried answer.
    #[must_use]
    pub fn gate(&self) -> &'static dyn ConfirmationGate {
        if self.confirm.unwrap_or(false) {
            &AlwaysConfirm
        } else {
            &NeverConfirm
        }
    }
}
