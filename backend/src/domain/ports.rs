//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with collaborators:
//! the entity stores, the transient-notification surface (a toast in the
//! original UI), and the yes/no confirmation gate a delete passes through.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

use async_trait::async_trait;
use thiserror::Error;

use super::account::{Account, AccountDraft, AccountId};
use super::document::{Document, DocumentDraft, DocumentId};

/// Errors surfaced by an entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("no record with id {id}")]
    NotFound {
        /// The id that failed to resolve.
        id: u32,
    },
}

/// Collection of accounts with list/find/create/update/delete operations.
///
/// `list` materialises matches in insertion order on every call; creation
/// assigns identifiers from a counter that never reuses a value, even after
/// deletions.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// All accounts whose searched fields contain `query`, insertion order.
    async fn list(&self, query: &str) -> Vec<Account>;

    /// Look up one account by id.
    async fn find(&self, id: AccountId) -> Option<Account>;

    /// Look up one account by exact username.
    async fn find_by_username(&self, username: &str) -> Option<Account>;

    /// Append a new account under a fresh id.
    async fn create(&self, draft: AccountDraft) -> Account;

    /// Replace the account carrying `id`.
    async fn update(&self, id: AccountId, draft: AccountDraft) -> Result<Account, StoreError>;

    /// Remove and return the account carrying `id`; `None` leaves the
    /// collection unchanged.
    async fn delete(&self, id: AccountId) -> Option<Account>;
}

/// Collection of documents with list/find/create/update/delete operations.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents whose searched fields contain `query`, insertion order.
    async fn list(&self, query: &str) -> Vec<Document>;

    /// Look up one document by id.
    async fn find(&self, id: DocumentId) -> Option<Document>;

    /// Append a new document under a fresh id, stamped with the current time.
    async fn create(&self, draft: DocumentDraft) -> Document;

    /// Replace the document carrying `id`, refreshing its update stamp.
    async fn update(&self, id: DocumentId, draft: DocumentDraft) -> Result<Document, StoreError>;

    /// Remove and return the document carrying `id`; `None` leaves the
    /// collection unchanged.
    async fn delete(&self, id: DocumentId) -> Option<Document>;
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation completed.
    Success,
    /// The operation failed.
    Error,
    /// Neutral information.
    Info,
}

/// A transient notification describing an operation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline, e.g. `Account deleted`.
    pub title: String,
    /// One-sentence description.
    pub message: String,
    /// Display severity.
    pub severity: Severity,
}

impl Notification {
    /// Build a success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Build an error notification.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Fire-and-forget notification sink.
///
/// Implementations must never fail the caller: a notification that cannot
/// be delivered is dropped, and the mutation it described stands.
pub trait Notifier: Send + Sync {
    /// Deliver one notification on a best-effort basis.
    fn notify(&self, notification: &Notification);
}

/// Prompt presented by the confirmation gate before a delete proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    /// Dialog headline.
    pub title: String,
    /// Dialog body naming the record at stake.
    pub message: String,
}

impl ConfirmationPrompt {
    /// Standard delete prompt naming its subject.
    #[must_use]
    pub fn delete(subject: &str) -> Self {
        Self {
            title: "Are you sure?".to_owned(),
            message: format!("Delete {subject}? This action cannot be undone."),
        }
    }
}

/// Yes/no confirmation collaborator.
///
/// Contract: present the prompt, resolve to a boolean; callers proceed with
/// the guarded operation only on `true`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Resolve the prompt to confirmed (`true`) or cancelled (`false`).
    async fn confirm(&self, prompt: &ConfirmationPrompt) -> bool;
}

/// Gate that confirms every prompt; used where the caller already carries
/// an explicit confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmationGate for AlwaysConfirm {
    async fn confirm(&self, _prompt: &ConfirmationPrompt) -> bool {
        true
    }
}

/// Gate that cancels every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

#[async_trait]
impl ConfirmationGate for NeverConfirm {
    async fn confirm(&self, _prompt: &ConfirmationPrompt) -> bool {
        false
    }
}
