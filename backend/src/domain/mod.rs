//! Domain primitives, entities, and ports.
//!
//! Purpose: define the strongly typed core of the dashboard — identities and
//! the login directory, accounts and documents with draft validation, the
//! list filter, derived aggregates, and the ports the adapters implement.
//! Keep types immutable and document invariants in each type's Rustdoc.

pub mod account;
pub mod dashboard;
pub mod document;
pub mod error;
pub mod identity;
pub mod ports;
pub mod removal;
pub mod search;
pub mod seed;

pub use self::account::{
    Account, AccountDraft, AccountId, AccountStatus, AccountValidationError, PasswordChange,
    PasswordChangeError, UserType,
};
pub use self::dashboard::StatusTally;
pub use self::document::{
    Document, DocumentDraft, DocumentId, DocumentStatus, DocumentValidationError, FileAttachment,
    ViewDisposition,
};
pub use self::error::{DomainError, ErrorCode};
pub use self::identity::{
    Identity, IdentityDirectory, IdentityError, LoginCredentials, LoginValidationError, Role,
};
pub use self::ports::{
    AccountStore, AlwaysConfirm, ConfirmationGate, ConfirmationPrompt, DocumentStore,
    NeverConfirm, Notification, Notifier, Severity, StoreError,
};
pub use self::removal::DeleteOutcome;

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, DomainError>;
