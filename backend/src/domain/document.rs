//! Document entity, attachment metadata, draft validation, and the
//! inline-versus-download presentation rule.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::search::any_field_matches;

/// Stable document identifier assigned by the store's counter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct DocumentId(pub u32);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DocumentStatus {
    /// Review finished, accepted.
    Approved,
    /// Awaiting or undergoing review.
    Pending,
    /// Review finished, declined.
    Rejected,
}

impl DocumentStatus {
    /// Parse a seed-record status string.
    ///
    /// `In Progress` appears in older sample data and maps onto
    /// [`DocumentStatus::Pending`].
    pub fn parse(raw: &str) -> Result<Self, DocumentValidationError> {
        match raw {
            "Approved" => Ok(Self::Approved),
            "Pending" | "In Progress" => Ok(Self::Pending),
            "Rejected" => Ok(Self::Rejected),
            other => Err(DocumentValidationError::UnknownStatus {
                status: other.to_owned(),
            }),
        }
    }
}

/// File metadata captured from the drop surface.
///
/// Only the name and size survive the interaction; the bytes themselves are
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    /// File name as dropped.
    pub file_name: String,
    /// Size in bytes.
    pub byte_size: u64,
}

impl FileAttachment {
    /// Validate dropped-file metadata.
    pub fn new(
        file_name: impl Into<String>,
        byte_size: u64,
    ) -> Result<Self, DocumentValidationError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(DocumentValidationError::EmptyField { field: "file" });
        }
        Ok(Self {
            file_name,
            byte_size,
        })
    }

    /// URL the attachment will be served from.
    #[must_use]
    pub fn file_url(&self) -> String {
        format!("/files/{}", self.file_name)
    }
}

/// How the viewer should present a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewDisposition {
    /// Render in the browser tab.
    Inline,
    /// Trigger a download.
    Download,
}

impl ViewDisposition {
    /// Presentation rule: PDF opens inline, anything else downloads.
    ///
    /// The extension check is case-insensitive (`report.PDF` opens inline).
    #[must_use]
    pub fn for_file_name(file_name: &str) -> Self {
        let is_pdf = file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            Self::Inline
        } else {
            Self::Download
        }
    }
}

/// Validation errors raised while building document drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentValidationError {
    /// A required field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// No file was attached.
    #[error("a file must be attached")]
    MissingFile,
    /// Status string outside the known set.
    #[error("unknown document status: {status}")]
    UnknownStatus { status: String },
}

impl DocumentValidationError {
    /// Field name the error refers to, for structured error details.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => field,
            Self::MissingFile => "file",
            Self::UnknownStatus { .. } => "status",
        }
    }
}

/// Validated document fields ahead of a create or update.
///
/// ## Invariants
/// - `title` and `author` are non-empty once trimmed.
/// - A file attachment is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDraft {
    title: String,
    author: String,
    status: DocumentStatus,
    file: FileAttachment,
}

impl DocumentDraft {
    /// Validate raw field values into a draft.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        status: DocumentStatus,
        file: Option<FileAttachment>,
    ) -> Result<Self, DocumentValidationError> {
        let title = title.into();
        let author = author.into();
        for (field, value) in [("title", &title), ("author", &author)] {
            if value.trim().is_empty() {
                return Err(DocumentValidationError::EmptyField { field });
            }
        }
        let file = file.ok_or(DocumentValidationError::MissingFile)?;
        Ok(Self {
            title,
            author,
            status,
            file,
        })
    }
}

/// A managed document row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable identifier.
    pub id: DocumentId,
    /// Document title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Review status.
    pub status: DocumentStatus,
    /// Attached file name.
    pub file_name: String,
    /// URL the attached file is served from.
    pub file_url: String,
    /// Attachment size in bytes.
    pub byte_size: u64,
    /// Creation date.
    pub date_created: NaiveDate,
    /// Last update instant.
    pub last_updated: DateTime<Utc>,
}

impl Document {
    /// Materialise a draft under a store-assigned id at `now`.
    #[must_use]
    pub fn from_draft(id: DocumentId, draft: DocumentDraft, now: DateTime<Utc>) -> Self {
        let file_url = draft.file.file_url();
        Self {
            id,
            title: draft.title,
            author: draft.author,
            status: draft.status,
            file_name: draft.file.file_name,
            file_url,
            byte_size: draft.file.byte_size,
            date_created: now.date_naive(),
            last_updated: now,
        }
    }

    /// Replace editable fields from a draft, refreshing `last_updated` and
    /// keeping the id and creation date.
    #[must_use]
    pub fn with_draft(self, draft: DocumentDraft, now: DateTime<Utc>) -> Self {
        let file_url = draft.file.file_url();
        Self {
            id: self.id,
            title: draft.title,
            author: draft.author,
            status: draft.status,
            file_name: draft.file.file_name,
            file_url,
            byte_size: draft.file.byte_size,
            date_created: self.date_created,
            last_updated: now,
        }
    }

    /// List-view filter: title or author contains `query`.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        any_field_matches([&*self.title, &*self.author], query)
    }

    /// Presentation rule for the stored attachment.
    #[must_use]
    pub fn view_disposition(&self) -> ViewDisposition {
        ViewDisposition::for_file_name(&self.file_name)
    }
}
