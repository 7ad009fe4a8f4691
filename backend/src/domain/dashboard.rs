//! Aggregates derived from the document store for the home view.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::document::{Document, DocumentStatus};

/// Per-status document counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusTally {
    /// Documents in `Approved`.
    pub approved: usize,
    /// Documents in `Pending`.
    pub pending: usize,
    /// Documents in `Rejected`.
    pub rejected: usize,
    /// All documents, regardless of status.
    pub total: usize,
}

impl StatusTally {
    /// Tally the given documents.
    #[must_use]
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut tally = Self::default();
        for document in documents {
            match document.status {
                DocumentStatus::Approved => tally.approved += 1,
                DocumentStatus::Pending => tally.pending += 1,
                DocumentStatus::Rejected => tally.rejected += 1,
            }
            tally.total += 1;
        }
        tally
    }
}
