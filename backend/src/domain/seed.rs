//! Conversion of seed records into validated domain values.
//!
//! The `seed-data` crate carries enumerated fields as strings so it stays
//! independent of domain types; this module parses them and fails loudly at
//! startup when a record is malformed.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use seed_data::{SeedAccount, SeedDocument, SeedIdentity};

use super::account::{Account, AccountDraft, AccountId, AccountStatus, AccountValidationError, UserType};
use super::document::{
    Document, DocumentId, DocumentStatus, DocumentValidationError, FileAttachment,
};
use super::identity::{Identity, IdentityDirectory, IdentityError, Role};

/// Errors raised while converting seed records.
#[derive(Debug, Error)]
pub enum SeedError {
    /// An identity record was malformed or duplicated.
    #[error("identity seed invalid: {0}")]
    Identity(#[from] IdentityError),
    /// An account record failed field validation.
    #[error("account seed invalid: {0}")]
    Account(#[from] AccountValidationError),
    /// A document record failed field validation.
    #[error("document seed invalid: {0}")]
    Document(#[from] DocumentValidationError),
    /// A date field failed to parse.
    #[error("seed date invalid: {raw}")]
    Date {
        /// The raw value that failed to parse.
        raw: String,
    },
}

/// Build the identity directory from seed identities.
pub fn directory_from_seed(records: Vec<SeedIdentity>) -> Result<IdentityDirectory, SeedError> {
    let identities = records
        .into_iter()
        .map(|record| {
            let role = Role::parse(&record.role)?;
            Identity::new(record.name, record.username, record.password, role)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IdentityDirectory::new(identities)?)
}

/// Convert seed accounts into domain accounts, keeping their seed ids.
pub fn accounts_from_seed(records: Vec<SeedAccount>) -> Result<Vec<Account>, SeedError> {
    records
        .into_iter()
        .map(|record| {
            let status = AccountStatus::parse(&record.status)?;
            let user_type = UserType::parse(&record.user_type)?;
            let draft = AccountDraft::new(
                record.name,
                record.username,
                record.role,
                record.email,
                status,
                user_type,
            )?;
            Ok(Account::from_draft(AccountId(record.id), draft))
        })
        .collect()
}

/// Convert seed documents into domain documents, keeping their seed ids.
pub fn documents_from_seed(records: Vec<SeedDocument>) -> Result<Vec<Document>, SeedError> {
    records
        .into_iter()
        .map(|record| {
            let status = DocumentStatus::parse(&record.status)?;
            let date_created = record
                .date_created
                .parse::<NaiveDate>()
                .map_err(|_| SeedError::Date {
                    raw: record.date_created.clone(),
                })?;
            let last_updated =
                record
                    .last_updated
                    .parse::<DateTime<Utc>>()
                    .map_err(|_| SeedError::Date {
                        raw: record.last_updated.clone(),
                    })?;
            let file = FileAttachment::new(record.file_name, record.byte_size)?;
            Ok(Document {
                id: DocumentId(record.id),
                title: record.title,
                author: record.author,
                status,
                file_name: file.file_name,
                file_url: record.file_url,
                byte_size: record.byte_size,
                date_created,
                last_updated,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn shipped_seed_records_convert_cleanly() {
        let directory =
            directory_from_seed(seed_data::seed_identities()).expect("identities convert");
        assert!(directory.find("admin").is_some());

        let accounts = accounts_from_seed(seed_data::seed_accounts()).expect("accounts convert");
        assert_eq!(accounts.len(), 4);

        let documents =
            documents_from_seed(seed_data::seed_documents()).expect("documents convert");
        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].file_url, "/files/proposal.pdf");
    }

    #[rstest]
    fn malformed_date_is_reported() {
        let mut records = seed_data::seed_documents();
        records[0].date_created = "17/02/2024".to_owned();
        let err = documents_from_seed(records).expect_err("bad date must fail");
        assert!(matches!(err, SeedError::Date { .. }));
    }

    #[rstest]
    fn unknown_account_status_is_reported() {
        let mut records = seed_data::seed_accounts();
        records[0].status = "Suspended".to_owned();
        let err = accounts_from_seed(records).expect_err("bad status must fail");
        assert!(matches!(err, SeedError::Account(_)));
    }
}
