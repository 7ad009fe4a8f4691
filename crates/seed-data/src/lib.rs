//! Fixed sample records for the document dashboard service.
//!
//! The service holds all state in memory and reseeds it at startup, so this
//! crate is the single source of the sample identities, accounts, and
//! documents. Records are plain serde structs, deliberately independent of
//! backend domain types: the backend validates and converts them at the
//! seam, which keeps this crate free of circular dependencies.
//!
//! Enumerated fields (roles, statuses, user types) are carried as strings
//! here and parsed into domain enums by the backend; a typo in a seed record
//! therefore fails loudly at startup rather than silently at request time.

use serde::{Deserialize, Serialize};

/// A login identity known to the authentication directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedIdentity {
    /// Display name shown after login.
    pub name: String,
    /// Login username; unique across the seed set.
    pub username: String,
    /// Plain-text password; this is demonstration data only.
    pub password: String,
    /// Identity role: `admin` or `user`.
    pub role: String,
}

/// A managed account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAccount {
    /// Stable account identifier.
    pub id: u32,
    /// Full name of the account holder.
    pub name: String,
    /// Username correlated (loosely) with a login identity.
    pub username: String,
    /// Job title, free text.
    pub role: String,
    /// Contact email address.
    pub email: String,
    /// Account status: `Active`, `Inactive`, or `Pending`.
    pub status: String,
    /// Account user type: `Admin`, `User`, or `Manager`.
    pub user_type: String,
}

/// A managed document row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDocument {
    /// Stable document identifier.
    pub id: u32,
    /// Document title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Review status: `Approved`, `Pending`, or `Rejected`.
    pub status: String,
    /// Attached file name.
    pub file_name: String,
    /// URL the attached file is served from.
    pub file_url: String,
    /// Attachment size in bytes.
    pub byte_size: u64,
    /// Creation date, ISO 8601 (`YYYY-MM-DD`).
    pub date_created: String,
    /// Last update instant, RFC 3339.
    pub last_updated: String,
}

fn identity(name: &str, username: &str, password: &str, role: &str) -> SeedIdentity {
    SeedIdentity {
        name: name.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
        role: role.to_owned(),
    }
}

/// Identities accepted by the login gate.
#[must_use]
pub fn seed_identities() -> Vec<SeedIdentity> {
    vec![
        identity("System Administrator", "admin", "123", "admin"),
        identity("Mike Jimenez", "mike", "123", "admin"),
        identity("Ajad Singh Parmar", "ajad", "123", "admin"),
        identity("Aristotle Bataan", "docyummy", "123", "user"),
    ]
}

fn account(
    id: u32,
    name: &str,
    username: &str,
    role: &str,
    email: &str,
    status: &str,
    user_type: &str,
) -> SeedAccount {
    SeedAccount {
        id,
        name: name.to_owned(),
        username: username.to_owned(),
        role: role.to_owned(),
        email: email.to_owned(),
        status: status.to_owned(),
        user_type: user_type.to_owned(),
    }
}

/// Accounts present in the account store at startup.
#[must_use]
pub fn seed_accounts() -> Vec<SeedAccount> {
    vec![
        account(
            1,
            "Mike Jimenez",
            "mike",
            "Product Designer",
            "mjimenez@pbj.com",
            "Active",
            "Admin",
        ),
        account(
            2,
            "Ajad Singh Parmar",
            "Ajad",
            "Product Manager",
            "aparmar@pbj.com",
            "Active",
            "Admin",
        ),
        account(
            3,
            "Aristotle Bataan",
            "docyummy",
            "Product Supervisor",
            "abataan@pbj.com",
            "Active",
            "User",
        ),
        account(
            4,
            "Rhoy Sampaga",
            "Rhoy",
            "Accounting Manager",
            "rsampaga@pbj.com",
            "Inactive",
            "User",
        ),
    ]
}

/// Documents present in the document store at startup.
#[must_use]
pub fn seed_documents() -> Vec<SeedDocument> {
    vec![
        SeedDocument {
            id: 1,
            title: "Proposal Report".to_owned(),
            author: "Mike Jimenez".to_owned(),
            status: "Pending".to_owned(),
            file_name: "proposal.pdf".to_owned(),
            file_url: "/files/proposal.pdf".to_owned(),
            byte_size: 1_200_000,
            date_created: "2024-02-17".to_owned(),
            last_updated: "2024-02-17T14:32:00Z".to_owned(),
        },
        SeedDocument {
            id: 2,
            title: "Marketing Plan".to_owned(),
            author: "Ajad Singh Parmar".to_owned(),
            status: "Approved".to_owned(),
            file_name: "marketing-plan.pdf".to_owned(),
            file_url: "/files/marketing-plan.pdf".to_owned(),
            byte_size: 3_000_000,
            date_created: "2024-03-19".to_owned(),
            last_updated: "2024-03-20T09:15:00Z".to_owned(),
        },
        SeedDocument {
            id: 3,
            title: "Financial Analysis".to_owned(),
            author: "Rhoy Sampaga".to_owned(),
            status: "Rejected".to_owned(),
            file_name: "financial-report.pdf".to_owned(),
            file_url: "/files/financial-report.pdf".to_owned(),
            byte_size: 2_800_000,
            date_created: "2023-11-02".to_owned(),
            last_updated: "2023-11-03T08:10:00Z".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    //! Invariants over the seed records themselves.

    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn identity_usernames_are_unique() {
        let identities = seed_identities();
        let usernames: HashSet<_> = identities.iter().map(|i| i.username.as_str()).collect();
        assert_eq!(usernames.len(), identities.len());
    }

    #[rstest]
    fn identity_roles_are_known() {
        for identity in seed_identities() {
            assert!(
                matches!(identity.role.as_str(), "admin" | "user"),
                "unexpected role {}",
                identity.role
            );
        }
    }

    #[rstest]
    fn account_ids_are_unique() {
        let accounts = seed_accounts();
        let ids: HashSet<_> = accounts.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), accounts.len());
    }

    #[rstest]
    fn document_ids_are_unique() {
        let documents = seed_documents();
        let ids: HashSet<_> = documents.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), documents.len());
    }

    #[rstest]
    fn records_serialise_camel_case() {
        let json = serde_json::to_value(seed_documents()).expect("seed documents serialise");
        let first = json.get(0).expect("at least one document");
        assert!(first.get("fileName").is_some());
        assert!(first.get("file_name").is_none());
    }
}
