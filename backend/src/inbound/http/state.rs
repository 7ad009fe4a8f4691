//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on domain ports and remain testable without a running server.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::seed::{accounts_from_seed, directory_from_seed, documents_from_seed, SeedError};
use crate::domain::{AccountStore, DocumentStore, IdentityDirectory, Notifier};
use crate::outbound::memory::{InMemoryAccountStore, InMemoryDocumentStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Fixed login directory.
    pub directory: Arc<IdentityDirectory>,
    /// Account collection.
    pub accounts: Arc<dyn AccountStore>,
    /// Document collection.
    pub documents: Arc<dyn DocumentStore>,
    /// Transient-notification sink.
    pub notifier: Arc<dyn Notifier>,
    /// Cosmetic delay applied before resolving a login attempt.
    pub login_delay: Duration,
}

impl HttpState {
    /// Build state over freshly seeded in-memory stores.
    pub fn from_seed(
        notifier: Arc<dyn Notifier>,
        login_delay: Duration,
    ) -> Result<Self, SeedError> {
        let directory = directory_from_seed(seed_data::seed_identities())?;
        let accounts = accounts_from_seed(seed_data::seed_accounts())?;
        let documents = documents_from_seed(seed_data::seed_documents())?;
        Ok(Self {
            directory: Arc::new(directory),
            accounts: Arc::new(InMemoryAccountStore::new(accounts)),
            documents: Arc::new(InMemoryDocumentStore::new(documents)),
            notifier,
            login_delay,
        })
    }
}
