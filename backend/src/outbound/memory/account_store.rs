//! Mutex-guarded in-memory account collection.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Account, AccountDraft, AccountId, AccountStore, StoreError};

use super::next_seed_id;

/// Account store backed by a vector in insertion order.
///
/// Identifiers come from a dedicated counter seeded past the largest seed
/// id, so a delete/add sequence can never produce a duplicate id.
pub struct InMemoryAccountStore {
    records: Mutex<Vec<Account>>,
    next_id: AtomicU32,
}

impl InMemoryAccountStore {
    /// Build a store over the given seed accounts.
    #[must_use]
    pub fn new(seed: Vec<Account>) -> Self {
        let next_id = next_seed_id(seed.iter().map(|account| account.id.0));
        Self {
            records: Mutex::new(seed),
            next_id: AtomicU32::new(next_id),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Account>> {
        // A poisoned lock means another worker panicked mid-mutation; the
        // vector itself is still structurally sound, so keep serving.
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn list(&self, query: &str) -> Vec<Account> {
        self.lock()
            .iter()
            .filter(|account| account.matches(query))
            .cloned()
            .collect()
    }

    async fn find(&self, id: AccountId) -> Option<Account> {
        self.lock().iter().find(|account| account.id == id).cloned()
    }

    async fn find_by_username(&self, username: &str) -> Option<Account> {
        self.lock()
            .iter()
            .find(|account| account.username == username)
            .cloned()
    }

    async fn create(&self, draft: AccountDraft) -> Account {
        let id = AccountId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let account = Account::from_draft(id, draft);
        self.lock().push(account.clone());
        account
    }

    async fn update(&self, id: AccountId, draft: AccountDraft) -> Result<Account, StoreError> {
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(StoreError::NotFound { id: id.0 })?;
        *slot = slot.clone().with_draft(draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: AccountId) -> Option<Account> {
        let mut records = self.lock();
        let index = records.iter().position(|account| account.id == id)?;
        Some(records.remove(index))
    }
}
