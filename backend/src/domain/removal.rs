//! Confirmation-gated deletion.
//!
//! Deletes pass through the confirmation collaborator: the record is looked
//! up first so the prompt can name it, the gate resolves to a boolean, and
//! only a confirmed prompt reaches the store. A missing id never raises a
//! prompt and leaves the collection unchanged.

use super::account::{Account, AccountId};
use super::document::{Document, DocumentId};
use super::ports::{AccountStore, ConfirmationGate, ConfirmationPrompt, DocumentStore};

/// Outcome of a gated delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome<T> {
    /// The gate confirmed and the record was removed.
    Deleted(T),
    /// The gate cancelled; nothing changed.
    Cancelled,
    /// No record carried the id; nothing changed.
    Missing,
}

/// Delete an account after confirmation.
pub async fn remove_account(
    store: &dyn AccountStore,
    gate: &dyn ConfirmationGate,
    id: AccountId,
) -> DeleteOutcome<Account> {
    let Some(existing) = store.find(id).await else {
        return DeleteOutcome::Missing;
    };
    let prompt = ConfirmationPrompt::delete(&existing.name);
    if !gate.confirm(&prompt).await {
        return DeleteOutcome::Cancelled;
    }
    match store.delete(id).await {
        Some(account) => DeleteOutcome::Deleted(account),
        None => DeleteOutcome::Missing,
    }
}

/// Delete a document after confirmation.
pub async fn remove_document(
    store: &dyn DocumentStore,
    gate: &dyn ConfirmationGate,
    id: DocumentId,
) -> DeleteOutcome<Document> {
    let Some(existing) = store.find(id).await else {
        return DeleteOutcome::Missing;
    };
    let prompt = ConfirmationPrompt::delete(&existing.title);
    if !gate.confirm(&prompt).await {
        return DeleteOutcome::Cancelled;
    }
    match store.delete(id).await {
        Some(document) => DeleteOutcome::Deleted(document),
        None => DeleteOutcome::Missing,
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate;

    use crate::domain::account::{AccountDraft, AccountStatus, UserType};
    use crate::domain::ports::MockConfirmationGate;
    use crate::outbound::memory::InMemoryAccountStore;

    use super::*;

    fn seeded_store() -> InMemoryAccountStore {
        let draft = AccountDraft::new(
            "Rhoy Sampaga",
            "Rhoy",
            "Accounting Manager",
            "rsampaga@pbj.com",
            AccountStatus::Inactive,
            UserType::User,
        )
        .expect("valid draft");
        InMemoryAccountStore::new(vec![Account::from_draft(AccountId(1), draft)])
    }

    #[tokio::test]
    async fn confirmed_prompt_removes_the_record() {
        let store = seeded_store();
        let mut gate = MockConfirmationGate::new();
        gate.expect_confirm()
            .with(predicate::eq(ConfirmationPrompt::delete("Rhoy Sampaga")))
            .times(1)
            .return_const(true);

        let outcome = remove_account(&store, &gate, AccountId(1)).await;
        assert!(matches!(outcome, DeleteOutcome::Deleted(account) if account.id == AccountId(1)));
        assert!(store.list("").await.is_empty());
    }

    #[tokio::test]
    async fn cancelled_prompt_leaves_the_record() {
        let store = seeded_store();
        let mut gate = MockConfirmationGate::new();
        gate.expect_confirm().times(1).return_const(false);

        let outcome = remove_account(&store, &gate, AccountId(1)).await;
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.list("").await.len(), 1);
    }

    #[tokio::test]
    async fn missing_id_never_raises_a_prompt() {
        let store = seeded_store();
        let mut gate = MockConfirmationGate::new();
        gate.expect_confirm().times(0);

        let outcome = remove_account(&store, &gate, AccountId(99)).await;
        assert_eq!(outcome, DeleteOutcome::Missing);
        assert_eq!(store.list("").await.len(), 1);
    }
}
