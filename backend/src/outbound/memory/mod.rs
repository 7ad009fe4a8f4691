//! In-memory persistence adapter.
//!
//! Both stores hold their records in a `Mutex<Vec<_>>` shared across
//! workers via `Arc`; every operation is a single short critical section
//! with no await while locked. State lives for the process only.

mod account_store;
mod document_store;

pub use account_store::InMemoryAccountStore;
pub use document_store::InMemoryDocumentStore;

/// First id the counter hands out: one past the largest seed id.
fn next_seed_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}
