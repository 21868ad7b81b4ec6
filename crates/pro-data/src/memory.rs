//! In-memory lead store.

use std::cell::RefCell;

use async_trait::async_trait;
use pro_leads::{LeadRecord, LeadStore, StoreError};

/// Keeps inserted records in memory.
///
/// Single-threaded like the rest of the form stack.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<LeadRecord>>,
    fail_with: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every insert with `err`.
    pub fn failing(err: StoreError) -> Self {
        Self {
            records: RefCell::default(),
            fail_with: Some(err),
        }
    }

    /// Records inserted so far.
    pub fn records(&self) -> Vec<LeadRecord> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl LeadStore for MemoryStore {
    async fn insert(&self, record: &LeadRecord) -> Result<(), StoreError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.records.borrow_mut().push(record.clone());
        tracing::debug!(email = %record.email, total = self.len(), "Lead kept in memory");
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> LeadRecord {
        LeadRecord {
            email: email.to_string(),
            name: None,
            sport: None,
            accept_terms: false,
        }
    }

    #[tokio::test]
    async fn test_memory_store_appends() {
        let store = MemoryStore::new();

        store.insert(&record("a@b.com")).await.unwrap();
        store.insert(&record("c@d.com")).await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].email, "c@d.com");
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = MemoryStore::failing(StoreError::Transport("offline".to_string()));

        let err = store.insert(&record("a@b.com")).await.unwrap_err();

        assert_eq!(err, StoreError::Transport("offline".to_string()));
        assert!(store.is_empty());
    }
}
