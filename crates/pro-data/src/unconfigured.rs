//! Store used when the backend connection settings are missing.

use async_trait::async_trait;
use pro_leads::{LeadRecord, LeadStore, StoreError};

/// Rejects every insert with `StoreError::NotConfigured`.
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait(?Send)]
impl LeadStore for UnconfiguredStore {
    async fn insert(&self, record: &LeadRecord) -> Result<(), StoreError> {
        tracing::debug!(email = %record.email, reason = %self.reason, "Insert refused");
        Err(StoreError::NotConfigured(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_always_fails() {
        let store = UnconfiguredStore::new("leads.supabase_url is not set");
        let record = LeadRecord {
            email: "a@b.com".to_string(),
            name: Some("Ana".to_string()),
            sport: None,
            accept_terms: true,
        };

        assert_eq!(
            store.insert(&record).await,
            Err(StoreError::NotConfigured("leads.supabase_url is not set".to_string()))
        );
    }
}
