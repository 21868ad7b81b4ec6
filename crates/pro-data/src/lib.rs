//! Lead persistence.
//!
//! This crate provides:
//! - `SupabaseStore` - Inserts into a hosted PostgREST table over HTTP
//! - `MemoryStore` - Keeps records in memory (dry runs, tests)
//! - `UnconfiguredStore` - Rejects every insert when the backend is missing
//! - `store_from_config` - Picks the store for a `LeadsConfig`

mod memory;
mod supabase;
mod unconfigured;

pub use memory::*;
pub use supabase::*;
pub use unconfigured::*;

use pro_core::LeadsConfig;
use pro_leads::{LeadStore, StoreError};

/// Build the store described by `config`.
///
/// Without a project URL and key every insert fails with
/// `StoreError::NotConfigured`, so the form reports an error instead of
/// dropping the lead. Dry runs pick `MemoryStore` explicitly.
pub fn store_from_config(config: &LeadsConfig) -> Box<dyn LeadStore> {
    match SupabaseStore::from_config(config) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(error = %err, "Lead store not configured, inserts will fail");
            let reason = match err {
                StoreError::NotConfigured(reason) => reason,
                other => other.to_string(),
            };
            Box::new(UnconfiguredStore::new(reason))
        }
    }
}
