//! Page-session identifiers for log correlation.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;

/// Unique identifier for one page session (or one CLI invocation).
///
/// Attached to every lead-capture log event so a registration attempt can be
/// followed from submit to outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new session ID.
    pub fn generate() -> Self {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self(format!("{:x}-{:08x}", nanos, next_seed()))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

static SEED: AtomicU32 = AtomicU32::new(12345);

// LCG step; not random, only distinct within a process.
fn next_seed() -> u32 {
    let prev = SEED
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
            Some(s.wrapping_mul(1103515245).wrapping_add(12345))
        })
        .unwrap_or_default();
    prev.wrapping_mul(1103515245).wrapping_add(12345)
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
