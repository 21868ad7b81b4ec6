//! The row written to the leads table.

use serde::{Deserialize, Serialize};

use crate::schema::LeadSubmission;

/// One insert into the leads table.
///
/// Column names are the table's snake_case names. Empty optional strings are
/// stored as `null` and missing consent is stored as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub email: String,
    pub name: Option<String>,
    pub sport: Option<String>,
    pub accept_terms: bool,
}

impl From<&LeadSubmission> for LeadRecord {
    fn from(submission: &LeadSubmission) -> Self {
        Self {
            email: submission.email.clone(),
            name: non_empty(submission.name.as_deref()),
            sport: non_empty(submission.sport.as_deref()),
            accept_terms: submission.accept_terms.unwrap_or(false),
        }
    }
}

impl From<LeadSubmission> for LeadRecord {
    fn from(submission: LeadSubmission) -> Self {
        Self::from(&submission)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
