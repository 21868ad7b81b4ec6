//! Lead capture for the PRO Manizales landing page.
//!
//! - **Schema**: email grammar and candidate validation
//! - **Record**: the row written to the leads table
//! - **Form**: field values, submission state and transient flags
//! - **Controller**: the submit/share state machine with its auto-reset timer
//!
//! # Example
//!
//! ```rust,ignore
//! use pro_leads::prelude::*;
//!
//! let controller = SubmissionController::new(store, platform, ControllerSettings::default())
//!     .with_observer(|view| render(view));
//!
//! controller.submit(LeadCandidate::with_email("ana@example.com").name("Ana")).await?;
//! controller.share().await?;
//! ```

pub mod controller;
pub mod error;
pub mod form;
pub mod platform;
pub mod record;
pub mod schema;
pub mod state;

pub use controller::{ControllerSettings, SubmissionController};
pub use error::{ClipboardError, ShareError, StoreError, SubmitError};
pub use form::{FieldEdit, FormModel, FormView};
pub use platform::{LeadStore, Platform};
pub use record::LeadRecord;
pub use schema::{validate, LeadCandidate, LeadSubmission, ValidationErrors};
pub use state::SubmissionState;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::controller::{ControllerSettings, SubmissionController};
    pub use crate::error::{ClipboardError, ShareError, StoreError, SubmitError};
    pub use crate::form::{
        FieldEdit, FormView, COPIED_NOTICE, SHARE_LABEL, SUBMITTING_LABEL, SUBMIT_LABEL,
    };
    pub use crate::platform::{LeadStore, Platform};
    pub use crate::record::LeadRecord;
    pub use crate::schema::{
        is_valid_email, validate, Field, FieldError, LeadCandidate, ValidationErrors,
        INVALID_EMAIL_MESSAGE, SPORT_SUGGESTIONS,
    };
    pub use crate::state::{SubmissionState, SUBMISSION_ERROR_MESSAGE};
}
