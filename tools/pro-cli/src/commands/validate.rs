//! Check email addresses against the registration form rules.

use anyhow::{bail, Result};
use pro_leads::schema::validate_email;
use serde::Serialize;

use super::ValidateArgs;
use crate::context::Context;

/// Result for one address.
#[derive(Debug, Serialize)]
pub struct EmailCheck {
    pub email: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn check(email: &str) -> EmailCheck {
    let error = validate_email(email);
    EmailCheck {
        email: email.to_string(),
        valid: error.is_none(),
        message: error.map(|e| e.message),
    }
}

/// Run the validate command.
pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let checks: Vec<EmailCheck> = args.emails.iter().map(|email| check(email)).collect();

    if ctx.output.is_json() {
        ctx.output.json(&checks);
    } else {
        for result in &checks {
            match &result.message {
                None => ctx.output.success(&result.email),
                Some(message) => ctx.output.warn(&format!("{}: {}", result.email, message)),
            }
        }
    }

    let invalid = checks.iter().filter(|c| !c.valid).count();
    if invalid > 0 {
        bail!("{} of {} addresses are invalid", invalid, checks.len());
    }
    Ok(())
}
