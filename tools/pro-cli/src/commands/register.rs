//! Register a lead from the terminal.

use std::time::Instant;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use pro_core::SessionId;
use pro_data::MemoryStore;
use pro_leads::prelude::*;
use pro_observability::{LogBuilder, LogLevel};
use tokio::task::LocalSet;

use super::RegisterArgs;
use crate::context::Context;
use crate::output::state_badge;
use crate::terminal::TerminalPlatform;

type CliController = SubmissionController<Box<dyn LeadStore>, TerminalPlatform>;

/// Run the register command.
pub async fn run(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let candidate = match candidate_from_args(&args) {
        Some(candidate) => candidate,
        None if args.no_input || ctx.output.is_json() => {
            bail!("--email is required without interactive input")
        }
        None => prompt_candidate(&args)?,
    };

    let store: Box<dyn LeadStore> = if args.dry_run {
        ctx.output.debug("Dry run: writing to memory");
        Box::new(MemoryStore::new())
    } else {
        pro_data::store_from_config(&ctx.config.leads)
    };

    let session = SessionId::generate();
    tracing::debug!(session = %session, dry_run = args.dry_run, "Starting registration");

    let settings = ControllerSettings::from_config(&ctx.config.leads, session.clone());
    let output = ctx.output.clone();
    let controller: CliController =
        SubmissionController::new(store, TerminalPlatform::new(&ctx.config.site.url), settings)
            .with_observer(move |view| {
                output.debug(&format!("Form state: {}", state_badge(view.state.as_str())));
            });

    LocalSet::new()
        .run_until(register(controller, candidate, args.share, session, ctx))
        .await
}

async fn register(
    controller: CliController,
    candidate: LeadCandidate,
    share: bool,
    session: SessionId,
    ctx: &Context,
) -> Result<()> {
    let record = validate(&candidate).map(|submission| LeadRecord::from(&submission));

    let spinner = ctx.output.spinner(SUBMITTING_LABEL);
    let started = Instant::now();
    let outcome = controller.submit(candidate).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(()) => {}
        Err(SubmitError::Invalid(errors)) => {
            controller.dispose();
            bail!("{}", errors);
        }
        Err(SubmitError::Store(err)) => {
            controller.dispose();
            return Err(anyhow::Error::new(err).context(SUBMISSION_ERROR_MESSAGE));
        }
        Err(err) => {
            controller.dispose();
            bail!(err);
        }
    }

    let view = controller.view();
    ctx.output.success(&view.greeting());

    if ctx.output.is_json() {
        if let Ok(record) = &record {
            let entry = LogBuilder::new(LogLevel::Info, "Lead registered", &session)
                .field("email", record.email.clone())
                .field_opt("name", record.name.as_deref())
                .field_opt("sport", record.sport.as_deref())
                .field_bool("accept_terms", record.accept_terms)
                .duration_ms("elapsed_ms", started.elapsed())
                .build();
            println!("{}", entry.to_json());
        }
    }

    if share {
        match controller.share().await {
            Ok(()) => ctx.output.success(COPIED_NOTICE),
            Err(err) => ctx.output.warn(&format!("{}: {}", SHARE_LABEL, err)),
        }
    }

    controller.dispose();
    Ok(())
}

/// Candidate from flags alone, `None` when no email was given.
pub fn candidate_from_args(args: &RegisterArgs) -> Option<LeadCandidate> {
    let email = args.email.as_ref()?;

    let mut candidate = LeadCandidate::with_email(email.trim());
    if let Some(name) = &args.name {
        candidate = candidate.name(name.trim());
    }
    if let Some(sport) = &args.sport {
        candidate = candidate.sport(sport.trim());
    }
    if args.accept_terms {
        candidate = candidate.accept_terms(true);
    }
    Some(candidate)
}

fn prompt_candidate(args: &RegisterArgs) -> Result<LeadCandidate> {
    let email: String = Input::new()
        .with_prompt("Correo electrónico")
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_email(input.trim()) {
                Ok(())
            } else {
                Err(INVALID_EMAIL_MESSAGE)
            }
        })
        .interact_text()?;

    let name: String = Input::new()
        .with_prompt("Nombre (opcional)")
        .allow_empty(true)
        .with_initial_text(args.name.clone().unwrap_or_default())
        .interact_text()?;

    let sport = match &args.sport {
        Some(sport) => Some(sport.clone()),
        None => {
            let mut items = vec!["(ninguno)"];
            items.extend(SPORT_SUGGESTIONS);
            let choice = Select::new()
                .with_prompt("Deporte favorito")
                .items(&items)
                .default(0)
                .interact()?;
            (choice > 0).then(|| items[choice].to_string())
        }
    };

    let accept = args.accept_terms
        || Confirm::new()
            .with_prompt("¿Aceptas los términos y recibir novedades?")
            .default(false)
            .interact()?;

    let mut candidate = LeadCandidate::with_email(email.trim());
    if !name.trim().is_empty() {
        candidate = candidate.name(name.trim());
    }
    if let Some(sport) = sport {
        candidate = candidate.sport(sport);
    }
    Ok(candidate.accept_terms(accept))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(email: Option<&str>) -> RegisterArgs {
        RegisterArgs {
            email: email.map(str::to_string),
            name: None,
            sport: None,
            accept_terms: false,
            share: false,
            no_input: true,
            dry_run: true,
        }
    }

    #[test]
    fn test_candidate_requires_email() {
        assert!(candidate_from_args(&args(None)).is_none());
    }

    #[test]
    fn test_candidate_from_flags() {
        let mut args = args(Some(" ana@example.com "));
        args.name = Some("Ana".to_string());
        args.sport = Some("Tenis".to_string());
        args.accept_terms = true;

        let candidate = candidate_from_args(&args).unwrap();

        assert_eq!(candidate.email, "ana@example.com");
        assert_eq!(candidate.name.as_deref(), Some("Ana"));
        assert_eq!(candidate.sport.as_deref(), Some("Tenis"));
        assert_eq!(candidate.accept_terms, Some(true));
    }

    #[test]
    fn test_consent_flag_absent_leaves_default() {
        let candidate = candidate_from_args(&args(Some("ana@example.com"))).unwrap();
        assert!(candidate.accept_terms.is_none());
    }
}
