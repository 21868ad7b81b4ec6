//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use pro_core::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;
use crate::output::mask;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output.is_json() {
        let mut redacted = config.clone();
        redacted.leads.anon_key = redacted.leads.anon_key.as_deref().map(mask);
        ctx.output.json(&redacted);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[site]");
    ctx.output.kv("name", &config.site.name);
    ctx.output.kv("title", &config.site.title);
    ctx.output.kv("url", &config.site.url);
    ctx.output.kv("launch_at", &config.site.launch_at.to_rfc3339());

    ctx.output.info("[leads]");
    ctx.output.kv(
        "supabase_url",
        config.leads.supabase_url.as_deref().unwrap_or("(not set)"),
    );
    ctx.output.kv(
        "anon_key",
        &config
            .leads
            .anon_key
            .as_deref()
            .map(mask)
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    ctx.output.kv("table", &config.leads.table);
    ctx.output.kv("write_timeout_ms", &config.leads.write_timeout_ms.to_string());
    ctx.output.kv("reset_delay_ms", &config.leads.reset_delay_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();

    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "valid": true }));
    } else {
        ctx.output.success("Configuration is valid");
    }
    Ok(())
}
