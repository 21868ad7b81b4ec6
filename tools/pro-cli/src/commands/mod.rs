//! CLI command implementations.

pub mod config;
pub mod countdown;
pub mod register;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Email address (prompted for when omitted).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Favourite sport.
    #[arg(short, long)]
    pub sport: Option<String>,

    /// Accept the terms and receive news.
    #[arg(long)]
    pub accept_terms: bool,

    /// Copy the site URL to the clipboard after registering.
    #[arg(long)]
    pub share: bool,

    /// Never prompt; fail if the email is missing.
    #[arg(long)]
    pub no_input: bool,

    /// Write to an in-memory store instead of the backend.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Addresses to check.
    #[arg(required = true)]
    pub emails: Vec<String>,
}

/// Arguments for the countdown command.
#[derive(Args)]
pub struct CountdownArgs {
    /// Keep updating every second until launch.
    #[arg(short, long)]
    pub watch: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration.
    Validate,
}
