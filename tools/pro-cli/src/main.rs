//! PRO CLI - Command line tool for the PRO Manizales landing site.
//!
//! Commands:
//! - `pro register` - Register a lead for early access
//! - `pro validate` - Check email addresses against the form rules
//! - `pro countdown` - Show the time left until launch
//! - `pro config` - Manage configuration

mod commands;
mod context;
mod output;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pro_observability::{LogConfig, LogFormat, LogLevel};

use commands::{ConfigArgs, CountdownArgs, RegisterArgs, ValidateArgs};

/// PRO CLI - Early-access registration for PRO Manizales
#[derive(Parser)]
#[command(name = "pro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a lead for early access
    Register(RegisterArgs),

    /// Validate email addresses
    Validate(ValidateArgs),

    /// Show the time left until launch
    Countdown(CountdownArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warn };
    let format = if cli.json { LogFormat::Json } else { LogFormat::Human };
    if let Err(e) = pro_observability::init_native(&LogConfig::new(level, format)) {
        output.warn(&format!("Logging disabled: {}", e));
    }

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Register(args) => commands::register::run(args, &ctx).await,
        Commands::Validate(args) => commands::validate::run(args, &ctx).await,
        Commands::Countdown(args) => commands::countdown::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
