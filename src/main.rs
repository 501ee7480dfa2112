use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hni_wizard::cli::{logging::filter_directive, steps::render_steps_table, Cli, Commands, RunArgs};
use hni_wizard::config::{load_config, LoggingConfig};
use hni_wizard::form::default_steps;
use hni_wizard::wizard::SubmissionReceipt;

/// Install a file-backed tracing subscriber. The TUI owns the terminal, so
/// without a log file nothing is logged.
fn initialize_tracing(logging: &LoggingConfig, level_from_cli: bool) -> Result<()> {
    let Some(path) = &logging.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(filter_directive(&logging.level, level_from_cli, rust_log.as_deref()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(log_file = %path.display(), "hni-wizard logging enabled");
    Ok(())
}

fn print_receipt(receipt: &SubmissionReceipt, json: bool) -> Result<()> {
    if json {
        println!("{}", receipt.to_json_pretty()?);
        return Ok(());
    }

    let values = &receipt.values;
    println!("Submitted {} (attempt {})", receipt.reference, receipt.attempt);
    println!("  Name:        {} {}", values.first_name, values.last_name);
    println!("  Millionaire: {}", if values.millionaire { "yes" } else { "no" });
    match values.money {
        Some(money) => println!("  Money:       {}", money),
        None => println!("  Money:       -"),
    }
    println!("  Story:       {}", values.description);
    Ok(())
}

async fn run_command(args: RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    initialize_tracing(&config.logging, args.log_level.is_some())?;

    match hni_wizard::cli::tui::run_form_wizard(&config).await? {
        Some(receipt) => print_receipt(&receipt, args.json)?,
        None => tracing::info!("Wizard closed before submission"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Steps) => {
            print!("{}", render_steps_table(&default_steps()));
            Ok(())
        }
        Some(Commands::Run(args)) => run_command(args).await,
        None => run_command(RunArgs::default()).await,
    }
}
