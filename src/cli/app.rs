use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::WizardConfig;

/// hni-wizard: multi-step personal finance questionnaire
#[derive(Parser)]
#[command(name = "hni-wizard")]
#[command(version)]
#[command(about = "Multi-step terminal form for personal and financial data")]
#[command(
    long_about = "Walks through personal data, a money story, HNI status and bank accounts, validating each step before moving on, then submits the collected values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the form interactively (default)
    Run(RunArgs),

    /// List the wizard steps with their fields and rules
    Steps,
}

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Configuration file (defaults to ./hni-wizard.yaml, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Simulated submission delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Reject this many submission attempts before accepting
    #[arg(long)]
    pub fail_attempts: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (e.g. info, hni_wizard=debug)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the submission receipt as JSON
    #[arg(long)]
    pub json: bool,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Run(_) => "run",
            Commands::Steps => "steps",
        }
    }
}

impl RunArgs {
    /// Apply command-line overrides on top of the file configuration
    pub fn apply_overrides(&self, config: &mut WizardConfig) {
        if let Some(delay_ms) = self.delay_ms {
            config.submit.delay_ms = delay_ms;
        }
        if let Some(fail_attempts) = self.fail_attempts {
            config.submit.fail_attempts = fail_attempts;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
