use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cloudnix onboarding: pick a theme, describe your product, set pricing
#[derive(Parser)]
#[command(name = "cloudnix-onboard")]
#[command(version = "0.1.0")]
#[command(about = "Interactive onboarding wizard for Cloudnix")]
#[command(
    long_about = "Walks through theme selection, product details and pricing/stock, validating each step before moving on, and produces a completion record at the end."
)]
pub struct Cli {
    /// Configuration file (defaults to onboard.yaml in the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log file (defaults to onboard.log in the user data directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive onboarding wizard (default)
    Run {
        /// Also write the completion record as JSON to this file
        #[arg(long)]
        record_out: Option<PathBuf>,
    },

    /// List the configured themes
    Themes {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Load and validate the configuration
    CheckConfig,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Run { .. } => "run",
            Commands::Themes { .. } => "themes",
            Commands::CheckConfig => "check-config",
        }
    }
}

impl Cli {
    /// The command to execute, `run` when none was given
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or(Commands::Run { record_out: None })
    }
}
