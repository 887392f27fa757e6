//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Fieldcheck - verify admissions-data imports against expectation cases
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output (prints generated SQL)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override target (database path)
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute expectation cases and write results back
    Run(RunArgs),

    /// Reset every case to Untested
    Reset(ResetArgs),
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Statuses to (re-)execute, comma-separated (default from config)
    #[arg(short, long)]
    pub statuses: Option<String>,

    /// Keep running, sleeping between cycles
    #[arg(short, long)]
    pub watch: bool,

    /// Summary output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the reset command
#[derive(Args, Debug)]
pub struct ResetArgs {}

/// Summary output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Table,
    /// JSON summary
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
