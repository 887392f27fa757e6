//! Fieldcheck CLI - verify admissions-data imports against expectation cases

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{reset, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Run(args) => run::execute(args, &cli.global).await,
        cli::Commands::Reset(args) => reset::execute(args, &cli.global).await,
    }
}
