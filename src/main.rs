//! ldaudit - Audit LaunchDarkly feature flags and find stale ones in your code

use clap::Parser;
use colored::Colorize;
use env_logger::Env;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod flags;
mod models;
mod output;
mod scanner;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        if let Some(hint) = err.hint() {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::List { fetch, filters } => cli::list::run(format, &fetch, &filters).await,
        Commands::Inactive {
            fetch,
            filters,
            months,
        } => cli::inactive::run(format, &fetch, &filters, months).await,
        Commands::Scan {
            fetch,
            filters,
            scan,
            months,
        } => cli::scan::run(format, &fetch, &filters, &scan, months).await,
        Commands::Cache { action, cache_ttl } => cli::cache::run(&action, cache_ttl, format),
    }
}
