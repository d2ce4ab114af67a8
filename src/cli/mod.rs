//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod cache;
pub mod context;
pub mod handlers;
pub mod inactive;
pub mod list;
pub mod scan;

pub use args::{FetchArgs, FilterArgs, OutputFormat, ScanArgs};
pub use context::CommandContext;

use crate::config::{DEFAULT_CACHE_TTL, DEFAULT_MONTHS};

/// ldaudit - Find stale LaunchDarkly feature flags and where your code still uses them
#[derive(Parser, Debug)]
#[command(name = "ldaudit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "LDAUDIT_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true, env = "LDAUDIT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all live flags in a project
    List {
        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List temporary flags with no recent activity
    Inactive {
        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Months without changes before a flag counts as inactive
        #[arg(long, short = 'm', default_value_t = DEFAULT_MONTHS)]
        months: u32,
    },

    /// Find references to inactive flags in a codebase
    Scan {
        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        scan: ScanArgs,

        /// Months without changes before a flag counts as inactive
        #[arg(long, short = 'm', default_value_t = DEFAULT_MONTHS)]
        months: u32,
    },

    /// Manage the local flag cache (actions: clear, list)
    Cache {
        /// Action to perform: clear or list
        action: String,

        /// Cache TTL in seconds, used to report expiry
        #[arg(long, default_value_t = DEFAULT_CACHE_TTL)]
        cache_ttl: u64,
    },
}
