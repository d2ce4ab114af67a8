//! `list` command

use colored::Colorize;
use log::debug;

use crate::cli::handlers::{count_by_kind, print_flags};
use crate::cli::{CommandContext, FetchArgs, FilterArgs, OutputFormat};
use crate::error::Result;
use crate::flags::apply_common_filters;

/// List every live flag in the project, after maintainer/exclusion filters.
pub async fn run(format: OutputFormat, fetch: &FetchArgs, filters: &FilterArgs) -> Result<()> {
    let ctx = CommandContext::new(fetch, format)?;

    let flags = ctx.fetch_flags().await?;
    let flags = apply_common_filters(flags, &filters.maintainers(), &filters.excluded());
    debug!("{} flags after filtering", flags.len());

    if format == OutputFormat::Json {
        return print_flags(&ctx, &flags);
    }

    if flags.is_empty() {
        println!(
            "{}",
            format!("No flags found in project '{}'", ctx.project()).yellow()
        );
        return Ok(());
    }

    let (permanent, temporary) = count_by_kind(&flags);

    println!();
    println!(
        "{} {}",
        "Feature Flags for Project:".bold(),
        ctx.project().cyan()
    );
    println!();
    println!(
        "• {} {}",
        "Total flags live:".bold(),
        flags.len().to_string().green()
    );
    println!("  • Permanent flags: {}", permanent);
    println!("  • Temporary flags: {}", temporary);
    println!();

    print_flags(&ctx, &flags)
}
