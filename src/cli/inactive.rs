//! `inactive` command

use colored::Colorize;

use crate::cli::handlers::print_flags;
use crate::cli::{CommandContext, FetchArgs, FilterArgs, OutputFormat};
use crate::error::Result;
use crate::flags::get_inactive_flags;

/// List temporary flags untouched in every environment for `months` months.
pub async fn run(
    format: OutputFormat,
    fetch: &FetchArgs,
    filters: &FilterArgs,
    months: u32,
) -> Result<()> {
    let ctx = CommandContext::new(fetch, format)?;

    let flags = ctx.fetch_flags().await?;
    let inactive = get_inactive_flags(flags, months, &filters.maintainers(), &filters.excluded());

    if format == OutputFormat::Json {
        return print_flags(&ctx, &inactive);
    }

    if inactive.is_empty() {
        println!("{}", "✓ No inactive flags found!".green());
        println!(
            "{}",
            format!(
                "All temporary flags have been modified within the last {} months.",
                months
            )
            .dimmed()
        );
        return Ok(());
    }

    println!();
    println!("{}", "⚠ Inactive Feature Flags".yellow().bold());
    println!(
        "{}",
        format!("Flags not modified in any environment for {}+ months", months).dimmed()
    );
    println!();
    println!("{} {}", "Total inactive flags:".bold(), inactive.len());
    println!();

    print_flags(&ctx, &inactive)
}
