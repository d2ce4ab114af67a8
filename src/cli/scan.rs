//! `scan` command

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, FetchArgs, FilterArgs, OutputFormat, ScanArgs};
use crate::error::{Error, Result};
use crate::flags::get_inactive_flags;
use crate::models::FlagReferenceDisplay;
use crate::output::json::format_json;
use crate::scanner::CodebaseScanner;

/// Find references to inactive flags under the scan directory.
///
/// The directory is checked before the API key so a typo fails fast and
/// offline.
pub async fn run(
    format: OutputFormat,
    fetch: &FetchArgs,
    filters: &FilterArgs,
    scan: &ScanArgs,
    months: u32,
) -> Result<()> {
    if !scan.directory.is_dir() {
        return Err(Error::DirectoryNotFound(scan.directory.clone()));
    }

    let ctx = CommandContext::new(fetch, format)?;
    let extensions = scan.extensions();
    let excluded = filters.excluded();
    let root = scan
        .directory
        .canonicalize()
        .unwrap_or_else(|_| scan.directory.clone());

    if format == OutputFormat::Table {
        println!();
        println!("{} {}", "Scanning directory:".bold(), root.display().to_string().cyan());
        if extensions.is_empty() {
            println!("{}", "Scanning all file types".dimmed());
        } else {
            println!("{} {}", "File extensions:".bold(), display_extensions(&extensions));
        }
        if !excluded.is_empty() {
            println!("{} {}", "Excluding flags:".bold(), excluded.join(", "));
        }
        println!();
    }

    let flags = ctx.fetch_flags().await?;
    let inactive = get_inactive_flags(flags, months, &filters.maintainers(), &excluded);
    let keys: Vec<String> = inactive.iter().map(|f| f.key.clone()).collect();

    if format == OutputFormat::Table {
        println!(
            "{}",
            format!("Checking {} inactive flag(s) against codebase...", keys.len()).dimmed()
        );
        println!();
    }

    let results = CodebaseScanner::new(scan.max_file_size).search_directory(&scan.directory, &keys, &extensions);
    debug!("{} of {} inactive flags referenced", results.len(), keys.len());

    // Keep the inactive-flag order rather than the key order of the results map
    let found: Vec<FlagReferenceDisplay> = inactive
        .iter()
        .filter_map(|flag| {
            results.get(&flag.key).map(|locations| {
                FlagReferenceDisplay::new(flag, locations, ctx.base_url(), ctx.project())
            })
        })
        .collect();

    if format == OutputFormat::Json {
        println!("{}", format_json(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("{}", "✓ No inactive flags found in codebase!".green());
        println!("{}", "All inactive flags have been cleaned up.".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} inactive flag(s) in codebase", found.len())
            .yellow()
            .bold()
    );
    println!();

    for reference in &found {
        println!("{}", reference.format_block());
    }

    Ok(())
}

/// Extensions as the user would write them: `.py, .js`.
fn display_extensions(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|e| format!(".{}", e.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(", ")
}
