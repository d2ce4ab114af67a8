//! Cache management commands

use std::time::Duration;

use colored::Colorize;

use crate::cache::FlagCache;
use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::models::CacheEntryDisplay;
use crate::output::Formattable;

/// Dispatch `cache <action>`. Anything other than `clear` or `list` is an error.
pub fn run(action: &str, cache_ttl: u64, format: OutputFormat) -> Result<()> {
    let open = || FlagCache::open(Duration::from_secs(cache_ttl));

    match action {
        "clear" => clear(&open()?, format),
        "list" => list(&open()?, format),
        other => Err(Error::UnknownCacheAction(other.to_string())),
    }
}

/// Remove every cached project.
fn clear(cache: &FlagCache, format: OutputFormat) -> Result<()> {
    let removed = cache.clear_all()?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => println!("{}", "✓ Cache cleared successfully".green()),
    }

    Ok(())
}

/// Show cached projects with their age and time to expiry.
fn list(cache: &FlagCache, format: OutputFormat) -> Result<()> {
    let rows: Vec<CacheEntryDisplay> = cache
        .list_entries()
        .iter()
        .map(CacheEntryDisplay::from)
        .collect();

    if format == OutputFormat::Json {
        return rows.print(format);
    }

    if !cache.dir().exists() {
        println!("{}", "No cache directory found".yellow());
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No cached projects found".yellow());
        return Ok(());
    }

    println!();
    println!("{} {}", "Cache Location:".bold(), cache.dir().display());
    println!(
        "{}",
        format!("TTL: {} minutes", cache.ttl().as_secs() / 60).dimmed()
    );
    println!();

    rows.print(format)
}
