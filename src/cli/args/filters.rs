//! Filter argument types for CLI commands
//!
//! Multi-value options accept both repeated flags and comma-separated values:
//! - `--ext py --ext js` (repeated)
//! - `--ext py,js` (comma-separated)
//! - `--ext py --ext js,cs` (mixed)

use std::path::PathBuf;

use clap::Args;

use crate::config::DEFAULT_MAX_FILE_SIZE_MB;

/// Maintainer and exclusion filters shared by every flag command.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Filter by maintainer first name
    #[arg(long, value_delimiter = ',')]
    pub maintainer: Vec<String>,

    /// Exclude specific flag keys
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl FilterArgs {
    pub fn maintainers(&self) -> Vec<String> {
        normalize_values(&self.maintainer)
    }

    pub fn excluded(&self) -> Vec<String> {
        normalize_values(&self.exclude)
    }
}

/// Directory scan options.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(long = "dir", short = 'd', default_value = ".")]
    pub directory: PathBuf,

    /// Max file size in MB to scan
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE_MB)]
    pub max_file_size: u64,

    /// File extensions to scan (all files when omitted)
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,
}

impl ScanArgs {
    pub fn extensions(&self) -> Vec<String> {
        normalize_values(&self.ext)
    }
}

/// Trim values and drop empty ones left over from splitting (`a,,b`, `a, b`).
pub fn normalize_values(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
