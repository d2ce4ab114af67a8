//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and summaries
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
