//! Display model implementations for table and JSON output
//!
//! Display models turn domain types into CLI-friendly rows with column names
//! for tables and field names for JSON.

mod cache;
mod flag;
mod scan;

pub use cache::CacheEntryDisplay;
pub use flag::FlagDisplay;
pub use scan::FlagReferenceDisplay;
