//! Shared CLI argument types
//!
//! Reusable argument structs flattened into commands with `#[command(flatten)]`.

mod common;
mod fetch;
mod filters;

pub use common::OutputFormat;
pub use fetch::FetchArgs;
pub use filters::{FilterArgs, ScanArgs};
