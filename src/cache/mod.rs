//! Local cache for flag listings
//!
//! Stores the last fetched flag list per project on disk so repeated audits
//! do not hit the API every time.

pub mod client;
pub mod storage;

pub use client::CachedFlagClient;
pub use storage::{CacheEntryInfo, FlagCache};
