//! Cache entry display model

use serde::Serialize;
use tabled::Tabled;

use crate::cache::CacheEntryInfo;
use crate::output::formatters::{format_age, format_expiry, format_local_datetime};

/// Cached project row for `cache list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CacheEntryDisplay {
    #[tabled(rename = "PROJECT")]
    pub project: String,

    #[tabled(rename = "CACHED")]
    pub cached: String,

    #[tabled(rename = "AGE")]
    pub age: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,

    #[tabled(skip)]
    pub expired: bool,
}

impl From<&CacheEntryInfo> for CacheEntryDisplay {
    fn from(entry: &CacheEntryInfo) -> Self {
        Self {
            project: entry.project.clone(),
            cached: format_local_datetime(entry.timestamp),
            age: format_age(entry.age_seconds),
            expires: format_expiry(entry.expires_in_seconds),
            expired: entry.is_expired,
        }
    }
}
