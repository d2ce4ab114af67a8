//! Configuration defaults and credential loading

use std::env;

use crate::error::{ConfigError, Result};

/// LaunchDarkly web/API base URL
pub const DEFAULT_BASE_URL: &str = "https://app.launchdarkly.com";

/// Default cache TTL in seconds (1 hour)
pub const DEFAULT_CACHE_TTL: u64 = 3600;

/// Files larger than this are not scanned
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 5;

/// Default inactivity threshold in months
pub const DEFAULT_MONTHS: u32 = 3;

/// Project used when `--project` is not given
pub const DEFAULT_PROJECT: &str = "default";

/// Environment variable holding the API access token
pub const API_KEY_ENV: &str = "LD_API_KEY";

/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV: &str = "LDAUDIT_CACHE_DIR";

/// Load the API key from the environment, reading a `.env` file first if present.
pub fn load_api_key() -> Result<String> {
    // A missing .env file is fine; the variable may be exported directly
    let _ = dotenvy::dotenv();
    api_key_from(env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey.into()),
    }
}
