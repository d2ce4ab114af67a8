//! Command execution context
//!
//! Loads the API key, opens the cache and builds the cached API client shared
//! by every command that talks to LaunchDarkly.

use log::{debug, warn};

use crate::cache::{CachedFlagClient, FlagCache};
use crate::cli::{FetchArgs, OutputFormat};
use crate::client::LaunchDarklyClient;
use crate::config;
use crate::error::Result;
use crate::flags::Flag;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// LaunchDarkly client with the on-disk cache in front of it
    pub client: CachedFlagClient<LaunchDarklyClient>,
    /// Project, base URL and cache switches for this run
    pub fetch: FetchArgs,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns [`crate::error::ConfigError::MissingApiKey`] when no API key is
    /// configured. An unusable cache directory only disables caching.
    pub fn new(fetch: &FetchArgs, format: OutputFormat) -> Result<Self> {
        let api_key = config::load_api_key()?;
        let raw_client = LaunchDarklyClient::new(api_key, &fetch.base_url)?;

        let cache = if fetch.no_cache {
            None
        } else {
            match FlagCache::open(fetch.ttl()) {
                Ok(cache) => Some(cache),
                Err(e) => {
                    warn!("Caching disabled: {}", e);
                    None
                }
            }
        };

        Ok(Self {
            client: CachedFlagClient::new(raw_client, cache),
            fetch: fetch.clone(),
            format,
        })
    }

    /// All live flags for the configured project.
    pub async fn fetch_flags(&self) -> Result<Vec<Flag>> {
        debug!("Fetching flags for project {}", self.fetch.project);
        self.client
            .get_all_flags(
                &self.fetch.project,
                self.fetch.enable_cache(),
                self.fetch.override_cache,
            )
            .await
    }

    pub fn project(&self) -> &str {
        &self.fetch.project
    }

    pub fn base_url(&self) -> &str {
        &self.fetch.base_url
    }
}
