//! Cached wrapper for the flag API client

use log::{debug, warn};

use crate::cache::FlagCache;
use crate::client::{FlagApi, FlagItem};
use crate::error::Result;
use crate::flags::Flag;

/// Coordinates a [`FlagApi`] with the on-disk [`FlagCache`].
pub struct CachedFlagClient<C: FlagApi> {
    inner: C,
    cache: Option<FlagCache>,
}

impl<C: FlagApi> CachedFlagClient<C> {
    /// Wrap `inner`. With `cache` set to `None` every call goes to the API.
    pub fn new(inner: C, cache: Option<FlagCache>) -> Self {
        Self { inner, cache }
    }

    /// The wrapped API client.
    #[cfg(test)]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// All flags for `project`.
    ///
    /// - `force_refresh`: skip the cache read, always fetch, and rewrite the cache
    ///   (when `enable_cache`).
    /// - `enable_cache`: serve a fresh cached listing without calling the API;
    ///   otherwise fetch and store the result.
    pub async fn get_all_flags(
        &self,
        project: &str,
        enable_cache: bool,
        force_refresh: bool,
    ) -> Result<Vec<Flag>> {
        if enable_cache
            && !force_refresh
            && let Some(items) = self.read_cached(project)
        {
            debug!("Cache hit: {} ({} flags)", project, items.len());
            return Ok(items.into_iter().map(Flag::from).collect());
        }

        let items = self.inner.list_flags(project).await?;

        if enable_cache {
            self.write_cached(project, &items);
        }

        Ok(items.into_iter().map(Flag::from).collect())
    }

    fn read_cached(&self, project: &str) -> Option<Vec<FlagItem>> {
        let payload = self.cache.as_ref()?.get(project)?;
        match serde_json::from_value(payload) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!("Ignoring unreadable cached flags for {}: {}", project, e);
                None
            }
        }
    }

    fn write_cached(&self, project: &str, items: &[FlagItem]) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        let result = serde_json::to_value(items)
            .map_err(Into::into)
            .and_then(|payload| cache.set(project, &payload));
        if let Err(e) = result {
            warn!("Failed to cache flags for {}: {}", project, e);
        }
    }
}
