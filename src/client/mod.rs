//! LaunchDarkly API client

use async_trait::async_trait;

use crate::error::Result;

pub mod launchdarkly;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use launchdarkly::LaunchDarklyClient;
#[cfg(test)]
pub use mock::MockFlagClient;
pub use models::FlagItem;

/// Read-only access to a project's flags.
#[async_trait]
pub trait FlagApi: Send + Sync {
    /// Fetch every non-archived flag in `project`, following pagination to the end.
    async fn list_flags(&self, project: &str) -> Result<Vec<FlagItem>>;
}
