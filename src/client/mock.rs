//! Mock flag API client for testing
//!
//! Returns canned flags without making HTTP calls and counts how often it was hit.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{FlagApi, FlagItem};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockFlagClient::new().with_flags(vec![item("a")]).await;
/// let flags = mock.list_flags("proj").await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Default)]
pub struct MockFlagClient {
    flags: Arc<Mutex<Vec<FlagItem>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockFlagClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure flags returned from list_flags.
    pub async fn with_flags(self, flags: Vec<FlagItem>) -> Self {
        *self.flags.lock().await = flags;
        self
    }

    /// Make the next call fail with `error`.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of list_flags calls so far.
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl FlagApi for MockFlagClient {
    async fn list_flags(&self, _project: &str) -> Result<Vec<FlagItem>> {
        *self.calls.lock().await += 1;

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        Ok(self.flags.lock().await.clone())
    }
}
