//! Pagination helpers for the flags listing endpoint

use serde::Deserialize;
use serde::de::IgnoredAny;

use super::models::FlagItem;

/// Items requested per page.
pub const PAGE_SIZE: usize = 100;

/// Offset-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn first() -> Self {
        Self {
            limit: PAGE_SIZE,
            offset: 0,
        }
    }

    /// Request following a page of `received` items.
    pub fn next(self, received: usize) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + received,
        }
    }

    /// Query string parameters for this page.
    ///
    /// `summary=0` makes the API include per-environment data; archived flags
    /// are excluded.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("summary", "0".to_string()),
            ("archived", "false".to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

/// One page of the flags listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagPage {
    #[serde(default)]
    pub items: Vec<FlagItem>,

    #[serde(default)]
    pub total_count: Option<usize>,

    #[serde(rename = "_links", default)]
    pub links: Option<PageLinks>,
}

#[derive(Debug, Deserialize)]
pub struct PageLinks {
    /// Only its presence matters
    #[serde(default)]
    pub next: Option<IgnoredAny>,
}

impl FlagPage {
    /// Whether another page should be requested, given how many items have
    /// been accumulated so far (including this page).
    pub fn has_next_page(&self, accumulated: usize) -> bool {
        if self.items.is_empty() {
            return false;
        }

        let has_next_link = self
            .links
            .as_ref()
            .is_some_and(|links| links.next.is_some());

        has_next_link || self.total_count.is_some_and(|total| accumulated < total)
    }
}
