//! Feature flag domain model and classification

pub mod service;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::client::models::{EnvironmentItem, FlagItem};

pub use service::{apply_common_filters, get_inactive_flags, get_inactive_flags_at};

/// A feature flag, immutable once built from API or cache data.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub key: String,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    pub temporary: bool,
    pub maintainer: Option<FlagMaintainer>,
    /// Environment key -> status. May be empty or sparse.
    pub environments: BTreeMap<String, EnvironmentStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMaintainer {
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentStatus {
    pub environment_key: String,
    pub environment_name: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub on: Option<bool>,
}

impl Flag {
    /// Most recent modification across all environments, or the creation date
    /// when no environment has recorded one.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.environments
            .values()
            .filter_map(|env| env.last_modified)
            .max()
            .unwrap_or(self.creation_date)
    }

    /// Maintainer first name, if the flag has one.
    pub fn maintainer_name(&self) -> Option<&str> {
        self.maintainer.as_ref().map(|m| m.first_name.as_str())
    }
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

impl From<FlagItem> for Flag {
    fn from(item: FlagItem) -> Self {
        let environments = item
            .environments
            .into_iter()
            .map(|(key, env)| {
                let status = EnvironmentStatus::from_item(key.clone(), env);
                (key, status)
            })
            .collect();

        Self {
            key: item.key,
            name: item.name,
            creation_date: millis_to_datetime(item.creation_date),
            temporary: item.temporary,
            maintainer: item
                .maintainer
                .and_then(|m| m.first_name)
                .map(|first_name| FlagMaintainer { first_name }),
            environments,
        }
    }
}

impl EnvironmentStatus {
    fn from_item(environment_key: String, item: EnvironmentItem) -> Self {
        Self {
            environment_key,
            environment_name: item.environment_name,
            last_modified: item.last_modified.map(millis_to_datetime),
            on: item.on,
        }
    }
}
