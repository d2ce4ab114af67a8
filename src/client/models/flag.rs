//! Feature flag wire models
//!
//! These mirror the JSON returned by `GET /api/v2/flags/{project}` and are also
//! what gets written to the cache, so a cached payload is the flag list as fetched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A feature flag as returned by the flags listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagItem {
    /// Flag key, unique within a project
    pub key: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Creation time (Unix epoch milliseconds)
    pub creation_date: i64,

    /// Whether the flag is expected to be removed eventually
    #[serde(default)]
    pub temporary: bool,

    /// Flag maintainer, absent for unowned flags
    #[serde(
        rename = "_maintainer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub maintainer: Option<MaintainerItem>,

    /// Per-environment state keyed by environment key
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentItem>,
}

/// Maintainer object embedded in a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintainerItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// Per-environment flag state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentItem {
    /// Last modification time (Unix epoch milliseconds)
    #[serde(
        rename = "lastModified",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<i64>,

    /// Whether targeting is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,

    /// Human-readable environment name
    #[serde(
        rename = "_environmentName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub environment_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let json = r#"{
            "key": "new-checkout",
            "name": "New Checkout",
            "creationDate": 1700000000000,
            "temporary": true,
            "_maintainer": { "firstName": "John", "lastName": "Doe", "email": "j@example.com" },
            "environments": {
                "production": { "lastModified": 1710000000000, "on": true, "_environmentName": "Production" },
                "staging": { "on": false }
            },
            "tags": ["checkout"]
        }"#;

        let item: FlagItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.key, "new-checkout");
        assert!(item.temporary);
        assert_eq!(
            item.maintainer.unwrap().first_name.as_deref(),
            Some("John")
        );
        assert_eq!(
            item.environments["production"].last_modified,
            Some(1_710_000_000_000)
        );
        assert_eq!(item.environments["staging"].last_modified, None);
        assert_eq!(item.environments["staging"].on, Some(false));
    }

    #[test]
    fn test_deserialize_minimal_item() {
        let json = r#"{ "key": "bare", "creationDate": 1 }"#;

        let item: FlagItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.name, "");
        assert!(!item.temporary);
        assert!(item.maintainer.is_none());
        assert!(item.environments.is_empty());
    }

    #[test]
    fn test_serialize_uses_api_field_names() {
        let item = FlagItem {
            key: "k".to_string(),
            name: "K".to_string(),
            creation_date: 5,
            temporary: false,
            maintainer: Some(MaintainerItem {
                first_name: Some("Ann".to_string()),
            }),
            environments: BTreeMap::new(),
        };

        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains("\"creationDate\":5"));
        assert!(json.contains("\"_maintainer\":{\"firstName\":\"Ann\"}"));
    }
}
