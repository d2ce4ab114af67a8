//! Flag display model

use serde::Serialize;
use tabled::Tabled;

use crate::flags::Flag;
use crate::output::formatters::{flag_url, format_date, format_env_status};

/// Flag display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FlagDisplay {
    #[tabled(rename = "KEY")]
    pub key: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MAINTAINER")]
    pub maintainer: String,

    /// "temporary" or "permanent"
    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "CREATED")]
    pub created: String,

    /// Latest modification across environments
    #[tabled(rename = "LAST MODIFIED")]
    pub last_modified: String,

    #[tabled(rename = "ENVIRONMENTS")]
    pub environments: String,

    #[tabled(rename = "LINK")]
    pub url: String,
}

impl FlagDisplay {
    pub fn new(flag: &Flag, base_url: &str, project: &str) -> Self {
        Self {
            key: flag.key.clone(),
            name: flag.name.clone(),
            maintainer: flag.maintainer_name().unwrap_or("--").to_string(),
            kind: if flag.temporary { "temporary" } else { "permanent" }.to_string(),
            created: format_date(flag.creation_date),
            last_modified: format_date(flag.last_activity()),
            environments: format_env_status(flag),
            url: flag_url(base_url, project, &flag.key),
        }
    }
}
