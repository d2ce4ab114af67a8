//! Scan result display model

use serde::Serialize;

use crate::flags::Flag;
use crate::output::formatters::{flag_url, format_date, format_env_status};
use crate::scanner::FileLocation;

/// An inactive flag together with every place it is referenced.
#[derive(Debug, Clone, Serialize)]
pub struct FlagReferenceDisplay {
    pub key: String,
    pub maintainer: Option<String>,
    pub created: String,
    pub environments: String,
    pub url: String,
    pub locations: Vec<FileLocation>,
}

impl FlagReferenceDisplay {
    pub fn new(flag: &Flag, locations: &[FileLocation], base_url: &str, project: &str) -> Self {
        Self {
            key: flag.key.clone(),
            maintainer: flag.maintainer_name().map(str::to_string),
            created: format_date(flag.creation_date),
            environments: format_env_status(flag),
            url: flag_url(base_url, project, &flag.key),
            locations: locations.to_vec(),
        }
    }

    /// Multi-line block for terminal output.
    pub fn format_block(&self) -> String {
        let mut out = format!(
            "{} [{}]\n  Maintainer: {}\n  Created: {}\n  URL: {}\n  Locations:\n",
            self.key,
            self.environments,
            self.maintainer.as_deref().unwrap_or("--"),
            self.created,
            self.url
        );
        for loc in &self.locations {
            out.push_str(&format!("    {}:{}\n", loc.file_path, loc.line_number));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::fixtures::flag;

    #[test]
    fn test_format_block_lists_locations() {
        let locations = vec![
            FileLocation {
                file_path: "src/app.py".to_string(),
                line_number: 3,
            },
            FileLocation {
                file_path: "src/view.js".to_string(),
                line_number: 10,
            },
        ];

        let display = FlagReferenceDisplay::new(&flag("old-flag"), &locations, "https://x", "web");
        let block = display.format_block();

        assert!(block.starts_with("old-flag [--]"));
        assert!(block.contains("Maintainer: John"));
        assert!(block.contains("URL: https://x/web/production/features/old-flag"));
        assert!(block.contains("    src/app.py:3\n"));
        assert!(block.contains("    src/view.js:10\n"));
    }
}
