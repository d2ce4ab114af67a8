//! Arguments controlling where flags come from

use std::time::Duration;

use clap::Args;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_PROJECT};

/// Project, API endpoint and cache behaviour for commands that fetch flags.
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// LaunchDarkly project key
    #[arg(long, short = 'p', env = "LD_PROJECT", hide_env = true, default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// LaunchDarkly base URL
    #[arg(long, env = "LD_BASE_URL", hide_env = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Cache TTL in seconds
    #[arg(long, default_value_t = DEFAULT_CACHE_TTL)]
    pub cache_ttl: u64,

    /// Bypass cache for this run
    #[arg(long)]
    pub no_cache: bool,

    /// Force refresh and rewrite cache
    #[arg(long)]
    pub override_cache: bool,
}

impl FetchArgs {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn enable_cache(&self) -> bool {
        !self.no_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_flags() {
        let args = FetchArgs {
            project: "web".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: 120,
            no_cache: true,
            override_cache: false,
        };

        assert!(!args.enable_cache());
        assert_eq!(args.ttl(), Duration::from_secs(120));
    }
}
