//! LaunchDarkly API data models

mod flag;

pub use flag::{EnvironmentItem, FlagItem, MaintainerItem};
