//! Reusable formatting utilities for CLI output
//!
//! Dates, ages and environment summaries shared by the flag and cache views.

use chrono::{DateTime, Local, Utc};

use crate::flags::Flag;

/// Calendar date of a timestamp, e.g. `2025-01-15`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Local date and time of an epoch-seconds timestamp, e.g. `2025-01-15 14:30`.
///
/// Returns "N/A" for timestamps chrono cannot represent.
pub fn format_local_datetime(epoch_seconds: f64) -> String {
    DateTime::from_timestamp_millis((epoch_seconds * 1000.0) as i64)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// How long ago something happened: `42m ago`, `3h ago`.
pub fn format_age(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0) as u64;
    if minutes < 60 {
        format!("{}m ago", minutes)
    } else {
        format!("{}h ago", minutes / 60)
    }
}

/// Time left before expiry: `in 42m`, `in 3h`, or `expired`.
pub fn format_expiry(expires_in_seconds: f64) -> String {
    if expires_in_seconds <= 0.0 {
        return "expired".to_string();
    }

    let minutes = (expires_in_seconds / 60.0) as u64;
    if minutes < 60 {
        format!("in {}m", minutes)
    } else {
        format!("in {}h", minutes / 60)
    }
}

/// Per-environment on/off summary, e.g. `production: ON, staging: OFF`.
///
/// Environments with unknown state are shown with `?`; a flag with no
/// environments yields "--".
pub fn format_env_status(flag: &Flag) -> String {
    if flag.environments.is_empty() {
        return "--".to_string();
    }

    flag.environments
        .values()
        .map(|env| {
            let state = match env.on {
                Some(true) => "ON",
                Some(false) => "OFF",
                None => "?",
            };
            format!("{}: {}", env.environment_key, state)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Link to the flag in the LaunchDarkly UI.
pub fn flag_url(base_url: &str, project: &str, key: &str) -> String {
    format!(
        "{}/{}/production/features/{}",
        base_url.trim_end_matches('/'),
        project,
        key
    )
}
