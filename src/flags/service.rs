//! Flag filtering and inactivity classification
//!
//! Pure functions over flag lists. Output order always follows input order.

use chrono::{DateTime, Duration, Utc};

use super::Flag;

/// Days counted per month when computing the inactivity window.
///
/// The window is `months * 30` days, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

/// Apply the maintainer and exclusion filters shared by every command.
///
/// An empty `maintainers` list keeps every flag; otherwise a flag is kept only
/// when its maintainer's first name equals one of the names exactly. Flags
/// whose key is in `exclude` are dropped.
pub fn apply_common_filters(
    flags: Vec<Flag>,
    maintainers: &[String],
    exclude: &[String],
) -> Vec<Flag> {
    flags
        .into_iter()
        .filter(|flag| {
            maintainers.is_empty()
                || flag
                    .maintainer_name()
                    .is_some_and(|name| maintainers.iter().any(|m| m == name))
        })
        .filter(|flag| !exclude.contains(&flag.key))
        .collect()
}

/// Temporary flags with no activity in any environment for `months` months.
pub fn get_inactive_flags(
    flags: Vec<Flag>,
    months: u32,
    maintainers: &[String],
    exclude: &[String],
) -> Vec<Flag> {
    get_inactive_flags_at(flags, months, maintainers, exclude, Utc::now())
}

/// [`get_inactive_flags`] evaluated against a fixed `now`.
pub fn get_inactive_flags_at(
    flags: Vec<Flag>,
    months: u32,
    maintainers: &[String],
    exclude: &[String],
    now: DateTime<Utc>,
) -> Vec<Flag> {
    let threshold = inactivity_threshold(now, months);

    apply_common_filters(flags, maintainers, exclude)
        .into_iter()
        .filter(|flag| flag.temporary && flag.last_activity() < threshold)
        .collect()
}

/// Cutoff before which a flag's last activity counts as inactive.
pub fn inactivity_threshold(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(months) * DAYS_PER_MONTH)
}
