use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::{ExpirationVerdict, PolicySettings};
use crate::metadata::Tags;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whether a tag value counts as set.
///
/// After trimming, anything non-empty other than `false` (any case) is truthy.
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case("false")
}

/// Evaluate an entity against the expiration policy.
///
/// A truthy pinned tag wins over everything else. Otherwise the lifetime is
/// the integer value of the expiration tag, falling back to the default
/// (with a warning) when the tag is missing or not an integer, and the entity
/// is expired once its age strictly exceeds that lifetime.
pub fn evaluate(
    tags: &Tags,
    created_time: DateTime<Utc>,
    now: DateTime<Utc>,
    settings: &PolicySettings,
) -> ExpirationVerdict {
    if tags
        .get(&settings.pinned_tag)
        .is_some_and(|value| is_truthy(value))
    {
        return ExpirationVerdict::pinned();
    }

    let default_days = settings.default_expiration_days;
    let (lifetime_days, used_default_expiration, parse_warning) =
        match tags.get(&settings.expiration_tag) {
            None => (
                default_days,
                true,
                Some(format!(
                    "Expiration tag not present ('{}'); using default of {} days",
                    settings.expiration_tag, default_days
                )),
            ),
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(days) => (days, false, None),
                Err(_) => (
                    default_days,
                    true,
                    Some(format!(
                        "Expiration tag '{}' has non-integer value '{}'; using default of {} days",
                        settings.expiration_tag, raw, default_days
                    )),
                ),
            },
        };

    let age_days = (now - created_time).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let lifetime = lifetime_days as f64;
    let expired = age_days > lifetime;

    debug!(
        event = "core.policy.evaluate_completed",
        lifetime_days = lifetime_days,
        age_days = age_days,
        expired = expired
    );

    ExpirationVerdict {
        expired,
        pinned: false,
        lifetime_days: Some(lifetime_days),
        age_days: Some(age_days),
        remaining_days: Some(lifetime - age_days),
        used_default_expiration,
        parse_warning,
    }
}
