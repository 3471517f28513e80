use reaper_config::PolicyConfig;
use serde::Serialize;

/// Inputs to the expiration policy that do not come from the entity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySettings {
    pub default_expiration_days: i64,
    pub expiration_tag: String,
    pub pinned_tag: String,
}

impl From<&PolicyConfig> for PolicySettings {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            default_expiration_days: config.default_expiration_days,
            expiration_tag: config.expiration_tag.clone(),
            pinned_tag: config.pinned_tag.clone(),
        }
    }
}

/// Outcome of evaluating one entity against the expiration policy.
///
/// Pinned verdicts short-circuit: lifetime, age, and remaining days are not
/// computed for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpirationVerdict {
    pub expired: bool,
    pub pinned: bool,
    /// Effective lifetime in days.
    pub lifetime_days: Option<i64>,
    /// Fractional days since creation; negative for future timestamps.
    pub age_days: Option<f64>,
    /// `lifetime_days - age_days`; negative once expired.
    pub remaining_days: Option<f64>,
    pub used_default_expiration: bool,
    pub parse_warning: Option<String>,
}

impl ExpirationVerdict {
    pub(crate) fn pinned() -> Self {
        Self {
            expired: false,
            pinned: true,
            lifetime_days: None,
            age_days: None,
            remaining_days: None,
            used_default_expiration: false,
            parse_warning: None,
        }
    }

    /// Whether the entity may be deleted.
    pub fn is_deletable(&self) -> bool {
        self.expired && !self.pinned
    }
}
