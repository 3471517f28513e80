use crate::errors::ConfigError;
use crate::types::ReaperConfig;

/// Check a merged configuration for values the reaper cannot run with.
pub fn validate_config(config: &ReaperConfig) -> Result<(), ConfigError> {
    if config.accounts.is_empty() {
        return Err(invalid(
            "at least one account must be configured (accounts or --account)",
        ));
    }

    if let Some(position) = config.accounts.iter().position(|a| a.trim().is_empty()) {
        return Err(invalid(format!(
            "account identifier at position {} is blank",
            position
        )));
    }

    let policy = &config.policy;
    let tags = [
        ("expiration_tag", &policy.expiration_tag),
        ("marker_tag", &policy.marker_tag),
        ("pinned_tag", &policy.pinned_tag),
    ];

    for (field, value) in &tags {
        if value.trim().is_empty() {
            return Err(invalid(format!("policy.{} must not be blank", field)));
        }
    }

    for (i, (field_a, value_a)) in tags.iter().enumerate() {
        for (field_b, value_b) in &tags[i + 1..] {
            if value_a == value_b {
                return Err(invalid(format!(
                    "policy.{} and policy.{} both use tag '{}'",
                    field_a, field_b, value_a
                )));
            }
        }
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.into(),
    }
}
