use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::types::{ConfigLayer, ReaperConfig};
use crate::validation::validate_config;

const CONFIG_DIR: &str = ".reaper";
const CONFIG_FILE: &str = "config.toml";

/// Load the reaper configuration.
///
/// Layers, later wins:
/// 1. built-in defaults
/// 2. `~/.reaper/config.toml` (if present)
/// 3. `./.reaper/config.toml` (if present)
/// 4. `explicit` path (must exist)
/// 5. `overrides` (command-line flags)
///
/// The merged result is validated before it is returned.
pub fn load_config(
    explicit: Option<&Path>,
    overrides: ConfigLayer,
) -> Result<ReaperConfig, ConfigError> {
    let mut optional = Vec::new();
    if let Some(path) = user_config_path() {
        optional.push(path);
    }
    optional.push(project_config_path());

    load_config_from(&optional, explicit, overrides)
}

/// Same as [`load_config`] with the discovered file locations supplied by the caller.
pub fn load_config_from(
    optional: &[PathBuf],
    explicit: Option<&Path>,
    overrides: ConfigLayer,
) -> Result<ReaperConfig, ConfigError> {
    let mut config = ReaperConfig::default();

    for path in optional {
        if !path.exists() {
            debug!(event = "config.layer_skipped", path = %path.display());
            continue;
        }
        config.merge(load_layer(path)?);
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        config.merge(load_layer(path)?);
    }

    config.merge(overrides);
    validate_config(&config)?;

    info!(
        event = "config.load_completed",
        accounts = config.accounts.len(),
        dry_run = config.dry_run
    );

    Ok(config)
}

/// Read and parse a single TOML layer.
pub fn load_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let layer = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "config.layer_loaded", path = %path.display());
    Ok(layer)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn project_config_path() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PolicyLayer;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_optional_layers_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = ConfigLayer {
            accounts: Some(vec!["sub-a".to_string()]),
            ..Default::default()
        };

        let config = load_config_from(&[dir.path().join("nope.toml")], None, overrides).unwrap();
        assert_eq!(config.accounts, vec!["sub-a".to_string()]);
        assert!(config.dry_run);
    }

    #[test]
    fn test_layers_merge_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let user = write(
            dir.path(),
            "user.toml",
            r#"
            accounts = ["sub-user"]
            dry_run = false

            [policy]
            default_expiration_days = 10
            "#,
        );
        let project = write(
            dir.path(),
            "project.toml",
            r#"
            [policy]
            default_expiration_days = 5

            [selection]
            resource_group_prefix = "rg-demo-"
            "#,
        );
        let explicit = write(dir.path(), "explicit.toml", "accounts = [\"sub-explicit\"]\n");

        let overrides = ConfigLayer {
            policy: PolicyLayer {
                pinned_tag: Some("keep".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let config = load_config_from(&[user, project], Some(explicit.as_path()), overrides).unwrap();
        assert_eq!(config.accounts, vec!["sub-explicit".to_string()]);
        assert!(!config.dry_run);
        assert_eq!(config.policy.default_expiration_days, 5);
        assert_eq!(config.policy.pinned_tag, "keep");
        assert_eq!(config.selection.resource_group_prefix, "rg-demo-");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let result = load_config_from(&[], Some(missing.as_path()), ConfigLayer::default());
        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write(dir.path(), "broken.toml", "accounts = [\n");

        let err = load_config_from(&[broken], None, ConfigLayer::default()).unwrap_err();
        match err {
            ConfigError::ConfigParseError { path, .. } => assert!(path.ends_with("broken.toml")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_merged_config_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&[dir.path().join("none.toml")], None, ConfigLayer::default());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }
}
