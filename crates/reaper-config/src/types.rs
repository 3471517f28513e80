use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPIRATION_DAYS: i64 = 3;
pub const DEFAULT_EXPIRATION_TAG: &str = "days";
pub const DEFAULT_MARKER_TAG: &str = "autodelete";
pub const DEFAULT_PINNED_TAG: &str = "pinned";

/// Fully resolved reaper configuration.
///
/// Produced by [`crate::load_config`] after every layer has been merged.
/// `dry_run` defaults to `true`: a destructive batch only mutates when the
/// operator opts in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaperConfig {
    /// Accounts (subscriptions) to process, in order.
    pub accounts: Vec<String>,
    pub dry_run: bool,
    pub selection: SelectionConfig,
    pub policy: PolicyConfig,
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            dry_run: true,
            selection: SelectionConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

/// Parameters of the resource-group name-pattern strategy.
///
/// An empty prefix turns the name-pattern strategy off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub resource_group_prefix: String,
    pub resource_group_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Lifetime applied when the expiration tag is missing or unparseable.
    pub default_expiration_days: i64,
    /// Tag holding a per-entity lifetime override, in days.
    pub expiration_tag: String,
    /// Tag flagging an entity as in scope for cleanup.
    pub marker_tag: String,
    /// Tag exempting an entity from deletion unconditionally.
    pub pinned_tag: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_expiration_days: DEFAULT_EXPIRATION_DAYS,
            expiration_tag: DEFAULT_EXPIRATION_TAG.to_string(),
            marker_tag: DEFAULT_MARKER_TAG.to_string(),
            pinned_tag: DEFAULT_PINNED_TAG.to_string(),
        }
    }
}

/// One configuration layer as it appears on disk or on the command line.
///
/// Every field is optional so that a layer only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub accounts: Option<Vec<String>>,
    pub dry_run: Option<bool>,
    #[serde(default)]
    pub selection: SelectionLayer,
    #[serde(default)]
    pub policy: PolicyLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionLayer {
    pub resource_group_prefix: Option<String>,
    pub resource_group_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyLayer {
    pub default_expiration_days: Option<i64>,
    pub expiration_tag: Option<String>,
    pub marker_tag: Option<String>,
    pub pinned_tag: Option<String>,
}

impl ReaperConfig {
    /// Apply a layer on top of this configuration. Fields the layer leaves
    /// unset keep their current value.
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(accounts) = layer.accounts {
            self.accounts = accounts;
        }
        if let Some(dry_run) = layer.dry_run {
            self.dry_run = dry_run;
        }

        let selection = layer.selection;
        if let Some(prefix) = selection.resource_group_prefix {
            self.selection.resource_group_prefix = prefix;
        }
        if let Some(suffix) = selection.resource_group_suffix {
            self.selection.resource_group_suffix = suffix;
        }

        let policy = layer.policy;
        if let Some(days) = policy.default_expiration_days {
            self.policy.default_expiration_days = days;
        }
        if let Some(tag) = policy.expiration_tag {
            self.policy.expiration_tag = tag;
        }
        if let Some(tag) = policy.marker_tag {
            self.policy.marker_tag = tag;
        }
        if let Some(tag) = policy.pinned_tag {
            self.policy.pinned_tag = tag;
        }
    }
}
