use std::collections::HashSet;
use std::fmt;

use reaper_config::ReaperConfig;
use serde::Serialize;

use crate::metadata::EntityKind;
use crate::policy::{ExpirationVerdict, PolicySettings};

/// Ways an entity can be surfaced for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Resource group name matches the configured prefix and suffix.
    NamePattern,
    /// Resource group carries a truthy marker tag.
    MarkerTag,
    /// Resource returned by the marker-tag lookup (`marker == "true"`).
    ResourceMarkerTag,
}

impl SelectionStrategy {
    /// Resource-group strategies in evaluation order.
    pub const RESOURCE_GROUP: [SelectionStrategy; 2] =
        [SelectionStrategy::NamePattern, SelectionStrategy::MarkerTag];
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionStrategy::NamePattern => write!(f, "name-pattern"),
            SelectionStrategy::MarkerTag => write!(f, "marker-tag"),
            SelectionStrategy::ResourceMarkerTag => write!(f, "resource-marker-tag"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSettings {
    pub resource_group_prefix: String,
    pub resource_group_suffix: String,
    pub marker_tag: String,
    pub policy: PolicySettings,
}

impl From<&ReaperConfig> for SelectionSettings {
    fn from(config: &ReaperConfig) -> Self {
        Self {
            resource_group_prefix: config.selection.resource_group_prefix.clone(),
            resource_group_suffix: config.selection.resource_group_suffix.clone(),
            marker_tag: config.policy.marker_tag.clone(),
            policy: PolicySettings::from(&config.policy),
        }
    }
}

/// An expired, unpinned entity scheduled for deletion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletionCandidate {
    pub kind: EntityKind,
    /// Group name for resource groups, resource id for resources.
    pub identity: String,
    pub name: String,
    /// Owning group, for resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,
    /// Strategy that first claimed the entity.
    pub strategy: SelectionStrategy,
    pub verdict: ExpirationVerdict,
}

/// Candidates of one kind, keyed by identity, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeletionCandidateSet {
    candidates: Vec<DeletionCandidate>,
    #[serde(skip)]
    index: HashSet<String>,
}

impl DeletionCandidateSet {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            index: HashSet::new(),
        }
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains(identity)
    }

    /// Insert a candidate. Returns `false` and leaves the set untouched if
    /// the identity is already present.
    pub fn insert(&mut self, candidate: DeletionCandidate) -> bool {
        if !self.index.insert(candidate.identity.clone()) {
            return false;
        }
        self.candidates.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeletionCandidate> {
        self.candidates.iter()
    }

    pub fn identities(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.identity.as_str()).collect()
    }
}

impl Default for DeletionCandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Why an entity was or was not added to a candidate set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TraceOutcome {
    Pinned,
    ExpiredAdded { remaining_days: f64 },
    Remaining { days: f64 },
    Warning { message: String },
    /// Resource skipped because its owning group is already a candidate.
    CoveredByGroup { resource_group: String },
    Error { message: String },
}

/// One line of the per-account audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub kind: EntityKind,
    pub identity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SelectionStrategy>,
    #[serde(flatten)]
    pub outcome: TraceOutcome,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.identity)?;
        if let Some(strategy) = self.strategy {
            write!(f, " [{}]", strategy)?;
        }
        match &self.outcome {
            TraceOutcome::Pinned => write!(f, ": pinned, skipping"),
            TraceOutcome::ExpiredAdded { remaining_days } => write!(
                f,
                ": expired ({:.1} days remaining), added for deletion",
                remaining_days
            ),
            TraceOutcome::Remaining { days } => write!(f, ": {:.1} days remaining", days),
            TraceOutcome::Warning { message } => write!(f, ": warning: {}", message),
            TraceOutcome::CoveredByGroup { resource_group } => write!(
                f,
                ": owning group '{}' is already scheduled for deletion, skipping",
                resource_group
            ),
            TraceOutcome::Error { message } => write!(f, ": error: {}", message),
        }
    }
}

/// Result of running every selection strategy over one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    pub resource_groups: DeletionCandidateSet,
    pub resources: DeletionCandidateSet,
    pub trace: Vec<TraceEntry>,
}

impl Selection {
    pub fn candidate_count(&self) -> usize {
        self.resource_groups.len() + self.resources.len()
    }
}
