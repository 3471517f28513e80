use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::types::{
    DeletionCandidate, DeletionCandidateSet, Selection, SelectionSettings, SelectionStrategy,
    TraceEntry, TraceOutcome,
};
use crate::metadata::{
    AccountMetadata, EntityKind, ResourceGroupMetadata, ResourceMetadata, Tags, parse_timestamp,
};
use crate::policy::{PolicySettings, evaluate, is_truthy};

/// Whether a resource group name matches `prefix*suffix`.
///
/// An empty prefix never matches. Prefix and suffix may not overlap.
pub fn matches_name_pattern(name: &str, prefix: &str, suffix: &str) -> bool {
    !prefix.is_empty()
        && name.len() >= prefix.len() + suffix.len()
        && name.starts_with(prefix)
        && name.ends_with(suffix)
}

/// Run every selection strategy over one account's metadata.
///
/// Resource-group strategies run first, in [`SelectionStrategy::RESOURCE_GROUP`]
/// order, then the resource strategy. An entity already evaluated by an
/// earlier strategy is not evaluated again, and a resource whose owning group
/// is already a candidate is skipped. Every considered entity leaves at least
/// one entry in the trace.
pub fn select(
    metadata: &AccountMetadata,
    settings: &SelectionSettings,
    now: DateTime<Utc>,
) -> Selection {
    info!(
        event = "core.selection.select_started",
        resource_groups = metadata.resource_groups.len(),
        resources = metadata.resources.len()
    );

    let mut selection = Selection::default();

    let mut evaluated_groups: HashSet<&str> = HashSet::new();
    for strategy in SelectionStrategy::RESOURCE_GROUP {
        for group in metadata
            .resource_groups
            .iter()
            .filter(|group| group_matches(strategy, group, settings))
        {
            if !evaluated_groups.insert(group.name.as_str()) {
                debug!(
                    event = "core.selection.entity_already_evaluated",
                    identity = %group.name,
                    strategy = %strategy
                );
                continue;
            }

            consider(
                Entity::group(group),
                strategy,
                &settings.policy,
                now,
                &mut selection.resource_groups,
                &mut selection.trace,
            );
        }
    }

    let mut evaluated_resources: HashSet<&str> = HashSet::new();
    let strategy = SelectionStrategy::ResourceMarkerTag;
    for resource in &metadata.resources {
        if !evaluated_resources.insert(resource.id.as_str()) {
            debug!(
                event = "core.selection.entity_already_evaluated",
                identity = %resource.id,
                strategy = %strategy
            );
            continue;
        }

        if selection
            .resource_groups
            .contains(&resource.resource_group_name)
        {
            info!(
                event = "core.selection.resource_covered_by_group",
                identity = %resource.id,
                resource_group = %resource.resource_group_name
            );
            selection.trace.push(TraceEntry {
                kind: EntityKind::Resource,
                identity: resource.id.clone(),
                strategy: Some(strategy),
                outcome: TraceOutcome::CoveredByGroup {
                    resource_group: resource.resource_group_name.clone(),
                },
            });
            continue;
        }

        consider(
            Entity::resource(resource),
            strategy,
            &settings.policy,
            now,
            &mut selection.resources,
            &mut selection.trace,
        );
    }

    info!(
        event = "core.selection.select_completed",
        resource_group_candidates = selection.resource_groups.len(),
        resource_candidates = selection.resources.len(),
        trace_entries = selection.trace.len()
    );

    selection
}

fn group_matches(
    strategy: SelectionStrategy,
    group: &ResourceGroupMetadata,
    settings: &SelectionSettings,
) -> bool {
    match strategy {
        SelectionStrategy::NamePattern => matches_name_pattern(
            &group.name,
            &settings.resource_group_prefix,
            &settings.resource_group_suffix,
        ),
        SelectionStrategy::MarkerTag => group
            .tags
            .get(&settings.marker_tag)
            .is_some_and(|value| is_truthy(value)),
        SelectionStrategy::ResourceMarkerTag => false,
    }
}

/// Borrowed view over either kind of entity.
struct Entity<'a> {
    kind: EntityKind,
    identity: &'a str,
    name: &'a str,
    resource_group: Option<&'a str>,
    tags: &'a Tags,
    created: Option<&'a str>,
}

impl<'a> Entity<'a> {
    fn group(group: &'a ResourceGroupMetadata) -> Self {
        Self {
            kind: EntityKind::ResourceGroup,
            identity: &group.name,
            name: &group.name,
            resource_group: None,
            tags: &group.tags,
            created: group.created_time.as_deref(),
        }
    }

    fn resource(resource: &'a ResourceMetadata) -> Self {
        Self {
            kind: EntityKind::Resource,
            identity: &resource.id,
            name: &resource.name,
            resource_group: Some(&resource.resource_group_name),
            tags: &resource.tags,
            created: resource.creation_time.as_deref(),
        }
    }

    fn trace(&self, strategy: SelectionStrategy, outcome: TraceOutcome) -> TraceEntry {
        TraceEntry {
            kind: self.kind,
            identity: self.identity.to_string(),
            strategy: Some(strategy),
            outcome,
        }
    }
}

fn consider(
    entity: Entity<'_>,
    strategy: SelectionStrategy,
    policy: &PolicySettings,
    now: DateTime<Utc>,
    candidates: &mut DeletionCandidateSet,
    trace: &mut Vec<TraceEntry>,
) {
    let created_time = match parse_timestamp(entity.created) {
        Ok(created_time) => created_time,
        Err(e) => {
            warn!(
                event = "core.selection.creation_time_invalid",
                kind = %entity.kind,
                identity = entity.identity,
                error = %e
            );
            trace.push(entity.trace(
                strategy,
                TraceOutcome::Error {
                    message: e.to_string(),
                },
            ));
            return;
        }
    };

    let verdict = evaluate(entity.tags, created_time, now, policy);

    if let Some(message) = &verdict.parse_warning {
        warn!(
            event = "core.selection.expiration_tag_defaulted",
            kind = %entity.kind,
            identity = entity.identity,
            message = %message
        );
        trace.push(entity.trace(
            strategy,
            TraceOutcome::Warning {
                message: message.clone(),
            },
        ));
    }

    info!(
        event = "core.selection.entity_evaluated",
        kind = %entity.kind,
        identity = entity.identity,
        strategy = %strategy,
        pinned = verdict.pinned,
        expired = verdict.expired,
        remaining_days = ?verdict.remaining_days
    );

    if verdict.pinned {
        trace.push(entity.trace(strategy, TraceOutcome::Pinned));
        return;
    }

    let remaining_days = verdict.remaining_days.unwrap_or_default();
    if !verdict.expired {
        trace.push(entity.trace(
            strategy,
            TraceOutcome::Remaining {
                days: remaining_days,
            },
        ));
        return;
    }

    let candidate = DeletionCandidate {
        kind: entity.kind,
        identity: entity.identity.to_string(),
        name: entity.name.to_string(),
        resource_group: entity.resource_group.map(str::to_string),
        strategy,
        verdict,
    };

    if candidates.insert(candidate) {
        trace.push(entity.trace(strategy, TraceOutcome::ExpiredAdded { remaining_days }));
    }
}
