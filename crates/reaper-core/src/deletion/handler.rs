use tracing::{error, info};

use super::types::{DeletionOutcome, DeletionStatus};
use crate::client::CloudClient;
use crate::metadata::{AccountContext, EntityKind};
use crate::selection::{DeletionCandidate, Selection};

/// Delete every candidate of a selection, resource groups first.
///
/// Each deletion is attempted on its own; a failure is recorded and the
/// remaining candidates are still processed. With `dry_run` no mutating call
/// is made and eligible candidates are reported as
/// [`DeletionStatus::WouldDelete`].
pub fn delete_candidates<C: CloudClient + ?Sized>(
    client: &mut C,
    context: &AccountContext,
    selection: &Selection,
    dry_run: bool,
) -> Vec<DeletionOutcome> {
    info!(
        event = "core.deletion.batch_started",
        account = %context,
        resource_groups = selection.resource_groups.len(),
        resources = selection.resources.len(),
        dry_run = dry_run
    );

    let outcomes: Vec<DeletionOutcome> = selection
        .resource_groups
        .iter()
        .chain(selection.resources.iter())
        .map(|candidate| delete_one(client, context, candidate, dry_run))
        .collect();

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    info!(
        event = "core.deletion.batch_completed",
        account = %context,
        attempted = outcomes.len(),
        failed = failed,
        dry_run = dry_run
    );

    outcomes
}

fn delete_one<C: CloudClient + ?Sized>(
    client: &mut C,
    context: &AccountContext,
    candidate: &DeletionCandidate,
    dry_run: bool,
) -> DeletionOutcome {
    let outcome = |status| DeletionOutcome {
        kind: candidate.kind,
        identity: candidate.identity.clone(),
        status,
    };

    if !candidate.verdict.is_deletable() {
        error!(
            event = "core.deletion.candidate_ineligible",
            kind = %candidate.kind,
            identity = %candidate.identity
        );
        return outcome(DeletionStatus::Failed {
            message: "candidate is pinned or not expired".to_string(),
        });
    }

    if dry_run {
        info!(
            event = "core.deletion.delete_skipped",
            kind = %candidate.kind,
            identity = %candidate.identity,
            reason = "dry_run"
        );
        return outcome(DeletionStatus::WouldDelete);
    }

    info!(
        event = "core.deletion.delete_started",
        kind = %candidate.kind,
        identity = %candidate.identity
    );

    let result = match candidate.kind {
        EntityKind::ResourceGroup => client.delete_resource_group(context, &candidate.identity),
        EntityKind::Resource => client.delete_resource(context, &candidate.identity),
    };

    match result {
        Ok(()) => {
            info!(
                event = "core.deletion.delete_completed",
                kind = %candidate.kind,
                identity = %candidate.identity
            );
            outcome(DeletionStatus::Deleted)
        }
        Err(e) => {
            error!(
                event = "core.deletion.delete_failed",
                kind = %candidate.kind,
                identity = %candidate.identity,
                error = %e
            );
            outcome(DeletionStatus::Failed {
                message: e.to_string(),
            })
        }
    }
}
