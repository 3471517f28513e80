use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use super::reporter::RunReporter;
use super::types::{AccountReport, AccountStatus, RunMode, RunReport, RunSettings};
use crate::client::{ClientError, CloudClient};
use crate::deletion::delete_candidates;
use crate::metadata::{AccountContext, AccountMetadata, EntityKind};
use crate::selection::{SelectionStrategy, TraceEntry, TraceOutcome, select};

/// Marker tag value used for the tag-indexed resource lookup.
pub const RESOURCE_MARKER_VALUE: &str = "true";

/// Process every configured account in order.
///
/// Accounts are independent: a context or fetch failure skips that account
/// and the run moves on. For each account the full metadata fetch finishes
/// before selection starts, and every deletion is attempted before the next
/// account begins.
pub fn run<C: CloudClient + ?Sized>(
    client: &mut C,
    settings: &RunSettings,
    now: DateTime<Utc>,
    reporter: &dyn RunReporter,
) -> RunReport {
    info!(
        event = "core.run.started",
        accounts = settings.accounts.len(),
        mode = ?settings.mode
    );

    let total = settings.accounts.len();
    let mut accounts = Vec::with_capacity(total);

    for (position, account) in settings.accounts.iter().enumerate() {
        reporter.on_account_started(account, position + 1, total);
        let report = process_account(client, account, settings, now);
        reporter.on_account_finished(&report);
        accounts.push(report);
    }

    let report = RunReport {
        started_at: now,
        mode: settings.mode,
        accounts,
    };

    let summary = report.summary();
    info!(
        event = "core.run.completed",
        accounts_completed = summary.accounts_completed,
        accounts_skipped = summary.accounts_skipped,
        candidates = summary.candidates,
        deleted = summary.deleted,
        would_delete = summary.would_delete,
        failed = summary.failed
    );

    report
}

fn process_account<C: CloudClient + ?Sized>(
    client: &mut C,
    account: &AccountContext,
    settings: &RunSettings,
    now: DateTime<Utc>,
) -> AccountReport {
    info!(event = "core.run.account_started", account = %account);

    if let Err(e) = establish_context(client, account) {
        error!(
            event = "core.run.account_skipped",
            account = %account,
            stage = "context",
            error = %e
        );
        return AccountReport::skipped(account.clone(), e.to_string());
    }

    let (metadata, fetch_errors) =
        match fetch_account_metadata(&*client, account, &settings.selection.marker_tag) {
            Ok(fetched) => fetched,
            Err(e) => {
                error!(
                    event = "core.run.account_skipped",
                    account = %account,
                    stage = "fetch",
                    error = %e
                );
                return AccountReport::skipped(account.clone(), e.to_string());
            }
        };

    let mut selection = select(&metadata, &settings.selection, now);
    if !fetch_errors.is_empty() {
        let mut trace = fetch_errors;
        trace.append(&mut selection.trace);
        selection.trace = trace;
    }

    let outcomes = match settings.mode {
        RunMode::Plan => Vec::new(),
        RunMode::Apply { dry_run } => delete_candidates(client, account, &selection, dry_run),
    };

    info!(
        event = "core.run.account_completed",
        account = %account,
        candidates = selection.candidate_count(),
        outcomes = outcomes.len()
    );

    AccountReport {
        account: account.clone(),
        status: AccountStatus::Completed,
        selection,
        outcomes,
    }
}

fn establish_context<C: CloudClient + ?Sized>(
    client: &mut C,
    account: &AccountContext,
) -> Result<(), ClientError> {
    if client.active_context() == Some(account) {
        info!(event = "core.run.context_reused", account = %account);
        return Ok(());
    }

    client.set_context(account)?;
    info!(event = "core.run.context_established", account = %account);
    Ok(())
}

/// Fetch everything selection needs for one account.
///
/// Resource groups and the marker-tag lookup must succeed. A resource whose
/// detail cannot be fetched is left out and returned as an error trace entry.
pub fn fetch_account_metadata<C: CloudClient + ?Sized>(
    client: &C,
    account: &AccountContext,
    marker_tag: &str,
) -> Result<(AccountMetadata, Vec<TraceEntry>), ClientError> {
    let resource_groups = client.fetch_resource_groups(account)?;
    let resource_ids = client.fetch_resources_by_tag(account, marker_tag, RESOURCE_MARKER_VALUE)?;

    let mut resources = Vec::with_capacity(resource_ids.len());
    let mut errors = Vec::new();

    for id in resource_ids {
        match client.fetch_resource_detail(account, &id) {
            Ok(resource) => resources.push(resource),
            Err(e) => {
                warn!(
                    event = "core.run.resource_detail_failed",
                    account = %account,
                    identity = %id,
                    error = %e
                );
                errors.push(TraceEntry {
                    kind: EntityKind::Resource,
                    identity: id,
                    strategy: Some(SelectionStrategy::ResourceMarkerTag),
                    outcome: TraceOutcome::Error {
                        message: e.to_string(),
                    },
                });
            }
        }
    }

    info!(
        event = "core.run.fetch_completed",
        account = %account,
        resource_groups = resource_groups.len(),
        resources = resources.len(),
        detail_failures = errors.len()
    );

    Ok((
        AccountMetadata {
            resource_groups,
            resources,
        },
        errors,
    ))
}
