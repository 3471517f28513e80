use reaper_core::{
    AccountContext, AccountReport, AccountStatus, DeletionOutcome, DeletionStatus, RunMode,
    RunReport, RunReporter, TraceEntry, TraceOutcome,
};

use crate::color;

/// Prints banners, trace lines, and deletion outcomes as each account finishes.
pub struct ConsoleReporter {
    mode: RunMode,
}

impl ConsoleReporter {
    pub fn new(mode: RunMode) -> Self {
        Self { mode }
    }
}

impl RunReporter for ConsoleReporter {
    fn on_account_started(&self, account: &AccountContext, position: usize, total: usize) {
        println!();
        println!(
            "{}",
            color::bold(&color::glacier(&format!(
                "=== Account {} ({}/{}) ===",
                account, position, total
            )))
        );
    }

    fn on_account_finished(&self, report: &AccountReport) {
        if let AccountStatus::Skipped { reason } = &report.status {
            println!("  {}", color::rust(&format!("Skipped: {}", reason)));
            return;
        }

        println!("{}", color::bold("--- Selection ---"));
        if report.selection.trace.is_empty() {
            println!("  {}", color::slate("No matching resource groups or resources."));
        }
        for entry in &report.selection.trace {
            println!("  {}", trace_line(entry));
        }

        match self.mode {
            RunMode::Plan => {
                println!(
                    "  {}",
                    color::slate(&format!(
                        "{} candidate(s); plan mode, no deletion pass.",
                        report.selection.candidate_count()
                    ))
                );
            }
            RunMode::Apply { dry_run } => {
                let heading = if dry_run {
                    "--- Deletion (dry run) ---"
                } else {
                    "--- Deletion ---"
                };
                println!("{}", color::bold(heading));
                if report.outcomes.is_empty() {
                    println!("  {}", color::slate("Nothing to delete."));
                }
                for outcome in &report.outcomes {
                    println!("  {}", outcome_line(outcome));
                }
            }
        }
    }
}

pub fn trace_line(entry: &TraceEntry) -> String {
    let text = entry.to_string();
    match entry.outcome {
        TraceOutcome::Pinned | TraceOutcome::Remaining { .. } => text,
        TraceOutcome::CoveredByGroup { .. } => color::slate(&text),
        TraceOutcome::ExpiredAdded { .. } | TraceOutcome::Warning { .. } => color::amber(&text),
        TraceOutcome::Error { .. } => color::rust(&text),
    }
}

pub fn outcome_line(outcome: &DeletionOutcome) -> String {
    let text = outcome.to_string();
    match outcome.status {
        DeletionStatus::WouldDelete => color::amber(&text),
        DeletionStatus::Deleted => color::moss(&text),
        DeletionStatus::Failed { .. } => color::rust(&text),
    }
}

pub fn print_summary(report: &RunReport) {
    let summary = report.summary();

    println!();
    println!("{}", color::bold("=== Summary ==="));
    println!(
        "  Accounts: {} completed, {} skipped",
        summary.accounts_completed, summary.accounts_skipped
    );
    println!("  Candidates: {}", summary.candidates);

    match report.mode {
        RunMode::Plan => {}
        RunMode::Apply { dry_run: true } => {
            println!("  Would delete: {}", summary.would_delete);
            println!(
                "  {}",
                color::slate("Dry run: nothing was deleted. Re-run with --execute to delete.")
            );
        }
        RunMode::Apply { dry_run: false } => {
            println!("  Deleted: {}", summary.deleted);
        }
    }

    if summary.failed > 0 {
        println!("  {}", color::rust(&format!("Failed: {}", summary.failed)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaper_core::{EntityKind, SelectionStrategy};

    #[test]
    fn test_trace_line_contains_identity_and_outcome() {
        let entry = TraceEntry {
            kind: EntityKind::ResourceGroup,
            identity: "rg-demo-test2".to_string(),
            strategy: Some(SelectionStrategy::NamePattern),
            outcome: TraceOutcome::Remaining { days: 2.04 },
        };
        let line = trace_line(&entry);
        assert!(line.contains("rg-demo-test2"));
        assert!(line.contains("2.0 days remaining"));
    }

    #[test]
    fn test_outcome_line_dry_run() {
        let outcome = DeletionOutcome {
            kind: EntityKind::ResourceGroup,
            identity: "rg-demo-test1".to_string(),
            status: DeletionStatus::WouldDelete,
        };
        assert!(outcome_line(&outcome).contains("would delete resource group 'rg-demo-test1'"));
    }
}
