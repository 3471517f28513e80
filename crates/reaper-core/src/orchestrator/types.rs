use chrono::{DateTime, Utc};
use reaper_config::ReaperConfig;
use serde::Serialize;

use crate::deletion::{DeletionOutcome, DeletionStatus};
use crate::metadata::AccountContext;
use crate::selection::{Selection, SelectionSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunMode {
    /// Fetch and select only; no deletion pass at all.
    Plan,
    /// Select, then delete (or report what would be deleted).
    Apply { dry_run: bool },
}

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub accounts: Vec<AccountContext>,
    pub selection: SelectionSettings,
    pub mode: RunMode,
}

impl RunSettings {
    /// Build run settings from a validated config. `plan` overrides the
    /// configured dry-run flag with [`RunMode::Plan`].
    pub fn from_config(config: &ReaperConfig, plan: bool) -> Self {
        let mode = if plan {
            RunMode::Plan
        } else {
            RunMode::Apply {
                dry_run: config.dry_run,
            }
        };

        Self {
            accounts: config.accounts.iter().map(AccountContext::new).collect(),
            selection: SelectionSettings::from(config),
            mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AccountStatus {
    Completed,
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountReport {
    pub account: AccountContext,
    #[serde(flatten)]
    pub status: AccountStatus,
    pub selection: Selection,
    pub outcomes: Vec<DeletionOutcome>,
}

impl AccountReport {
    pub(crate) fn skipped(account: AccountContext, reason: String) -> Self {
        Self {
            account,
            status: AccountStatus::Skipped { reason },
            selection: Selection::default(),
            outcomes: Vec::new(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, AccountStatus::Skipped { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    #[serde(flatten)]
    pub mode: RunMode,
    pub accounts: Vec<AccountReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub accounts_completed: usize,
    pub accounts_skipped: usize,
    pub candidates: usize,
    pub deleted: usize,
    pub would_delete: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for account in &self.accounts {
            if account.is_skipped() {
                summary.accounts_skipped += 1;
                continue;
            }
            summary.accounts_completed += 1;
            summary.candidates += account.selection.candidate_count();
            for outcome in &account.outcomes {
                match outcome.status {
                    DeletionStatus::Deleted => summary.deleted += 1,
                    DeletionStatus::WouldDelete => summary.would_delete += 1,
                    DeletionStatus::Failed { .. } => summary.failed += 1,
                }
            }
        }
        summary
    }

    /// True when an account was skipped or a deletion failed.
    pub fn has_failures(&self) -> bool {
        let summary = self.summary();
        summary.accounts_skipped > 0 || summary.failed > 0
    }
}
