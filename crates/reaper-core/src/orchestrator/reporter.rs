use crate::metadata::AccountContext;
use crate::orchestrator::types::AccountReport;

/// Receives progress while a run walks its accounts.
///
/// The CLI prints banners and trace lines from these callbacks.
/// All methods have default no-op implementations.
pub trait RunReporter {
    fn on_account_started(&self, _account: &AccountContext, _position: usize, _total: usize) {}
    fn on_account_finished(&self, _report: &AccountReport) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl RunReporter for SilentReporter {}
