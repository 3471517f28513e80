mod handler;
mod reporter;
mod types;

pub use handler::{RESOURCE_MARKER_VALUE, fetch_account_metadata, run};
pub use reporter::{RunReporter, SilentReporter};
pub use types::{AccountReport, AccountStatus, RunMode, RunReport, RunSettings, RunSummary};
