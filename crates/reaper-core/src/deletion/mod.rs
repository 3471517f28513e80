mod handler;
mod types;

pub use handler::delete_candidates;
pub use types::{DeletionOutcome, DeletionStatus};
