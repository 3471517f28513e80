mod handler;
mod types;

pub use handler::{matches_name_pattern, select};
pub use types::{
    DeletionCandidate, DeletionCandidateSet, Selection, SelectionSettings, SelectionStrategy,
    TraceEntry, TraceOutcome,
};
