//! Core library for ttl-reaper.
//!
//! Turns resource metadata (name, tags, creation time) into delete/keep
//! decisions and drives deletions, one account at a time.

pub mod client;
pub mod deletion;
pub mod errors;
pub mod events;
pub mod inventory;
pub mod logging;
pub mod metadata;
pub mod orchestrator;
pub mod policy;
pub mod selection;

pub use client::{ClientError, CloudClient};
pub use deletion::{DeletionOutcome, DeletionStatus, delete_candidates};
pub use errors::{ReaperError, ReaperResult};
pub use inventory::{Inventory, InventoryClient, InventoryError};
pub use logging::init_logging;
pub use metadata::{
    AccountContext, AccountMetadata, EntityKind, ResourceGroupMetadata, ResourceMetadata, Tags,
};
pub use orchestrator::{
    AccountReport, AccountStatus, RunMode, RunReport, RunReporter, RunSettings, RunSummary,
    SilentReporter, run,
};
pub use policy::{ExpirationVerdict, PolicyError, PolicySettings, evaluate, is_truthy};
pub use selection::{
    DeletionCandidate, DeletionCandidateSet, Selection, SelectionSettings, SelectionStrategy,
    TraceEntry, TraceOutcome, select,
};
