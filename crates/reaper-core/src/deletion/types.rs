use std::fmt;

use serde::Serialize;

use crate::metadata::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeletionStatus {
    /// Dry run: the candidate is eligible and would have been deleted.
    WouldDelete,
    Deleted,
    Failed { message: String },
}

/// Result of one attempted deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    pub kind: EntityKind,
    pub identity: String,
    #[serde(flatten)]
    pub status: DeletionStatus,
}

impl DeletionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, DeletionStatus::Failed { .. })
    }
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            DeletionStatus::WouldDelete => {
                write!(f, "would delete {} '{}'", self.kind, self.identity)
            }
            DeletionStatus::Deleted => write!(f, "deleted {} '{}'", self.kind, self.identity),
            DeletionStatus::Failed { message } => write!(
                f,
                "failed to delete {} '{}': {}",
                self.kind, self.identity, message
            ),
        }
    }
}
