use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::{ResourceGroupMetadata, ResourceMetadata};

/// Snapshot of resource metadata for a set of accounts.
///
/// ```json
/// { "accounts": { "sub-a": { "resource_groups": [], "resources": [] } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountInventory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInventory {
    #[serde(default)]
    pub resource_groups: Vec<ResourceGroupMetadata>,
    #[serde(default)]
    pub resources: Vec<ResourceMetadata>,
}
