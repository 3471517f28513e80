use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::policy::PolicyError;

/// Tag name to tag value. Lookups are exact; case folding is the metadata
/// source's business.
pub type Tags = BTreeMap<String, String>;

/// Handle for the account (subscription) currently being processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountContext {
    account_id: String,
}

impl AccountContext {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl fmt::Display for AccountContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account_id)
    }
}

/// Which kind of entity a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    ResourceGroup,
    Resource,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::ResourceGroup => write!(f, "resource group"),
            EntityKind::Resource => write!(f, "resource"),
        }
    }
}

/// A resource group as reported by the metadata source.
///
/// `created_time` is kept raw; it is parsed when the group is evaluated so
/// that one bad timestamp only affects its own group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroupMetadata {
    pub name: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// An individually tagged resource.
///
/// `resource_group_name` is not checked against the fetched groups; the
/// owning group may be outside the current fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    pub id: String,
    pub name: String,
    pub resource_group_name: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Everything fetched for one account before evaluation begins.
#[derive(Debug, Clone, Default)]
pub struct AccountMetadata {
    pub resource_groups: Vec<ResourceGroupMetadata>,
    /// Resources returned by the marker-tag lookup, with their detail.
    pub resources: Vec<ResourceMetadata>,
}

/// Parse a creation timestamp (RFC 3339) into UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Result<DateTime<Utc>, PolicyError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(PolicyError::MissingCreationTime);
    };

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PolicyError::InvalidCreationTime {
            value: raw.to_string(),
            message: e.to_string(),
        })
}
