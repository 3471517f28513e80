#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use reaper_core::inventory::AccountInventory;
use reaper_core::{
    AccountContext, ClientError, CloudClient, PolicySettings, ResourceGroupMetadata,
    ResourceMetadata, SelectionSettings, Tags,
};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn group(name: &str, age: Duration, pairs: &[(&str, &str)]) -> ResourceGroupMetadata {
    ResourceGroupMetadata {
        name: name.to_string(),
        tags: tags(pairs),
        created_time: Some((now() - age).to_rfc3339()),
    }
}

pub fn resource(
    name: &str,
    resource_group: &str,
    age: Duration,
    pairs: &[(&str, &str)],
) -> ResourceMetadata {
    ResourceMetadata {
        id: format!(
            "/subscriptions/test/resourceGroups/{}/providers/Microsoft.Storage/storageAccounts/{}",
            resource_group, name
        ),
        name: name.to_string(),
        resource_group_name: resource_group.to_string(),
        tags: tags(pairs),
        creation_time: Some((now() - age).to_rfc3339()),
    }
}

pub fn selection_settings() -> SelectionSettings {
    SelectionSettings {
        resource_group_prefix: "rg-demo-".to_string(),
        resource_group_suffix: String::new(),
        marker_tag: "autodelete".to_string(),
        policy: PolicySettings {
            default_expiration_days: 3,
            expiration_tag: "days".to_string(),
            pinned_tag: "pinned".to_string(),
        },
    }
}

/// A mutating call observed by [`MockClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetContext(String),
    DeleteResourceGroup(String),
    DeleteResource(String),
}

/// Cloud client that serves canned metadata, records every mutating call,
/// and fails on request.
#[derive(Default)]
pub struct MockClient {
    pub accounts: HashMap<String, AccountInventory>,
    pub active: Option<AccountContext>,
    pub calls: Vec<Call>,
    pub inaccessible_accounts: HashSet<String>,
    pub failing_fetches: HashSet<String>,
    pub failing_details: HashSet<String>,
    pub failing_deletes: HashSet<String>,
}

impl MockClient {
    pub fn with_account(
        mut self,
        account: &str,
        resource_groups: Vec<ResourceGroupMetadata>,
        resources: Vec<ResourceMetadata>,
    ) -> Self {
        self.accounts.insert(
            account.to_string(),
            AccountInventory {
                resource_groups,
                resources,
            },
        );
        self
    }

    pub fn deletions(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::SetContext(_)))
            .collect()
    }

    fn account(&self, context: &AccountContext) -> Result<&AccountInventory, ClientError> {
        if self.failing_fetches.contains(context.account_id()) {
            return Err(ClientError::FetchFailed {
                account: context.to_string(),
                message: "503 Service Unavailable".to_string(),
            });
        }
        self.accounts
            .get(context.account_id())
            .ok_or_else(|| ClientError::FetchFailed {
                account: context.to_string(),
                message: "unknown account".to_string(),
            })
    }
}

impl CloudClient for MockClient {
    fn active_context(&self) -> Option<&AccountContext> {
        self.active.as_ref()
    }

    fn set_context(&mut self, context: &AccountContext) -> Result<(), ClientError> {
        self.calls
            .push(Call::SetContext(context.account_id().to_string()));
        if self.inaccessible_accounts.contains(context.account_id()) {
            return Err(ClientError::ContextUnavailable {
                account: context.to_string(),
                message: "AuthorizationFailed".to_string(),
            });
        }
        self.active = Some(context.clone());
        Ok(())
    }

    fn fetch_resource_groups(
        &self,
        context: &AccountContext,
    ) -> Result<Vec<ResourceGroupMetadata>, ClientError> {
        Ok(self.account(context)?.resource_groups.clone())
    }

    fn fetch_resources_by_tag(
        &self,
        context: &AccountContext,
        tag_name: &str,
        tag_value: &str,
    ) -> Result<Vec<String>, ClientError> {
        Ok(self
            .account(context)?
            .resources
            .iter()
            .filter(|r| r.tags.get(tag_name).is_some_and(|v| v == tag_value))
            .map(|r| r.id.clone())
            .collect())
    }

    fn fetch_resource_detail(
        &self,
        context: &AccountContext,
        id: &str,
    ) -> Result<ResourceMetadata, ClientError> {
        if self.failing_details.contains(id) {
            return Err(ClientError::NotFound { id: id.to_string() });
        }
        self.account(context)?
            .resources
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound { id: id.to_string() })
    }

    fn delete_resource_group(
        &mut self,
        _context: &AccountContext,
        name: &str,
    ) -> Result<(), ClientError> {
        self.calls.push(Call::DeleteResourceGroup(name.to_string()));
        if self.failing_deletes.contains(name) {
            return Err(ClientError::DeleteFailed {
                id: name.to_string(),
                message: "ScopeLocked".to_string(),
            });
        }
        Ok(())
    }

    fn delete_resource(&mut self, _context: &AccountContext, id: &str) -> Result<(), ClientError> {
        self.calls.push(Call::DeleteResource(id.to_string()));
        if self.failing_deletes.contains(id) {
            return Err(ClientError::DeleteFailed {
                id: id.to_string(),
                message: "Conflict".to_string(),
            });
        }
        Ok(())
    }
}
