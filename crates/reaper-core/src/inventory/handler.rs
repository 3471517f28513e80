use std::path::Path;

use tracing::{debug, info};

use super::errors::InventoryError;
use super::types::{AccountInventory, Inventory};
use crate::client::{ClientError, CloudClient};
use crate::metadata::{AccountContext, ResourceGroupMetadata, ResourceMetadata};

/// Cloud client backed by an in-memory [`Inventory`].
///
/// Deleting a resource group also removes the resources it owns. Deleting a
/// resource that is already gone is a no-op.
#[derive(Debug, Clone, Default)]
pub struct InventoryClient {
    inventory: Inventory,
    active: Option<AccountContext>,
}

impl InventoryClient {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            active: None,
        }
    }

    /// Load an inventory from a JSON file.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| InventoryError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let inventory: Inventory =
            serde_json::from_str(&content).map_err(|e| InventoryError::ParseFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(
            event = "core.inventory.load_completed",
            path = %path.display(),
            accounts = inventory.accounts.len()
        );

        Ok(Self::new(inventory))
    }

    /// Write the current inventory back to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), InventoryError> {
        let json = serde_json::to_string_pretty(&self.inventory).map_err(|e| {
            InventoryError::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        std::fs::write(path, json).map_err(|e| InventoryError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(event = "core.inventory.save_completed", path = %path.display());
        Ok(())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn account(&self, context: &AccountContext) -> Result<&AccountInventory, ClientError> {
        self.inventory
            .accounts
            .get(context.account_id())
            .ok_or_else(|| ClientError::FetchFailed {
                account: context.to_string(),
                message: "account not present in inventory".to_string(),
            })
    }

    fn account_mut(
        &mut self,
        context: &AccountContext,
    ) -> Result<&mut AccountInventory, ClientError> {
        self.inventory
            .accounts
            .get_mut(context.account_id())
            .ok_or_else(|| ClientError::FetchFailed {
                account: context.to_string(),
                message: "account not present in inventory".to_string(),
            })
    }
}

impl CloudClient for InventoryClient {
    fn active_context(&self) -> Option<&AccountContext> {
        self.active.as_ref()
    }

    fn set_context(&mut self, context: &AccountContext) -> Result<(), ClientError> {
        if !self.inventory.accounts.contains_key(context.account_id()) {
            return Err(ClientError::ContextUnavailable {
                account: context.to_string(),
                message: "account not present in inventory".to_string(),
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
        self.account(context)?
            .resources
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound { id: id.to_string() })
    }

    fn delete_resource_group(
        &mut self,
        context: &AccountContext,
        name: &str,
    ) -> Result<(), ClientError> {
        let account = self.account_mut(context)?;
        let before = account.resource_groups.len();
        account.resource_groups.retain(|g| g.name != name);
        if account.resource_groups.len() == before {
            return Err(ClientError::DeleteFailed {
                id: name.to_string(),
                message: "resource group not found".to_string(),
            });
        }

        let owned = account.resources.len();
        account.resources.retain(|r| r.resource_group_name != name);
        debug!(
            event = "core.inventory.group_removed",
            account = %context,
            name = name,
            cascaded = owned - account.resources.len()
        );
        Ok(())
    }

    fn delete_resource(&mut self, context: &AccountContext, id: &str) -> Result<(), ClientError> {
        let account = self.account_mut(context)?;
        account.resources.retain(|r| r.id != id);
        debug!(
            event = "core.inventory.resource_removed",
            account = %context,
            id = id
        );
        Ok(())
    }
}
