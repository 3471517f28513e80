use crate::client::errors::ClientError;
use crate::metadata::{AccountContext, ResourceGroupMetadata, ResourceMetadata};

/// Trait defining the interface to a cloud control plane.
///
/// Implementations own authentication and transport. Deletion methods are
/// only ever called for real deletions; dry runs never reach them.
pub trait CloudClient {
    /// The account context currently active on this client, if any.
    fn active_context(&self) -> Option<&AccountContext>;

    /// Switch the client to `context`.
    fn set_context(&mut self, context: &AccountContext) -> Result<(), ClientError>;

    /// All resource groups in the account, with tags and creation time.
    fn fetch_resource_groups(
        &self,
        context: &AccountContext,
    ) -> Result<Vec<ResourceGroupMetadata>, ClientError>;

    /// Identities of resources carrying `tag_name == tag_value`.
    fn fetch_resources_by_tag(
        &self,
        context: &AccountContext,
        tag_name: &str,
        tag_value: &str,
    ) -> Result<Vec<String>, ClientError>;

    /// Detail (tags, creation time, owning group) of a single resource.
    fn fetch_resource_detail(
        &self,
        context: &AccountContext,
        id: &str,
    ) -> Result<ResourceMetadata, ClientError>;

    fn delete_resource_group(
        &mut self,
        context: &AccountContext,
        name: &str,
    ) -> Result<(), ClientError>;

    fn delete_resource(&mut self, context: &AccountContext, id: &str) -> Result<(), ClientError>;
}
