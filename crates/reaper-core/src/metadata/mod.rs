mod types;

pub use types::{
    AccountContext, AccountMetadata, EntityKind, ResourceGroupMetadata, ResourceMetadata, Tags,
    parse_timestamp,
};
