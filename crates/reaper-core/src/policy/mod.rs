mod errors;
mod handler;
mod types;

pub use errors::PolicyError;
pub use handler::{evaluate, is_truthy};
pub use types::{ExpirationVerdict, PolicySettings};
