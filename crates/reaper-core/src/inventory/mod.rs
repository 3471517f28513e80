//! File-backed [`CloudClient`](crate::client::CloudClient) over a JSON
//! inventory snapshot.

mod errors;
mod handler;
mod types;

pub use errors::InventoryError;
pub use handler::InventoryClient;
pub use types::{AccountInventory, Inventory};
