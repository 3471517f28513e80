//! Boundary to the cloud control plane.
//!
//! Authentication, transport, and retry policy live behind [`CloudClient`].

mod errors;
mod traits;

pub use errors::ClientError;
pub use traits::CloudClient;
