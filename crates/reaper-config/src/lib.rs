//! Configuration for ttl-reaper.
//!
//! Handles TOML config types, layered loading (user, project, explicit file,
//! command-line overrides), and validation.

mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{load_config, load_config_from, load_layer};
pub use types::{
    ConfigLayer, DEFAULT_EXPIRATION_DAYS, DEFAULT_EXPIRATION_TAG, DEFAULT_MARKER_TAG,
    DEFAULT_PINNED_TAG, PolicyConfig, PolicyLayer, ReaperConfig, SelectionConfig, SelectionLayer,
};
pub use validation::validate_config;
