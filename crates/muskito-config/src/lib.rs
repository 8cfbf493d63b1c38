//! Muskito configuration.
//!
//! TOML settings for the model, the session, and logging. Every section
//! has defaults, so a missing or partial file works out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LoggingConfig, ModelConfig, MuskitoConfig, SessionConfig};

use std::path::Path;

use muskito_common::ConfigError;

/// Load and validate config from the platform default path.
pub fn load_config() -> Result<MuskitoConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<MuskitoConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
