//! Configuration storage port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{AppConfig, ConfigError};

/// Port for loading and persisting tool configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration.
    /// A store that does not exist yet yields an empty config, not an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the given configuration, creating the store if needed
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing store
    fn path(&self) -> PathBuf;

    /// Create the store prefilled with default values.
    /// Fails when a store is already present.
    async fn init(&self) -> Result<(), ConfigError>;
}
