//! Config subcommand handlers

use std::str::FromStr;

use crate::application::ports::ConfigStore;
use crate::domain::{AppConfig, ConfigError};

use super::args::ConfigAction;
use super::presenter::Presenter;

/// The settable configuration fields.
/// Key names, validation, and field access all hang off this enum, so
/// adding a field means extending it in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    ApiKey,
    Model,
    Languages,
}

const ALL_KEYS: [ConfigKey; 3] = [ConfigKey::ApiKey, ConfigKey::Model, ConfigKey::Languages];

impl ConfigKey {
    fn name(self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "api_key",
            ConfigKey::Model => "model",
            ConfigKey::Languages => "languages",
        }
    }

    /// Check a value before it is written
    fn validate(self, value: &str) -> Result<(), ConfigError> {
        match self {
            // Any string could be a key; the API rejects bad ones
            ConfigKey::ApiKey => Ok(()),
            ConfigKey::Model => {
                if value.trim().is_empty() {
                    return Err(self.invalid("Value must not be empty"));
                }
                Ok(())
            }
            ConfigKey::Languages => {
                let has_code = value.split(',').any(|code| !code.trim().is_empty());
                if !has_code {
                    return Err(
                        self.invalid("Value must be a comma-separated list of language codes")
                    );
                }
                Ok(())
            }
        }
    }

    fn write(self, config: &mut AppConfig, value: &str) {
        let slot = match self {
            ConfigKey::ApiKey => &mut config.api_key,
            ConfigKey::Model => &mut config.model,
            ConfigKey::Languages => &mut config.languages,
        };
        *slot = Some(value.to_string());
    }

    /// Stored value as shown to the user; the API key comes back masked
    fn read(self, config: &AppConfig) -> Option<String> {
        match self {
            ConfigKey::ApiKey => config.api_key.as_deref().map(mask_api_key),
            ConfigKey::Model => config.model.clone(),
            ConfigKey::Languages => config.languages.clone(),
        }
    }

    fn invalid(self, message: &str) -> ConfigError {
        ConfigError::ValidationError {
            key: self.name().to_string(),
            message: message.to_string(),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KEYS
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ConfigError::ValidationError {
                key: s.to_string(),
                message: format!(
                    "Unknown key. Valid keys: {}",
                    ALL_KEYS.map(ConfigKey::name).join(", ")
                ),
            })
    }
}

/// Dispatch a config subcommand against the given store
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let key: ConfigKey = key.parse()?;
    key.validate(value)?;

    let mut config = store.load().await?;
    key.write(&mut config, value);
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key.name(), value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    let key: ConfigKey = key.parse()?;
    let config = store.load().await?;

    match key.read(&config) {
        Some(value) => presenter.output(&value),
        None => presenter.output("(not set)"),
    }
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in ALL_KEYS {
        let value = key.read(&config);
        presenter.key_value(key.name(), value.as_deref().unwrap_or("(not set)"));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Mask an API key for display, keeping the first and last 4 characters
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        "*".repeat(key.len())
    } else {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    }
}
