//! Tool configuration value object

use serde::{Deserialize, Serialize};

/// Default Gemini model for script generation
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default preferred transcript languages (comma-separated codes)
pub const DEFAULT_LANGUAGES: &str = "en";

/// Layered tool configuration.
/// Every field is optional so partial sources (file, environment, flags)
/// can be merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub languages: Option<String>,
}

impl AppConfig {
    /// Baseline values, as written by `config init`
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            languages: Some(DEFAULT_LANGUAGES.to_string()),
        }
    }

    /// Config with nothing set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Layer `other` over this config; fields set in `other` win
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            languages: other.languages.or(self.languages),
        }
    }

    /// Configured model name, or the default when unset
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Preferred transcript languages as an ordered list of codes.
    /// Falls back to the default list when unset or when the value holds no
    /// usable code.
    pub fn languages_or_default(&self) -> Vec<String> {
        let raw = self.languages.as_deref().unwrap_or(DEFAULT_LANGUAGES);
        let codes: Vec<String> = raw
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.is_empty() {
            vec![DEFAULT_LANGUAGES.to_string()]
        } else {
            codes
        }
    }
}
