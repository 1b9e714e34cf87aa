// Configuration definitions, functions and tests
//

use serde::Deserialize;

use crate::components::theme::themes::Theme;
use crate::error::ThemeResult;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "dark-mode-toggle";

/// Everything a page may override when mounting the toggle.
///
/// Every field is optional in the JSON form, so `{}` is a valid config.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the persisted entry in local storage.
    pub storage_key: String,
    /// Attribute set on the document root, matched by CSS selectors.
    pub attribute: String,
    /// Id of the toggle control.
    pub toggle_id: String,
    pub default_theme: Theme,
    pub log_level: LogLevel,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            attribute: DEFAULT_ATTRIBUTE.into(),
            toggle_id: DEFAULT_TOGGLE_ID.into(),
            default_theme: Theme::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
