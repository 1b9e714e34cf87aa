#[derive(thiserror::Error, Debug)]
pub enum ThemeError {
    #[error("Unknown theme {0:?}")]
    UnknownTheme(String),

    #[error("Document is not available")]
    NoDocument,

    #[error("Document has no root element")]
    NoRootElement,

    #[error("Toggle control #{0} is missing")]
    ToggleMissing(String),

    #[error("Local storage is not available")]
    StorageUnavailable,

    #[error("Local storage rejected the operation: {0}")]
    Storage(String),

    #[error("Config is rejected")]
    Config(#[from] serde_json::Error),
}

impl ThemeError {
    pub(crate) fn storage(value: JsValue) -> Self {
        Self::Storage(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<ThemeError> for JsValue {
    fn from(e: ThemeError) -> Self {
        let message = match &e {
            ThemeError::Config(source) => format!("{}: {}", e, source),
            _ => e.to_string(),
        };
        JsValue::from_str(&message)
    }
}

pub type ThemeResult<T> = Result<T, ThemeError>;

use wasm_bindgen::JsValue;
