/// Theme entry in `localStorage`.
///
/// Values are stored as the bare theme name rather than JSON, matching what
/// CSS-only pages and older scripts wrote under the same key.
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: String,
    available: bool,
}

impl LocalThemeStore {
    pub fn open(key: impl Into<String>) -> Self {
        // LocalStorage::raw panics when storage is disabled, probe first
        let available = matches!(gloo_utils::window().local_storage(), Ok(Some(_)));
        if !available {
            tracing::warn!("local storage is not available, theme will not persist");
        }

        Self {
            key: key.into(),
            available,
        }
    }

    fn raw(&self) -> ThemeResult<web_sys::Storage> {
        if self.available {
            Ok(LocalStorage::raw())
        } else {
            Err(ThemeError::StorageUnavailable)
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> ThemeResult<Option<String>> {
        self.raw()?
            .get_item(&self.key)
            .map_err(ThemeError::storage)
    }

    fn save(&mut self, theme: Theme) -> ThemeResult<()> {
        self.raw()?
            .set_item(&self.key, &theme.to_string())
            .map_err(ThemeError::storage)
    }
}

use super::controller::ThemeStore;
use super::themes::Theme;
use crate::error::{ThemeError, ThemeResult};
use gloo_storage::{LocalStorage, Storage};
