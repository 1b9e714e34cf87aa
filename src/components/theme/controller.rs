pub mod imports {
    pub use super::{ThemeController, ThemeStore, ThemeSurface};
}

/// Where the theme becomes visible: the root attribute CSS keys off, and the
/// toggle control's glyph.
pub trait ThemeSurface {
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&mut self, theme: Theme);
    fn show_glyph(&mut self, glyph: Glyph);
}

/// Durable key-value entry holding the last chosen theme.
pub trait ThemeStore {
    fn load(&self) -> ThemeResult<Option<String>>;
    fn save(&mut self, theme: Theme) -> ThemeResult<()>;
}

pub struct ThemeController<S, P> {
    surface: S,
    store: P,
    theme: Theme,
    default_theme: Theme,
}

impl<S, P> ThemeController<S, P>
where
    S: ThemeSurface,
    P: ThemeStore,
{
    pub fn new(surface: S, store: P) -> Self {
        Self {
            surface,
            store,
            theme: Theme::default(),
            default_theme: Theme::default(),
        }
    }

    pub fn with_default(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolves the persisted theme and applies it.
    ///
    /// A missing or unreadable entry falls back to the default theme. The
    /// default is written back unless the store itself is failing, in which
    /// case the theme lives for this session only.
    pub fn initialize(&mut self) -> Theme {
        let theme = match self.store.load() {
            Ok(Some(remembered)) => match Theme::try_from(remembered.as_str()) {
                Ok(theme) => theme,
                Err(e) => {
                    tracing::warn!("{}, falling back to {}", e, self.default_theme);
                    self.remember(self.default_theme);
                    self.default_theme
                }
            },
            Ok(None) => {
                self.remember(self.default_theme);
                self.default_theme
            }
            Err(e) => {
                tracing::warn!("{}, theme will not persist", e);
                self.default_theme
            }
        };

        self.apply(theme);
        tracing::debug!(%theme, "theme initialized");
        theme
    }

    /// Flips the theme currently shown on the surface.
    pub fn toggle(&mut self) -> Theme {
        let current = self
            .surface
            .theme_attribute()
            .and_then(|value| Theme::try_from(value.as_str()).ok())
            .unwrap_or(self.theme);
        let theme = current.toggled();

        self.surface.set_theme_attribute(theme);
        self.remember(theme);
        self.update_glyph(theme);
        self.theme = theme;

        tracing::debug!(from = %current, to = %theme, "theme toggled");
        theme
    }

    pub fn update_glyph(&mut self, theme: Theme) {
        self.surface.show_glyph(theme.glyph());
    }

    fn apply(&mut self, theme: Theme) {
        self.surface.set_theme_attribute(theme);
        self.update_glyph(theme);
        self.theme = theme;
    }

    fn remember(&mut self, theme: Theme) {
        if let Err(e) = self.store.save(theme) {
            tracing::warn!("failed to remember {} theme: {}", theme, e);
        }
    }
}

use super::themes::{Glyph, Theme};
use crate::error::ThemeResult;
