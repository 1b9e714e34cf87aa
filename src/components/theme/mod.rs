pub mod controller;
pub mod document;
pub mod storage;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::controller::{ThemeController, ThemeStore, ThemeSurface};
    pub use super::document::{DocumentSurface, RootAttribute};
    pub use super::storage::LocalThemeStore;
    pub use super::themes::{Glyph, Theme};
    pub use super::toggle::ThemeToggle;
}
