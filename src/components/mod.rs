pub mod imports;

pub mod theme;

pub use theme::toggle::ThemeToggle;
