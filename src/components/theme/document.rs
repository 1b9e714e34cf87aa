/// Theme attribute on `<html>`.
#[derive(Clone, Debug)]
pub struct RootAttribute {
    root: Element,
    name: String,
}

impl RootAttribute {
    pub fn new(document: &Document, name: impl Into<String>) -> ThemeResult<Self> {
        let root = document
            .document_element()
            .ok_or(ThemeError::NoRootElement)?;

        Ok(Self {
            root,
            name: name.into(),
        })
    }

    pub fn get(&self) -> Option<String> {
        self.root.get_attribute(&self.name)
    }

    pub fn set(&self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(&self.name, &theme.to_string()) {
            tracing::error!("failed to set {} on root element: {:?}", self.name, e);
        }
    }
}

/// Surface over markup the page already rendered: the root element and an
/// existing toggle control found by id.
#[derive(Clone, Debug)]
pub struct DocumentSurface {
    root: RootAttribute,
    toggle: Element,
}

impl DocumentSurface {
    pub fn new(document: &Document, config: &ThemeConfig) -> ThemeResult<Self> {
        let root = RootAttribute::new(document, config.attribute.as_str())?;
        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| ThemeError::ToggleMissing(config.toggle_id.clone()))?;

        Ok(Self { root, toggle })
    }

    pub fn toggle(&self) -> &Element {
        &self.toggle
    }
}

impl ThemeSurface for DocumentSurface {
    fn theme_attribute(&self) -> Option<String> {
        self.root.get()
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        self.root.set(theme);
    }

    fn show_glyph(&mut self, glyph: Glyph) {
        self.toggle.set_text_content(Some(&glyph.to_string()));
    }
}

use super::controller::ThemeSurface;
use super::themes::{Glyph, Theme};
use crate::configuration::ThemeConfig;
use crate::error::{ThemeError, ThemeResult};
use web_sys::{Document, Element};
