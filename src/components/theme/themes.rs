#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The glyph points at the theme a click switches to.
    pub fn glyph(self) -> Glyph {
        match self {
            Self::Light => Glyph::Moon,
            Self::Dark => Glyph::Sun,
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        [Self::Light, Self::Dark]
            .into_iter()
            .find(|theme| theme.to_string() == value)
            .ok_or_else(|| ThemeError::UnknownTheme(value.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Glyph {
    #[display(fmt = "\u{1F319}")]
    Moon,
    #[display(fmt = "\u{2600}\u{FE0F}")]
    Sun,
}


use crate::error::ThemeError;
use derive_more::Display;
use serde::Deserialize;
