pub mod components;
pub mod configuration;
pub mod error;
pub mod startup;
pub mod telemetry;

pub use components::theme::prelude::*;
pub use configuration::ThemeConfig;
pub use error::{ThemeError, ThemeResult};
pub use startup::{attach, attach_with_config};
