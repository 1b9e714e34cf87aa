//! Script mode: mounts the controller on a toggle control the page already
//! contains, the same way a plain `<script>` would.

/// Mounts with the default configuration.
#[wasm_bindgen]
pub fn attach() -> Result<(), JsValue> {
    start(ThemeConfig::default())
}

/// Mounts with a JSON configuration, see [`ThemeConfig`] for the fields.
#[wasm_bindgen]
pub fn attach_with_config(config: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config)?;
    start(config)
}

fn start(config: ThemeConfig) -> Result<(), JsValue> {
    TracingSubscriber::new()
        .crate_level(config.log_level)
        .try_set_global_default();

    let document = gloo_utils::window()
        .document()
        .ok_or(ThemeError::NoDocument)?;

    if document.ready_state() != "loading" {
        return settle(mount(&document, &config));
    }

    let target = document.clone();
    EventListener::once(&target, "DOMContentLoaded", move |_| {
        if let Err(e) = settle(mount(&document, &config)) {
            wasm_bindgen::throw_val(e);
        }
    })
    .forget();

    Ok(())
}

// Debug builds surface a missing control to the page, release builds only log it.
fn settle(mounted: ThemeResult<()>) -> Result<(), JsValue> {
    match mounted {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("theme toggle not attached: {}", e);
            if cfg!(debug_assertions) {
                Err(e.into())
            } else {
                Ok(())
            }
        }
    }
}

fn mount(document: &Document, config: &ThemeConfig) -> ThemeResult<()> {
    let surface = DocumentSurface::new(document, config)?;
    let toggle = surface.toggle().clone();
    let store = LocalThemeStore::open(config.storage_key.as_str());

    let controller = Rc::new(RefCell::new(
        ThemeController::new(surface, store).with_default(config.default_theme),
    ));
    let theme = controller.borrow_mut().initialize();

    tracing::info!(
        %theme,
        toggle = config.toggle_id.as_str(),
        "theme toggle attached"
    );

    // lives as long as the page
    EventListener::new(&toggle, "click", move |_| {
        controller.borrow_mut().toggle();
    })
    .forget();

    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::theme::prelude::*;
use crate::configuration::ThemeConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::telemetry::TracingSubscriber;
