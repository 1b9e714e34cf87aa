// Button in the right corner with absolute position, renders its own glyph
pub struct ThemeToggle {
    controller: ThemeController<RenderedToggle, LocalThemeStore>,
    glyph: Glyph,
}

pub enum ThemeToggleMsg {
    ToggleTheme,
    GlyphChanged(Glyph),
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub config: ThemeConfig,
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ThemeToggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;

        let surface = RenderedToggle::new(
            config.attribute.as_str(),
            ctx.link().callback(Self::Message::GlyphChanged),
        );
        let store = LocalThemeStore::open(config.storage_key.as_str());

        let mut controller =
            ThemeController::new(surface, store).with_default(config.default_theme);
        let theme = controller.initialize();

        Self {
            controller,
            glyph: theme.glyph(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(move |_| Self::Message::ToggleTheme);

        let toggle_style = css!(
            "
                user-select: none;
                position: absolute; right: 15px; top: 15px;
                height: 2em; width: 2em;
                border: none;
                border-radius: 100%;
                background: transparent;
                font-size: 1.25em;
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }
            "
        );

        html! {
            <button id={ ctx.props().config.toggle_id.clone() } {onclick} class={ toggle_style }>
                { self.glyph.to_string() }
            </button>
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // attribute and storage key are owned by the controller, remount on any config change
        if ctx.props().config != old_props.config {
            *self = <Self as Component>::create(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToggleTheme => {
                // rerender happens once the surface reports the new glyph
                self.controller.toggle();
                false
            }
            Self::Message::GlyphChanged(glyph) => {
                let changed = self.glyph != glyph;
                self.glyph = glyph;
                changed
            }
        }
    }
}

/// Surface for a toggle rendered by yew: the glyph goes back to the
/// component instead of into the DOM directly.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct RenderedToggle {
    root: Option<RootAttribute>,
    #[derivative(Debug = "ignore")]
    glyph_cb: Callback<Glyph>,
}

impl RenderedToggle {
    pub fn new(attribute: &str, glyph_cb: Callback<Glyph>) -> Self {
        let root = match RootAttribute::new(&gloo_utils::document(), attribute) {
            Ok(root) => Some(root),
            Err(e) => {
                tracing::error!("{}, theme attribute will not be set", e);
                None
            }
        };

        Self { root, glyph_cb }
    }
}

impl ThemeSurface for RenderedToggle {
    fn theme_attribute(&self) -> Option<String> {
        self.root.as_ref().and_then(RootAttribute::get)
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        if let Some(root) = &self.root {
            root.set(theme);
        }
    }

    fn show_glyph(&mut self, glyph: Glyph) {
        self.glyph_cb.emit(glyph);
    }
}

use super::controller::imports::*;
use super::document::RootAttribute;
use super::storage::LocalThemeStore;
use super::themes::{Glyph, Theme};
use crate::components::imports::*;
use crate::configuration::ThemeConfig;
