// Tracing definitions
//
// Events are forwarded to the browser console, one line per event.

use std::fmt::{Debug, Write};

use tracing::{
    field::{Field, Visit},
    subscriber::set_global_default,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    filter,
    layer::{Context, Layer, SubscriberExt},
    Registry,
};

static CRATE_NAME: &str = "theme_toggle";

pub struct TracingSubscriber {
    crate_level: Level,
    default_level: Level,
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self {
            crate_level: Level::INFO,
            default_level: Level::WARN,
        }
    }
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crate_level(mut self, value: impl Into<Level>) -> Self {
        self.crate_level = value.into();
        self
    }

    /// Installs the console subscriber unless one is already set.
    ///
    /// Mounting twice on the same page is allowed, so an existing global
    /// subscriber is kept.
    pub fn try_set_global_default(self) -> bool {
        set_global_default(self.build()).is_ok()
    }

    fn build(self) -> impl Subscriber + Sync + Send {
        let target_filter = filter::Targets::new()
            .with_default(self.default_level)
            .with_target(CRATE_NAME, self.crate_level);

        Registry::default().with(ConsoleLayer.with_filter(target_filter))
    }
}

pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = ConsoleLine::default();
        event.record(&mut line);

        let metadata = event.metadata();
        let line = format!("{}: {}{}", metadata.target(), line.message, line.fields);

        match *metadata.level() {
            Level::ERROR => gloo_console::error!(line),
            Level::WARN => gloo_console::warn!(line),
            Level::INFO => gloo_console::info!(line),
            _ => gloo_console::debug!(line),
        }
    }
}

#[derive(Default)]
struct ConsoleLine {
    message: String,
    fields: String,
}

impl Visit for ConsoleLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
