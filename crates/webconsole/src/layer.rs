//! Bridge from `tracing` events into the console overlay.
//!
//! This substitutes for the host's native logging facility: events rendered
//! by this layer land in the overlay panel as `[LEVEL] target: message`
//! lines, colored by severity.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use console::Console;
use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Crates whose events never enter the overlay, so the bridge cannot feed
/// its own output back into itself.
const OWN_CRATES: &[&str] = &["common", "console", "panel", "webconsole"];

/// A tracing layer that renders events through a shared console facade.
#[derive(Clone)]
pub struct ConsoleLayer {
    console: Arc<Mutex<Console>>,
}

impl ConsoleLayer {
    pub fn new(console: Arc<Mutex<Console>>) -> Self {
        Self { console }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if is_own_target(target) {
            return;
        }

        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        let level = *metadata.level();
        let line = format!("[{}] {}: {}", level_str(&level), target, message);

        // A contended console drops the event; blocking here could deadlock
        // a host that logs while holding the console.
        if let Some(mut console) = self.console.try_lock() {
            let color = match level {
                Level::ERROR => Some(console.palette().error),
                Level::WARN => Some(console.palette().warn),
                _ => None,
            };
            console.print(line, color);
        }
    }
}

fn is_own_target(target: &str) -> bool {
    OWN_CRATES.iter().any(|krate| {
        target
            .strip_prefix(krate)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// Visitor that extracts the message field from a tracing event.
struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.0, "{:?}", value);
        } else {
            if !self.0.is_empty() {
                self.0.push_str(", ");
            }
            let _ = write!(self.0, "{}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        } else {
            if !self.0.is_empty() {
                self.0.push_str(", ");
            }
            let _ = write!(self.0, "{}={}", field.name(), value);
        }
    }
}

fn level_str(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}
