//! The console facade: the complete logging API.

use crate::buffer::RenderBuffer;
use crate::format::{self, PART_DELIMITER};
use crate::labels::{CounterEntry, LabelRegistry, TimerEntry};
use crate::stack;
use crate::surface::RenderSurface;
use crate::value::{self, LogValue};
use common::Color;
use std::time::Instant;

/// Entry colors used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub warn: Color,
    pub error: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            warn: Color::rgb(0xa8, 0x70, 0x00),
            error: Color::rgb(0x91, 0x00, 0x00),
        }
    }
}

/// Indentation for stack frames under trace and error output.
const FRAME_INDENT: &str = "  ";

/// The console API: logging, counters, timers, traces and error reporting,
/// all rendered through a deferred buffer.
///
/// Every operation is total. Bad input degrades to a best-effort line; it
/// never surfaces an error to the caller.
pub struct Console {
    buffer: RenderBuffer,
    counters: LabelRegistry<CounterEntry>,
    timers: LabelRegistry<TimerEntry>,
    palette: Palette,
}

impl Console {
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            buffer: RenderBuffer::new(palette.text),
            counters: LabelRegistry::new(),
            timers: LabelRegistry::new(),
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Whether output renders immediately rather than buffering.
    pub fn is_active(&self) -> bool {
        self.buffer.is_ready()
    }

    /// Number of entries waiting for a surface.
    pub fn pending_len(&self) -> usize {
        self.buffer.pending_len()
    }

    /// Attach an output surface; buffered entries replay in order.
    pub fn activate(&mut self, surface: Box<dyn RenderSurface>) {
        self.buffer.attach(surface);
    }

    /// Detach the output surface and return to buffering.
    pub fn deactivate(&mut self) -> Option<Box<dyn RenderSurface>> {
        self.buffer.detach()
    }

    /// Append one line directly. Host integrations write through this.
    pub fn print(&mut self, text: impl Into<String>, color: Option<Color>) {
        self.buffer.print(text, color);
    }

    /// Log a message in the default color.
    pub fn log(&mut self, args: &[LogValue]) {
        let parts = format::prepare(args);
        self.print(parts.join(PART_DELIMITER), None);
    }

    /// Alias of [`log`](Self::log).
    pub fn info(&mut self, args: &[LogValue]) {
        self.log(args);
    }

    /// Alias of [`log`](Self::log).
    pub fn debug(&mut self, args: &[LogValue]) {
        self.log(args);
    }

    /// Alias of [`log`](Self::log).
    pub fn dir(&mut self, args: &[LogValue]) {
        self.log(args);
    }

    /// Alias of [`log`](Self::log).
    pub fn dirxml(&mut self, args: &[LogValue]) {
        self.log(args);
    }

    /// Log a message in the warning color.
    pub fn warn(&mut self, args: &[LogValue]) {
        let parts = format::prepare(args);
        let color = Some(self.palette.warn);
        self.print(parts.join(PART_DELIMITER), color);
    }

    /// Log an error followed by the call stack that raised it.
    pub fn error(&mut self, err: &LogValue) {
        let color = Some(self.palette.error);
        self.print(value::format(err), color);
        for frame in stack::capture(1) {
            self.print(format!("{}{}", FRAME_INDENT, frame.signature()), color);
        }
    }

    /// Log an assertion failure when the expression is false.
    pub fn assert(&mut self, expression: bool, object: &LogValue) {
        if expression {
            return;
        }
        let color = Some(self.palette.error);
        self.print(format!("Assertion failed: {}", value::format(object)), color);
        if let Some(frame) = stack::capture(1).into_iter().next() {
            self.print(format!("{}{}", FRAME_INDENT, frame.signature()), color);
        }
    }

    /// Log the current call stack.
    pub fn trace(&mut self) {
        self.print("trace:", None);
        for frame in stack::capture(1) {
            self.print(format!("{}{}", FRAME_INDENT, frame.signature()), None);
        }
    }

    /// Count invocations per label and log the running total.
    pub fn count(&mut self, label: &str) {
        let entry = self.counters.get_or_create(label, || CounterEntry::new(label));
        entry.count += 1;
        let line = format!("{}: {}", entry.label, entry.count);
        self.print(line, None);
    }

    /// Start (or restart) the timer for a label.
    pub fn time(&mut self, label: &str) {
        let entry = self.timers.get_or_create(label, || TimerEntry::new(label));
        entry.started = Instant::now();
    }

    /// Log the elapsed time for a label. Unknown labels are ignored; the
    /// timer keeps running.
    pub fn time_end(&mut self, label: &str) {
        if let Some(entry) = self.timers.find(label) {
            let line = format!("{}: {}ms", entry.label, entry.elapsed_millis());
            self.print(line, None);
        }
    }

    /// Discard pending output or wipe the surface. Counters and timers are
    /// unaffected.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Report an uncaught host error as `message at file:line`.
    ///
    /// Errors with no source location are dropped. Column and error object
    /// are accepted for hook compatibility and not rendered.
    pub fn report_uncaught(
        &mut self,
        message: &str,
        source: Option<&str>,
        line: u32,
        _column: u32,
        _error: Option<&LogValue>,
    ) {
        let source = match source {
            Some(s) if !s.is_empty() => s,
            _ => return,
        };
        let file = source.rsplit(['/', '\\']).next().unwrap_or(source);
        let color = Some(self.palette.error);
        self.print(format!("{} at {}:{}", message, file, line), color);
    }

    // Accepted for API compatibility; grouping and profiling do not render.

    pub fn group(&mut self, _args: &[LogValue]) {}

    pub fn group_collapsed(&mut self, _args: &[LogValue]) {}

    pub fn group_end(&mut self) {}

    pub fn profile(&mut self, _label: &str) {}

    pub fn profile_end(&mut self, _label: &str) {}

    pub fn time_stamp(&mut self, _label: &str) {}
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    fn active_console() -> (Console, Arc<Mutex<MemorySurface>>) {
        let shared = MemorySurface::shared();
        let mut console = Console::new();
        console.activate(Box::new(shared.clone()));
        (console, shared)
    }

    #[test]
    fn test_buffered_entries_replay_in_order() {
        let mut console = Console::new();
        console.log(&["first".into()]);
        console.warn(&["second".into()]);
        assert!(!console.is_active());
        assert_eq!(console.pending_len(), 2);

        let shared = MemorySurface::shared();
        console.activate(Box::new(shared.clone()));

        assert!(console.is_active());
        let lines = shared.lock().lines().to_vec();
        assert_eq!(lines[0], ("first".to_string(), Color::BLACK));
        assert_eq!(lines[1], ("second".to_string(), Color::rgb(0xa8, 0x70, 0x00)));
    }

    #[test]
    fn test_log_joins_formatted_parts() {
        let (mut console, shared) = active_console();
        console.log(&["a".into(), 1.into(), LogValue::Structured(json!({"k": 1}))]);
        assert_eq!(shared.lock().texts(), vec![r#"a, 1, {"k":1}"#]);
    }

    #[test]
    fn test_clear_discards_pending_but_keeps_counters() {
        let mut console = Console::new();
        console.count("x");
        console.log(&["noise".into()]);
        console.clear();
        assert_eq!(console.pending_len(), 0);

        console.count("x");
        let shared = MemorySurface::shared();
        console.activate(Box::new(shared.clone()));
        assert_eq!(shared.lock().texts(), vec!["x: 2"]);
    }

    #[test]
    fn test_clear_wipes_surface_when_active() {
        let (mut console, shared) = active_console();
        console.log(&["a".into()]);
        console.clear();
        console.clear();
        assert!(shared.lock().lines().is_empty());
    }

    #[test]
    fn test_count_is_monotonic_per_label() {
        let (mut console, shared) = active_console();
        console.count("a");
        console.count("b");
        console.count("a");
        assert_eq!(shared.lock().texts(), vec!["a: 1", "b: 1", "a: 2"]);
    }

    #[test]
    fn test_timer_lifecycle() {
        let (mut console, shared) = active_console();
        console.time_end("missing");
        assert!(shared.lock().texts().is_empty());

        console.time("t");
        console.time_end("t");
        console.time_end("t");
        let texts = shared.lock().texts();
        assert_eq!(texts.len(), 2);
        for text in &texts {
            assert!(text.starts_with("t: "));
            assert!(text.ends_with("ms"));
        }
    }

    #[test]
    fn test_error_prints_message_then_indented_frames() {
        let (mut console, shared) = active_console();
        console.error(&"boom".into());

        let lines = shared.lock().lines().to_vec();
        assert_eq!(lines[0], ("boom".to_string(), Color::rgb(0x91, 0x00, 0x00)));
        for (text, color) in &lines[1..] {
            assert!(text.starts_with("  "));
            assert_eq!(*color, Color::rgb(0x91, 0x00, 0x00));
        }
    }

    #[test]
    fn test_assert_fires_only_when_false() {
        let (mut console, shared) = active_console();
        console.assert(true, &"unseen".into());
        assert!(shared.lock().texts().is_empty());

        console.assert(false, &"seen".into());
        let texts = shared.lock().texts();
        assert_eq!(texts[0], "Assertion failed: seen");
    }

    #[test]
    fn test_trace_prints_header_then_frames() {
        let (mut console, shared) = active_console();
        console.trace();

        let texts = shared.lock().texts();
        assert_eq!(texts[0], "trace:");
        for text in &texts[1..] {
            assert!(text.starts_with("  "));
        }
    }

    #[test]
    fn test_uncaught_error_requires_source() {
        let (mut console, shared) = active_console();
        console.report_uncaught("boom", None, 1, 1, None);
        console.report_uncaught("boom", Some(""), 1, 1, None);
        assert!(shared.lock().texts().is_empty());

        console.report_uncaught("boom", Some("https://x.test/js/app.js"), 3, 7, None);
        assert_eq!(shared.lock().texts(), vec!["boom at app.js:3"]);
        assert_eq!(shared.lock().lines()[0].1, Color::rgb(0x91, 0x00, 0x00));
    }

    #[test]
    fn test_deactivate_returns_to_buffering() {
        let (mut console, shared) = active_console();
        assert!(console.deactivate().is_some());
        console.log(&["queued".into()]);
        assert_eq!(console.pending_len(), 1);
        assert!(shared.lock().lines().is_empty());
    }

    #[test]
    fn test_every_operation_is_total() {
        let mut console = Console::new();
        console.log(&[]);
        console.warn(&[LogValue::Float(f64::NAN)]);
        console.error(&LogValue::Null);
        console.assert(false, &LogValue::Other("weird".into()));
        console.trace();
        console.count("");
        console.time("");
        console.time_end("");
        console.time_end("never-started");
        console.group(&[]);
        console.group_collapsed(&[]);
        console.group_end();
        console.profile("p");
        console.profile_end("p");
        console.time_stamp("s");
        console.dir(&[LogValue::Bool(true)]);
        console.dirxml(&[]);
        console.info(&["i".into()]);
        console.debug(&["d".into()]);
        console.clear();
        console.report_uncaught("m", None, 0, 0, None);
    }
}
