//! Call-stack capture for trace and error output.
//!
//! Frames come from the runtime's backtrace facility. The rendered backtrace
//! text is parsed into frames; anything that fails to parse is dropped rather
//! than surfaced, so capture never fails.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// Upper bound on captured frames.
pub const MAX_FRAMES: usize = 32;

/// One captured call frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Demangled function path, `"anonymous"` when the symbol is missing.
    pub name: String,
    /// Observed argument values. Native captures carry none.
    pub params: Vec<String>,
}

impl CallFrame {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), params: Vec::new() }
    }

    pub fn with_params(name: impl Into<String>, params: Vec<String>) -> Self {
        Self { name: name.into(), params }
    }

    /// Render as `name('a', 'b')`, or `name()` without params.
    pub fn signature(&self) -> String {
        if self.params.is_empty() {
            format!("{}()", self.name)
        } else {
            format!("{}('{}')", self.name, self.params.join("', '"))
        }
    }
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Capture the current call stack, skipping `skip` frames closest to the
/// caller. Returns an empty sequence when backtraces are unavailable.
pub fn capture(skip: usize) -> Vec<CallFrame> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }

    let mut frames = parse_backtrace(&backtrace.to_string());

    // Drop everything up to and including this function so the caller's
    // frame comes first, then honor the requested skip.
    if let Some(own) = frames.iter().position(|f| f.name.ends_with("stack::capture")) {
        frames.drain(..=own);
    }
    let skip = skip.min(frames.len());
    frames.drain(..skip);

    frames.truncate(MAX_FRAMES);
    frames
}

/// Parse the display form of a backtrace: numbered symbol lines, each
/// optionally followed by an indented `at file:line:col` line.
fn parse_backtrace(rendered: &str) -> Vec<CallFrame> {
    let mut frames = Vec::new();

    for line in rendered.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with("at ") {
            continue;
        }
        if let Some((index, symbol)) = line.split_once(": ") {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                frames.push(CallFrame::new(clean_symbol(symbol)));
            }
        }
    }

    frames
}

/// Strip the trailing `::h<16 hex>` hash; empty symbols become "anonymous".
fn clean_symbol(raw: &str) -> String {
    let raw = raw.trim();
    let name = match raw.rfind("::h") {
        Some(pos)
            if raw.len() - pos == 19 && raw[pos + 3..].chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            &raw[..pos]
        }
        _ => raw,
    };

    if name.is_empty() {
        "anonymous".to_string()
    } else {
        name.to_string()
    }
}
