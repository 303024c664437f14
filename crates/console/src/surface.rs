//! Output surface contract.

use common::Color;
use parking_lot::Mutex;
use std::sync::Arc;

/// Where rendered console lines go.
///
/// The console core depends only on this contract; panels, test recorders
/// and embedder widgets all plug in behind it.
pub trait RenderSurface: Send {
    /// Append one line in the given color.
    fn append(&mut self, text: &str, color: Color);

    /// Remove all rendered lines.
    fn clear_all(&mut self);

    /// Scroll so the most recent line is visible.
    fn scroll_to_bottom(&mut self);
}

/// Forwarding through a shared handle lets the embedder keep one side while
/// the console owns the other.
impl<S: RenderSurface> RenderSurface for Arc<Mutex<S>> {
    fn append(&mut self, text: &str, color: Color) {
        self.lock().append(text, color);
    }

    fn clear_all(&mut self) {
        self.lock().clear_all();
    }

    fn scroll_to_bottom(&mut self) {
        self.lock().scroll_to_bottom();
    }
}

/// In-memory surface for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemorySurface {
    lines: Vec<(String, Color)>,
    scroll_requests: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a surface behind a shared handle.
    pub fn shared() -> Arc<Mutex<MemorySurface>> {
        Arc::new(Mutex::new(MemorySurface::new()))
    }

    pub fn lines(&self) -> &[(String, Color)] {
        &self.lines
    }

    /// Line texts without colors.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(|(text, _)| text.clone()).collect()
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }
}

impl RenderSurface for MemorySurface {
    fn append(&mut self, text: &str, color: Color) {
        self.lines.push((text.to_string(), color));
    }

    fn clear_all(&mut self) {
        self.lines.clear();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_requests += 1;
    }
}
