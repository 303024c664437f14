//! Deferred rendering buffer.
//!
//! Entries issued before a surface exists queue in order and replay on
//! attach. Once a surface is attached, entries render immediately.

use crate::surface::RenderSurface;
use common::Color;
use std::collections::VecDeque;

/// One renderable console line.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub text: String,
    /// `None` renders in the default text color.
    pub color: Option<Color>,
}

/// FIFO buffer in front of an optional render surface.
pub struct RenderBuffer {
    pending: VecDeque<LogEntry>,
    surface: Option<Box<dyn RenderSurface>>,
    default_color: Color,
}

impl RenderBuffer {
    pub fn new(default_color: Color) -> Self {
        Self {
            pending: VecDeque::new(),
            surface: None,
            default_color,
        }
    }

    /// Whether a surface is attached and entries render immediately.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Append a line, buffering it when no surface is attached.
    pub fn print(&mut self, text: impl Into<String>, color: Option<Color>) {
        let entry = LogEntry { text: text.into(), color };
        let default_color = self.default_color;
        match self.surface.as_mut() {
            Some(surface) => {
                surface.append(&entry.text, entry.color.unwrap_or(default_color));
                surface.scroll_to_bottom();
            }
            None => self.pending.push_back(entry),
        }
    }

    /// Attach a surface and replay every pending entry in issue order.
    pub fn attach(&mut self, surface: Box<dyn RenderSurface>) {
        self.surface = Some(surface);
        while let Some(entry) = self.pending.pop_front() {
            self.print(entry.text, entry.color);
        }
    }

    /// Detach the surface, returning the buffer to deferred mode.
    pub fn detach(&mut self) -> Option<Box<dyn RenderSurface>> {
        self.surface.take()
    }

    /// Discard pending entries, or wipe the surface when attached.
    pub fn clear(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => surface.clear_all(),
            None => self.pending.clear(),
        }
    }
}
