//! Text panel: the reference render surface.
//!
//! The panel models the fixed overlay container: a column of colored lines
//! with a row-based viewport and a scroll offset. Scrolling to the bottom
//! pins the viewport to the most recent lines.

use crate::theme::PanelTheme;
use common::Color;
use console::RenderSurface;
use parking_lot::Mutex;
use std::sync::Arc;

/// Screen edge the panel docks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockSide {
    Right,
    Left,
    Bottom,
}

/// Panel geometry and stacking.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    pub width: u32,
    pub font_size: u32,
    pub opacity: f32,
    pub z_index: u32,
    pub dock: DockSide,
    /// Rows visible at once in the viewport.
    pub viewport_rows: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 300,
            font_size: 14,
            opacity: 0.9,
            z_index: 100_500,
            dock: DockSide::Right,
            viewport_rows: 25,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_dock(mut self, dock: DockSide) -> Self {
        self.dock = dock;
        self
    }

    pub fn with_viewport_rows(mut self, rows: usize) -> Self {
        self.viewport_rows = rows;
        self
    }
}

/// One rendered panel line.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLine {
    pub text: String,
    pub color: Color,
}

/// The overlay panel.
pub struct TextPanel {
    config: PanelConfig,
    theme: PanelTheme,
    lines: Vec<PanelLine>,
    scroll_top: usize,
}

impl TextPanel {
    pub fn new(config: PanelConfig) -> Self {
        Self::with_theme(config, PanelTheme::default())
    }

    pub fn with_theme(config: PanelConfig, theme: PanelTheme) -> Self {
        Self {
            config,
            theme,
            lines: Vec::new(),
            scroll_top: 0,
        }
    }

    /// Construct a panel behind a shared handle.
    pub fn shared(config: PanelConfig) -> Arc<Mutex<TextPanel>> {
        Arc::new(Mutex::new(TextPanel::new(config)))
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn theme(&self) -> &PanelTheme {
        &self.theme
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Lines currently inside the viewport.
    pub fn visible_lines(&self) -> &[PanelLine] {
        let start = self.scroll_top.min(self.lines.len());
        let end = (start + self.config.viewport_rows).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Viewport text, one line per row.
    pub fn render_text(&self) -> String {
        let texts: Vec<&str> = self.visible_lines().iter().map(|l| l.text.as_str()).collect();
        texts.join("\n")
    }
}

impl RenderSurface for TextPanel {
    fn append(&mut self, text: &str, color: Color) {
        self.lines.push(PanelLine {
            text: text.to_string(),
            color,
        });
    }

    fn clear_all(&mut self) {
        self.lines.clear();
        self.scroll_top = 0;
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.lines.len().saturating_sub(self.config.viewport_rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = PanelConfig::default();
        assert_eq!(config.width, 300);
        assert_eq!(config.font_size, 14);
        assert_eq!(config.opacity, 0.9);
        assert_eq!(config.z_index, 100_500);
        assert_eq!(config.dock, DockSide::Right);
    }

    #[test]
    fn test_scroll_pins_viewport_to_latest_lines() {
        let mut panel = TextPanel::new(PanelConfig::new().with_viewport_rows(3));
        for i in 0..5 {
            panel.append(&format!("line {}", i), Color::BLACK);
            panel.scroll_to_bottom();
        }

        assert_eq!(panel.scroll_top(), 2);
        assert_eq!(panel.render_text(), "line 2\nline 3\nline 4");
    }

    #[test]
    fn test_short_content_needs_no_scroll() {
        let mut panel = TextPanel::new(PanelConfig::new().with_viewport_rows(10));
        panel.append("only", Color::BLACK);
        panel.scroll_to_bottom();

        assert_eq!(panel.scroll_top(), 0);
        assert_eq!(panel.render_text(), "only");
    }

    #[test]
    fn test_clear_resets_content_and_scroll() {
        let mut panel = TextPanel::new(PanelConfig::new().with_viewport_rows(2));
        for i in 0..4 {
            panel.append(&format!("{}", i), Color::BLACK);
            panel.scroll_to_bottom();
        }
        panel.clear_all();

        assert_eq!(panel.line_count(), 0);
        assert_eq!(panel.scroll_top(), 0);
        assert_eq!(panel.render_text(), "");
    }

    #[test]
    fn test_panel_keeps_line_colors() {
        let mut panel = TextPanel::new(PanelConfig::default());
        panel.append("err", Color::rgb(0x91, 0x00, 0x00));
        assert_eq!(panel.visible_lines()[0].color, Color::rgb(0x91, 0x00, 0x00));
    }
}
