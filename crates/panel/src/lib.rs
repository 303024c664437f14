//! Reference output surface for the diagnostic console.
//!
//! Provides a text panel with a row-based viewport that implements the
//! console's `RenderSurface` contract, plus its chrome theme.

pub mod panel;
pub mod theme;

pub use panel::{DockSide, PanelConfig, PanelLine, TextPanel};
pub use theme::PanelTheme;
