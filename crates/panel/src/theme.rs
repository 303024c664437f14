//! Panel chrome colors.

use common::Color;

/// Colors for the panel chrome. Entry text colors come from the console
/// palette, not the theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelTheme {
    pub name: String,
    pub is_dark: bool,
    pub background: Color,
    pub border: Color,
    pub text: Color,
}

impl PanelTheme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            is_dark: false,
            background: Color::WHITE,
            border: Color::BLACK,
            text: Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            is_dark: true,
            background: Color::rgb(32, 33, 36),
            border: Color::rgb(60, 64, 67),
            text: Color::rgb(232, 234, 237),
        }
    }
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self::light()
    }
}
