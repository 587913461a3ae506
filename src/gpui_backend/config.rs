use crate::style::Theme;

/// Configuration for the GPUI polar view.
#[derive(Debug, Clone)]
pub struct PolarViewConfig {
    /// Colors for the axis and cursor.
    pub theme: Theme,
    /// Space kept free around the chart area, in pixels.
    pub padding_px: f32,
    /// Clear a persisted selection on the next press.
    pub clear_selection_on_press: bool,
}

impl Default for PolarViewConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            padding_px: 24.0,
            clear_selection_on_press: true,
        }
    }
}
