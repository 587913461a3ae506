//! Style and theming for axes and cursors.

use crate::render::{Color, LineStyle, ShapeStyle};

/// Visual theme applied when turning axis and cursor layouts into render lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background color behind the chart.
    pub background: Color,
    /// Grid line stroke.
    pub grid: LineStyle,
    /// Axis line stroke.
    pub axis_line: LineStyle,
    /// Tick stroke.
    pub tick: LineStyle,
    /// Label text color.
    pub label: Color,
    /// Fill color of axis ranges and alternating cells.
    pub axis_fill: Color,
    /// Cursor line stroke.
    pub cursor_line: LineStyle,
    /// Cursor band fill used for full-width lines.
    pub cursor_band: Color,
    /// Selection fill and stroke.
    pub selection: ShapeStyle,
}

impl Theme {
    /// Dark-on-light theme.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            grid: LineStyle {
                color: Color::BLACK.with_alpha(0.15),
                width: 1.0,
            },
            axis_line: LineStyle {
                color: Color::BLACK.with_alpha(0.4),
                width: 1.0,
            },
            tick: LineStyle {
                color: Color::BLACK.with_alpha(0.4),
                width: 1.0,
            },
            label: Color::new(0.2, 0.2, 0.2, 1.0),
            axis_fill: Color::BLACK.with_alpha(0.05),
            cursor_line: LineStyle {
                color: Color::BLACK.with_alpha(0.4),
                width: 1.0,
            },
            cursor_band: Color::BLACK.with_alpha(0.08),
            selection: ShapeStyle {
                fill: Color::BLACK.with_alpha(0.1),
                stroke: Color::TRANSPARENT,
                stroke_width: 0.0,
            },
        }
    }

    /// Light-on-dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.08, 0.1, 1.0),
            grid: LineStyle {
                color: Color::WHITE.with_alpha(0.12),
                width: 1.0,
            },
            axis_line: LineStyle {
                color: Color::WHITE.with_alpha(0.35),
                width: 1.0,
            },
            tick: LineStyle {
                color: Color::WHITE.with_alpha(0.35),
                width: 1.0,
            },
            label: Color::new(0.85, 0.85, 0.9, 1.0),
            axis_fill: Color::WHITE.with_alpha(0.04),
            cursor_line: LineStyle {
                color: Color::WHITE.with_alpha(0.5),
                width: 1.0,
            },
            cursor_band: Color::WHITE.with_alpha(0.08),
            selection: ShapeStyle {
                fill: Color::new(0.4, 0.6, 1.0, 0.2),
                stroke: Color::new(0.4, 0.6, 1.0, 0.6),
                stroke_width: 1.0,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
