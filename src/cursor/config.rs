//! Cursor settings.

use serde::{Deserialize, Serialize};

use crate::axis::AxisId;
use crate::chart::DEFAULT_MAX_PAN_OUT;
use crate::cursor::behavior::CursorBehavior;
use crate::error::ConfigError;
use crate::series::SeriesId;
use crate::transform::CircleGeometry;

/// Settings shared by Cartesian and radial cursors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursorConfig {
    /// What dragging does.
    pub behavior: CursorBehavior,
    /// Widen the X line into a band covering the current axis cell.
    pub full_width_line_x: bool,
    /// Widen the Y line into a band covering the current axis cell.
    pub full_width_line_y: bool,
    /// How far, as a fraction of the view, panning may go past either end.
    pub max_pan_out: f64,
    /// Hide series tooltips while a selection is dragged.
    pub hide_series_tooltips_on_selection: bool,
    /// Series whose tooltips the lines snap to.
    pub snap_to_series: Vec<SeriesId>,
    /// Ignore snap targets further away than this many pixels; negative disables the limit.
    pub max_tooltip_distance: f64,
    /// Drags shorter than this many pixels are cancelled.
    pub hit_tolerance: f64,
    /// Duration of the snap glide in milliseconds.
    pub snap_duration_ms: f64,
    /// Axis driving the X line.
    pub x_axis: Option<AxisId>,
    /// Axis driving the Y line.
    pub y_axis: Option<AxisId>,
    /// Draw the X line.
    pub line_x: bool,
    /// Draw the Y line.
    pub line_y: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            behavior: CursorBehavior::ZoomX,
            full_width_line_x: false,
            full_width_line_y: false,
            max_pan_out: DEFAULT_MAX_PAN_OUT,
            hide_series_tooltips_on_selection: true,
            snap_to_series: Vec::new(),
            max_tooltip_distance: -1.0,
            hit_tolerance: 10.0,
            snap_duration_ms: 300.0,
            x_axis: None,
            y_axis: None,
            line_x: true,
            line_y: true,
        }
    }
}

impl CursorConfig {
    /// Set the drag behavior.
    pub fn with_behavior(mut self, behavior: CursorBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Bind the X line to an axis.
    pub fn with_x_axis(mut self, axis: AxisId) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Bind the Y line to an axis.
    pub fn with_y_axis(mut self, axis: AxisId) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Snap lines to the tooltips of these series.
    pub fn with_snap_to_series(mut self, series: impl IntoIterator<Item = SeriesId>) -> Self {
        self.snap_to_series = series.into_iter().collect();
        self
    }

    /// Set the cancel threshold in pixels.
    pub fn with_hit_tolerance(mut self, hit_tolerance: f64) -> Self {
        self.hit_tolerance = hit_tolerance;
        self
    }

    /// Widen both lines into bands.
    pub fn with_full_width_lines(mut self, x: bool, y: bool) -> Self {
        self.full_width_line_x = x;
        self.full_width_line_y = y;
        self
    }

    /// Check the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("maxPanOut", self.max_pan_out),
            ("hitTolerance", self.hit_tolerance),
            ("snapDurationMs", self.snap_duration_ms),
        ];
        for (name, value) in checks {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::OutOfRange {
                    name,
                    expected: "a finite, non-negative number",
                    value,
                });
            }
        }
        if self.max_tooltip_distance.is_nan() {
            return Err(ConfigError::OutOfRange {
                name: "maxTooltipDistance",
                expected: "a number",
                value: self.max_tooltip_distance,
            });
        }
        Ok(())
    }
}

/// Settings of a radial cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RadialCursorConfig {
    /// Shared cursor settings.
    #[serde(flatten)]
    pub cursor: CursorConfig,
    /// Circle the cursor covers.
    #[serde(flatten)]
    pub circle: CircleGeometry,
}

impl RadialCursorConfig {
    /// Radial cursor over `circle`.
    pub fn new(cursor: CursorConfig, circle: CircleGeometry) -> Self {
        Self { cursor, circle }
    }

    /// Check the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cursor.validate()?;
        self.circle.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radius::Radius;

    #[test]
    fn defaults() {
        let config = CursorConfig::default();
        assert_eq!(config.behavior, CursorBehavior::ZoomX);
        assert_eq!(config.hit_tolerance, 10.0);
        assert_eq!(config.max_pan_out, 0.1);
        assert!(config.hide_series_tooltips_on_selection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn radial_config_from_flat_json() {
        let config: RadialCursorConfig = serde_json::from_str(
            r#"{"behavior": "selectXY", "innerRadius": "30%", "startAngle": 0,
                "endAngle": 180, "snapToSeries": [4], "xAxis": 2}"#,
        )
        .unwrap();
        assert_eq!(config.cursor.behavior, CursorBehavior::SelectXY);
        assert_eq!(config.cursor.snap_to_series, vec![SeriesId::from_raw(4)]);
        assert_eq!(config.cursor.x_axis, Some(AxisId::from_raw(2)));
        assert_eq!(config.circle.inner_radius, Radius::Relative(0.3));
        assert_eq!(config.circle.end_angle, 180.0);
        assert_eq!(config.circle.radius, Radius::Relative(1.0));
    }

    #[test]
    fn negative_tolerance_rejected() {
        let config = CursorConfig::default().with_hit_tolerance(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "hitTolerance", .. })
        ));
    }
}
