//! Axis identities, spans, formatting, and circular axis configuration.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::radius::Radius;
use crate::transform::CircleGeometry;

static AXIS_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisId(u64);

impl AxisId {
    /// Allocate a fresh identifier.
    pub fn next() -> Self {
        Self(AXIS_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an identifier chosen by the host (for example from configuration).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The currently visible part of an axis, in normalized positions.
///
/// `start`/`end` are the zoom bounds reported by the owning chart; a fully
/// zoomed-out axis spans `0..1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisSpan {
    /// First visible position.
    pub start: f64,
    /// Last visible position.
    pub end: f64,
    /// Whether positions run from the end angle back to the start angle.
    pub inversed: bool,
}

impl AxisSpan {
    /// Create a span.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            inversed: false,
        }
    }

    /// Set the inversed flag.
    pub fn inversed(mut self, inversed: bool) -> Self {
        self.inversed = inversed;
        self
    }

    /// Width of the span.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl Default for AxisSpan {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Formatter for axis label text.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Default numeric formatter.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => {
                let text = format!("{value:.2}");
                text.trim_end_matches('0').trim_end_matches('.').to_string()
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Grid line settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Draw grid lines.
    pub enabled: bool,
    /// Location of the line inside its cell (0 = cell start, 1 = cell end).
    pub location: f64,
    /// Outer end of the line, relative to the axis radius. Defaults to 100%.
    pub radius: Option<Radius>,
    /// Inner end of the line. Defaults to the axis inner radius.
    pub inner_radius: Option<Radius>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            location: 0.0,
            radius: None,
            inner_radius: None,
        }
    }
}

/// Tick settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickConfig {
    /// Draw ticks.
    pub enabled: bool,
    /// Tick length in pixels.
    pub length: f64,
    /// Point ticks toward the center instead of away from it.
    pub inside: bool,
    /// Location of the tick inside its cell.
    pub location: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            length: 5.0,
            inside: false,
            location: 0.0,
        }
    }
}

/// Label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelConfig {
    /// Draw labels.
    pub enabled: bool,
    /// Distance from the axis circle; negative values place labels inside.
    pub radius: Radius,
    /// Rotate labels with the circle, offset by this many degrees.
    pub relative_rotation: Option<f64>,
    /// Location of the label inside its cell.
    pub location: f64,
    /// Font size in pixels.
    pub font_size: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: Radius::Pixels(0.0),
            relative_rotation: None,
            location: 0.0,
            font_size: 12.0,
        }
    }
}

/// Range fill settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FillConfig {
    /// Fill every other cell.
    pub alternate_cells: bool,
    /// Rounding of the outer corners.
    pub corner_radius: f64,
    /// Rounding of the inner corners. Defaults to `corner_radius`.
    pub inner_corner_radius: Option<f64>,
}

/// Configuration for a circular axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CircularAxisConfig {
    /// Circle placement.
    #[serde(flatten)]
    pub circle: CircleGeometry,
    /// Visible span and direction.
    #[serde(flatten)]
    pub span: AxisSpan,
    /// Category names; when non-empty the axis has one cell per category.
    pub categories: Vec<String>,
    /// Number of cells on a value axis.
    pub grid_count: usize,
    /// Data value at position 0 of a value axis.
    pub min: f64,
    /// Data value at position 1 of a value axis.
    pub max: f64,
    /// Hide labels before this relative position.
    pub min_label_position: f64,
    /// Hide labels after this relative position.
    pub max_label_position: f64,
    /// Grid settings.
    pub grid: GridConfig,
    /// Tick settings.
    pub ticks: TickConfig,
    /// Label settings.
    pub labels: LabelConfig,
    /// Fill settings.
    pub fills: FillConfig,
    /// Label formatter for value axes.
    #[serde(skip)]
    pub formatter: AxisFormatter,
}

impl Default for CircularAxisConfig {
    fn default() -> Self {
        Self {
            circle: CircleGeometry::default(),
            span: AxisSpan::default(),
            categories: Vec::new(),
            grid_count: 8,
            min: 0.0,
            max: 100.0,
            min_label_position: 0.0,
            max_label_position: 1.0,
            grid: GridConfig::default(),
            ticks: TickConfig::default(),
            labels: LabelConfig::default(),
            fills: FillConfig::default(),
            formatter: AxisFormatter::default(),
        }
    }
}

impl PartialEq for AxisFormatter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Default, Self::Default) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl CircularAxisConfig {
    /// Category axis with one cell per name.
    pub fn categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: names.into_iter().map(Into::into).collect(),
            labels: LabelConfig {
                location: 0.5,
                ..LabelConfig::default()
            },
            ..Self::default()
        }
    }

    /// Value axis with `grid_count` cells over `min..max`.
    pub fn values(min: f64, max: f64, grid_count: usize) -> Self {
        Self {
            min,
            max,
            grid_count,
            ..Self::default()
        }
    }

    /// Set the circle placement.
    pub fn with_circle(mut self, circle: CircleGeometry) -> Self {
        self.circle = circle;
        self
    }

    /// Set the start and end angles.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.circle.start_angle = start_angle;
        self.circle.end_angle = end_angle;
        self
    }

    /// Set the outer and inner radius.
    pub fn with_radii(mut self, radius: Radius, inner_radius: Radius) -> Self {
        self.circle.radius = radius;
        self.circle.inner_radius = inner_radius;
        self
    }

    /// Set the inversed flag.
    pub fn with_inversed(mut self, inversed: bool) -> Self {
        self.span.inversed = inversed;
        self
    }

    /// Enable ticks with the given length.
    pub fn with_ticks(mut self, length: f64, inside: bool) -> Self {
        self.ticks.enabled = true;
        self.ticks.length = length;
        self.ticks.inside = inside;
        self
    }

    /// Rotate labels along the circle.
    pub fn with_relative_rotation(mut self, degrees: f64) -> Self {
        self.labels.relative_rotation = Some(degrees);
        self
    }

    /// Set the label formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Number of cells on the axis.
    pub fn cell_count(&self) -> usize {
        if self.categories.is_empty() {
            self.grid_count.max(1)
        } else {
            self.categories.len()
        }
    }

    /// Label text of a cell.
    pub fn cell_label(&self, index: usize) -> String {
        if let Some(name) = self.categories.get(index) {
            return name.clone();
        }
        let fraction = index as f64 / self.cell_count() as f64;
        self.formatter
            .format(self.min + fraction * (self.max - self.min))
    }

    /// Check the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.circle.validate()?;
        if self.min_label_position > self.max_label_position {
            return Err(ConfigError::OutOfRange {
                name: "minLabelPosition",
                expected: "less than or equal to maxLabelPosition",
                value: self.min_label_position,
            });
        }
        if !self.ticks.length.is_finite() {
            return Err(ConfigError::OutOfRange {
                name: "ticks.length",
                expected: "a finite number",
                value: self.ticks.length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter_trims_zeros() {
        let formatter = AxisFormatter::Default;
        assert_eq!(formatter.format(12.5), "12.5");
        assert_eq!(formatter.format(40.0), "40");
    }

    #[test]
    fn value_axis_labels_follow_min_max() {
        let config = CircularAxisConfig::values(0.0, 100.0, 4);
        assert_eq!(config.cell_count(), 4);
        assert_eq!(config.cell_label(1), "25");
    }

    #[test]
    fn category_axis_uses_names() {
        let config = CircularAxisConfig::categories(["N", "E", "S", "W"]);
        assert_eq!(config.cell_count(), 4);
        assert_eq!(config.cell_label(2), "S");
        assert_eq!(config.labels.location, 0.5);
    }

    #[test]
    fn config_from_json() {
        let config: CircularAxisConfig = serde_json::from_str(
            r#"{"startAngle": 180, "endAngle": 360, "innerRadius": "40%", "inversed": true,
                "ticks": {"enabled": true, "length": 8}}"#,
        )
        .unwrap();
        assert_eq!(config.circle.start_angle, 180.0);
        assert_eq!(config.circle.inner_radius, Radius::Relative(0.4));
        assert!(config.span.inversed);
        assert!(config.ticks.enabled);
        assert_eq!(config.ticks.length, 8.0);
        assert_eq!(config.grid_count, 8);
    }

    #[test]
    fn axis_ids_are_unique() {
        assert_ne!(AxisId::next(), AxisId::next());
        assert_eq!(AxisId::from_raw(7).raw(), 7);
    }
}
