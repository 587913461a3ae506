//! Mapping between normalized axis positions and points on a circle.

use serde::{Deserialize, Serialize};

use crate::axis::AxisSpan;
use crate::error::ConfigError;
use crate::geom::{Point, angle_of, distance, fit_angle_to_range, round_to, unwrap_angle};
use crate::radius::Radius;

/// Placement of a circle or circular band inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CircleGeometry {
    /// Angle of position 0, in degrees.
    pub start_angle: f64,
    /// Angle of position 1, in degrees.
    pub end_angle: f64,
    /// Outer radius, relative to half the shorter container side.
    pub radius: Radius,
    /// Inner radius; negative values are measured inward from the outer radius.
    pub inner_radius: Radius,
    /// Vertical radius for elliptical layouts, relative to the outer radius.
    pub radius_y: Option<Radius>,
}

impl Default for CircleGeometry {
    fn default() -> Self {
        Self {
            start_angle: -90.0,
            end_angle: 270.0,
            radius: Radius::Relative(1.0),
            inner_radius: Radius::Pixels(0.0),
            radius_y: None,
        }
    }
}

impl CircleGeometry {
    /// Set the start and end angles.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Set the outer radius.
    pub fn with_radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    /// Set the inner radius.
    pub fn with_inner_radius(mut self, inner_radius: Radius) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Angular sweep in degrees; negative when running counter-clockwise.
    pub fn arc(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Resolve the radii against a container of the given size.
    pub fn resolve(&self, width: f64, height: f64) -> ResolvedCircle {
        let reference = width.min(height) / 2.0;
        let radius = self.radius.resolve(reference);
        let radius_y = self
            .radius_y
            .map_or(radius, |radius_y| radius_y.resolve(radius));
        let inner_radius = self.inner_radius.resolve_subtracting_negative(radius);
        ResolvedCircle {
            radius,
            radius_y,
            inner_radius,
        }
    }

    /// Check that both angles are finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("startAngle", self.start_angle),
            ("endAngle", self.end_angle),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidAngle { name, value });
            }
        }
        Ok(())
    }
}

/// Pixel radii of a circle after layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedCircle {
    /// Outer radius in pixels.
    pub radius: f64,
    /// Vertical outer radius in pixels.
    pub radius_y: f64,
    /// Inner radius in pixels.
    pub inner_radius: f64,
}

/// Converts between axis positions, angles, and points around a center.
///
/// Points are relative to the circle center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularTransform {
    start_angle: f64,
    end_angle: f64,
    span: AxisSpan,
    circle: ResolvedCircle,
}

impl CircularTransform {
    /// Create a transform for a container of `width` by `height` pixels.
    pub fn new(geometry: &CircleGeometry, span: AxisSpan, width: f64, height: f64) -> Self {
        Self {
            start_angle: geometry.start_angle,
            end_angle: geometry.end_angle,
            span,
            circle: geometry.resolve(width, height),
        }
    }

    /// Start angle in degrees.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// End angle in degrees.
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Visible axis span.
    pub fn span(&self) -> AxisSpan {
        self.span
    }

    /// Outer radius in pixels.
    pub fn pixel_radius(&self) -> f64 {
        self.circle.radius
    }

    /// Vertical outer radius in pixels.
    pub fn pixel_radius_y(&self) -> f64 {
        self.circle.radius_y
    }

    /// Inner radius in pixels.
    pub fn pixel_inner_radius(&self) -> f64 {
        self.circle.inner_radius
    }

    /// Resolved radii.
    pub fn circle(&self) -> ResolvedCircle {
        self.circle
    }

    /// Circumference of the outer circle in pixels.
    pub fn axis_length(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.circle.radius
    }

    /// Degrees covered by one unit of position inside the visible span.
    fn degrees_per_position(&self) -> f64 {
        (self.end_angle - self.start_angle) / self.span.width()
    }

    /// Angle of a normalized axis position, rounded to three decimals.
    pub fn position_to_angle(&self, position: f64) -> f64 {
        let arc = self.degrees_per_position();
        let angle = if self.span.inversed {
            self.start_angle + (self.span.end - position) * arc
        } else {
            self.start_angle + (position - self.span.start) * arc
        };
        round_to(angle, 3)
    }

    /// Normalized axis position of an angle, rounded to five decimals.
    pub fn angle_to_position(&self, angle: f64) -> f64 {
        let arc = self.degrees_per_position();
        let position = if self.span.inversed {
            self.span.end - (angle - self.start_angle) / arc
        } else {
            self.span.start + (angle - self.start_angle) / arc
        };
        round_to(position, 5)
    }

    /// Point on the outer circle at `position`.
    pub fn position_to_point(&self, position: f64) -> Point {
        let angle = self.position_to_angle(position);
        Point::elliptic(angle, self.circle.radius, self.circle.radius_y)
    }

    /// Point at `position` on a circle of `radius` pixels.
    pub fn position_to_point_at(&self, position: f64, radius: f64) -> Point {
        let ratio = if self.circle.radius == 0.0 {
            1.0
        } else {
            self.circle.radius_y / self.circle.radius
        };
        Point::elliptic(self.position_to_angle(position), radius, radius * ratio)
    }

    /// Angle of `point` fitted into the sweep.
    pub fn point_to_angle(&self, point: Point) -> f64 {
        let lo = self.start_angle.min(self.end_angle);
        fit_angle_to_range(
            unwrap_angle(angle_of(point), lo),
            self.start_angle,
            self.end_angle,
        )
    }

    /// Normalized axis position of `point`.
    pub fn point_to_position(&self, point: Point) -> f64 {
        self.angle_to_position(self.point_to_angle(point))
    }

    /// Whether `point` lies on the band between the inner and outer radius,
    /// with one pixel of slack on each side.
    pub fn fits_to_bounds(&self, point: Point) -> bool {
        let r = distance(point, Point::ORIGIN);
        r < self.circle.radius + 1.0 && r > self.circle.inner_radius - 1.0
    }
}
