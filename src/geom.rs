//! Geometric primitives and angle math shared by axes and cursors.
//!
//! All coordinates are pixels in the local frame of the owning container.
//! Angles are degrees measured clockwise from the positive X axis (screen Y
//! grows downward). None of these helpers panic: a `NaN` input simply yields a
//! `NaN` output and callers decide what to do with it.

/// Degrees per radian.
pub const DEGREES: f64 = 180.0 / std::f64::consts::PI;
/// Radians per degree.
pub const RADIANS: f64 = std::f64::consts::PI / 180.0;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate in pixels.
    pub x: f64,
    /// Y coordinate in pixels.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` degrees.
    pub fn polar(angle: f64, radius: f64) -> Self {
        Self::new(radius * cos(angle), radius * sin(angle))
    }

    /// Point on an ellipse with radii `rx`/`ry` at `angle` degrees.
    pub fn elliptic(angle: f64, rx: f64, ry: f64) -> Self {
        Self::new(rx * cos(angle), ry * sin(angle))
    }

    /// Distance from the origin.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub min: Point,
    /// Bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from two corners, normalizing their order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rectangle anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::from_corners(Point::ORIGIN, Point::new(width, height))
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Rectangle center.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Clamp a point into the rectangle.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            fit_to_range(point.x, self.min.x, self.max.x),
            fit_to_range(point.y, self.min.y, self.max.y),
        )
    }
}

/// Sine of an angle in degrees.
pub fn sin(angle: f64) -> f64 {
    (angle * RADIANS).sin()
}

/// Cosine of an angle in degrees.
pub fn cos(angle: f64) -> f64 {
    (angle * RADIANS).cos()
}

/// Angle of a point around the origin, in degrees within (-180, 180].
pub fn angle_of(point: Point) -> f64 {
    point.y.atan2(point.x) * DEGREES
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Clamp `value` into `[min, max]`, letting `NaN` through.
pub fn fit_to_range(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let value = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if value >= 360.0 { 0.0 } else { value }
}

/// Normalize an angle into `(-180, 180]`.
pub fn normalize_signed(angle: f64) -> f64 {
    let value = normalize_angle(angle);
    if value > 180.0 { value - 360.0 } else { value }
}

/// Equivalent representation of `angle` within `[reference, reference + 360)`.
pub fn unwrap_angle(angle: f64, reference: f64) -> f64 {
    reference + normalize_angle(angle - reference)
}

/// Fit an angle into the inclusive sweep between `start` and `end`.
///
/// The sweep may run counter-clockwise (`end < start`). A value already inside
/// the sweep is returned untouched. When the sweep is shorter than a full
/// turn, an equivalent representation inside the sweep is used if one exists;
/// otherwise the angle snaps to the boundary nearest across the uncovered gap.
/// Sweeps of a full turn or more have no gap, so out-of-range values clamp
/// numerically to the boundary on their side.
pub fn fit_angle_to_range(angle: f64, start: f64, end: f64) -> f64 {
    if angle.is_nan() {
        return angle;
    }
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    if angle >= lo && angle <= hi {
        return angle;
    }

    let sweep = hi - lo;
    if sweep < 360.0 && angle.is_finite() {
        let candidate = unwrap_angle(angle, lo);
        if candidate <= hi {
            return candidate;
        }
        let past_end = candidate - hi;
        let before_start = lo + 360.0 - candidate;
        return if past_end < before_start { hi } else { lo };
    }

    fit_to_range(angle, lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn angle_of_quadrants() {
        assert!((angle_of(Point::new(1.0, 0.0))).abs() < 1e-12);
        assert!((angle_of(Point::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((angle_of(Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
        assert!((angle_of(Point::new(0.0, -1.0)) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn distance_from_origin_matches_length() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(distance(point, Point::ORIGIN), 5.0);
        assert_eq!(point.length(), 5.0);
    }

    #[test]
    fn fit_full_sweep_values() {
        assert_eq!(fit_angle_to_range(10.0, -90.0, 270.0), 10.0);
        assert_eq!(fit_angle_to_range(-100.0, -90.0, 270.0), -90.0);
        assert_eq!(fit_angle_to_range(280.0, -90.0, 270.0), 270.0);
    }

    #[test]
    fn fit_partial_sweep_uses_equivalent_angle() {
        assert_eq!(fit_angle_to_range(370.0, 0.0, 90.0), 10.0);
        assert_eq!(fit_angle_to_range(-170.0, 90.0, 270.0), 190.0);
    }

    #[test]
    fn fit_partial_sweep_snaps_across_gap() {
        // semicircle over the top: gap is the lower half
        assert_eq!(fit_angle_to_range(10.0, -180.0, 0.0), 0.0);
        assert_eq!(fit_angle_to_range(170.0, -180.0, 0.0), -180.0);
    }

    #[test]
    fn fit_counter_clockwise_sweep() {
        assert_eq!(fit_angle_to_range(45.0, 90.0, 0.0), 45.0);
        assert_eq!(fit_angle_to_range(100.0, 90.0, 0.0), 90.0);
        assert_eq!(fit_angle_to_range(-20.0, 90.0, 0.0), 0.0);
    }

    #[test]
    fn fit_propagates_nan() {
        assert!(fit_angle_to_range(f64::NAN, 0.0, 90.0).is_nan());
    }

    #[test]
    fn normalize_helpers() {
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(720.0), 0.0);
        assert_eq!(normalize_signed(270.0), -90.0);
        assert_eq!(normalize_signed(180.0), 180.0);
        assert_eq!(unwrap_angle(-100.0, -90.0), 260.0);
    }

    #[test]
    fn rect_normalizes_corners() {
        let rect = Rect::from_corners(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
        assert_eq!(rect.min, Point::new(4.0, 2.0));
        assert_eq!(rect.max, Point::new(10.0, 8.0));
        assert!(rect.contains(Point::new(4.0, 8.0)));
        assert!(!rect.contains(Point::new(3.9, 5.0)));
    }

    proptest! {
        #[test]
        fn prop_fit_is_idempotent(
            angle in -1080.0f64..1080.0,
            start in -360.0f64..360.0,
            sweep in -720.0f64..720.0,
        ) {
            let end = start + sweep;
            let once = fit_angle_to_range(angle, start, end);
            let twice = fit_angle_to_range(once, start, end);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_fit_stays_inside_sweep(
            angle in -1080.0f64..1080.0,
            start in -360.0f64..360.0,
            sweep in -720.0f64..720.0,
        ) {
            let end = start + sweep;
            let fitted = fit_angle_to_range(angle, start, end);
            prop_assert!(fitted >= start.min(end) && fitted <= start.max(end));
        }
    }
}
