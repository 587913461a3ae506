//! Path primitives and arc/wedge construction.
//!
//! Paths are backend-agnostic command lists in absolute pixel coordinates.
//! Arc builders assume the circle (or ellipse) is centered at the origin; use
//! [`Path::translate`] to move the result into place.

use std::fmt::Write as _;

use crate::geom::{DEGREES, Point, Rect, cos, round_to, sin};

/// Largest angular step used when flattening arcs into polylines.
const FLATTEN_STEP_DEGREES: f64 = 5.0;

/// A single path drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Elliptical arc to a point, with SVG endpoint semantics.
    ArcTo {
        /// Horizontal radius.
        radius_x: f64,
        /// Vertical radius.
        radius_y: f64,
        /// Take the longer of the two candidate arcs.
        large_arc: bool,
        /// Sweep in the positive-angle (clockwise on screen) direction.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (index, point) in points.iter().enumerate() {
            if index == 0 {
                path.move_to(*point);
            } else {
                path.line_to(*point);
            }
        }
        path
    }

    /// Closed rectangle outline.
    pub fn rectangle(rect: Rect) -> Self {
        let mut path = Self::polyline(&[
            rect.min,
            Point::new(rect.max.x, rect.min.y),
            rect.max,
            Point::new(rect.min.x, rect.max.y),
        ]);
        path.close();
        path
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Line to a point.
    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Arc to a point on an ellipse with the given radii.
    ///
    /// A zero radius adds nothing; the next command reaches the point instead.
    pub fn arc_to_point(&mut self, to: Point, radius_x: f64, radius_y: f64, sweep: bool) {
        if radius_x == 0.0 || radius_y == 0.0 {
            return;
        }
        self.commands.push(PathCommand::ArcTo {
            radius_x,
            radius_y,
            large_arc: false,
            sweep,
            to,
        });
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Append all commands of another path.
    pub fn extend(&mut self, other: Path) {
        self.commands.extend(other.commands);
    }

    /// Access the commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check whether the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check whether every coordinate in the path is finite.
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
            PathCommand::ArcTo {
                radius_x,
                radius_y,
                to,
                ..
            } => radius_x.is_finite() && radius_y.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        })
    }

    /// Offset every point of the path.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(point) => PathCommand::MoveTo(point.offset(dx, dy)),
                PathCommand::LineTo(point) => PathCommand::LineTo(point.offset(dx, dy)),
                PathCommand::ArcTo {
                    radius_x,
                    radius_y,
                    large_arc,
                    sweep,
                    to,
                } => PathCommand::ArcTo {
                    radius_x,
                    radius_y,
                    large_arc,
                    sweep,
                    to: to.offset(dx, dy),
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }

    /// Serialize into SVG path data.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // writing into a String cannot fail
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(out, "M{},{}", fmt(p.x), fmt(p.y)),
                PathCommand::LineTo(p) => write!(out, "L{},{}", fmt(p.x), fmt(p.y)),
                PathCommand::ArcTo {
                    radius_x,
                    radius_y,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    out,
                    "A{},{},0,{},{},{},{}",
                    fmt(radius_x),
                    fmt(radius_y),
                    u8::from(large_arc),
                    u8::from(sweep),
                    fmt(to.x),
                    fmt(to.y)
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }

    /// Flatten into polylines, one per subpath. Closed subpaths repeat their
    /// first point at the end.
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        let mut subpaths: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    if current.len() > 1 {
                        subpaths.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(point);
                }
                PathCommand::LineTo(point) => {
                    if current.is_empty() {
                        current.push(Point::ORIGIN);
                    }
                    current.push(point);
                }
                PathCommand::ArcTo {
                    radius_x,
                    radius_y,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let from = current.last().copied().unwrap_or(Point::ORIGIN);
                    if current.is_empty() {
                        current.push(from);
                    }
                    flatten_arc(from, to, radius_x, radius_y, large_arc, sweep, &mut current);
                }
                PathCommand::Close => {
                    if let Some(first) = current.first().copied() {
                        current.push(first);
                        subpaths.push(std::mem::take(&mut current));
                        current.push(first);
                    }
                }
            }
        }
        if current.len() > 1 {
            subpaths.push(current);
        }
        subpaths
    }

    /// Bounding box of the flattened path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.flatten().into_iter().flatten();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect { min, max })
    }
}

fn fmt(value: f64) -> f64 {
    let rounded = round_to(value, 4);
    // avoid "-0" in output
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Arc continuing from the point at `start_angle` on an origin-centered
/// ellipse, sweeping `arc` degrees (negative sweeps run counter-clockwise).
///
/// The arc is split into segments of at most 180 degrees so each segment is
/// unambiguous.
pub fn arc_to(start_angle: f64, arc: f64, radius_x: f64, radius_y: f64) -> Path {
    let mut path = Path::new();
    if arc == 0.0 || !arc.is_finite() {
        return path;
    }
    // very short arcs on huge radii render as lines
    if arc.abs() < 0.5 && radius_x > 3000.0 {
        path.line_to(Point::elliptic(start_angle + arc, radius_x, radius_y));
        return path;
    }
    let segments = (arc.abs() / 180.0).ceil().max(1.0) as usize;
    let step = arc / segments as f64;
    for index in 0..segments {
        let end_angle = start_angle + step * (index + 1) as f64;
        path.commands.push(PathCommand::ArcTo {
            radius_x,
            radius_y,
            large_arc: false,
            sweep: arc > 0.0,
            to: Point::elliptic(end_angle, radius_x, radius_y),
        });
    }
    path
}

/// Wedge (annular sector) description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Signed sweep in degrees; capped to a full turn.
    pub arc: f64,
    /// Outer radius in pixels.
    pub radius: f64,
    /// Inner radius in pixels.
    pub inner_radius: f64,
    /// Vertical outer radius for elliptical wedges. Defaults to `radius`.
    pub radius_y: Option<f64>,
    /// Rounding of the outer corners.
    pub corner_radius: f64,
    /// Rounding of the inner corners. Defaults to `corner_radius`.
    pub inner_corner_radius: Option<f64>,
}

impl ArcSpec {
    /// Circular wedge without corner rounding.
    pub fn new(start_angle: f64, arc: f64, radius: f64, inner_radius: f64) -> Self {
        Self {
            start_angle,
            arc,
            radius,
            inner_radius,
            radius_y: None,
            corner_radius: 0.0,
            inner_corner_radius: None,
        }
    }

    /// Set the vertical radius for an elliptical wedge.
    pub fn with_radius_y(mut self, radius_y: f64) -> Self {
        self.radius_y = Some(radius_y);
        self
    }

    /// Set the outer corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Set the inner corner radius.
    pub fn with_inner_corner_radius(mut self, inner_corner_radius: f64) -> Self {
        self.inner_corner_radius = Some(inner_corner_radius);
        self
    }
}

/// A constructed wedge outline plus the corner radii actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    /// Closed outline.
    pub path: Path,
    /// Effective outer corner radius after clamping.
    pub corner_radius: f64,
    /// Effective inner corner radius after clamping.
    pub inner_corner_radius: f64,
}

/// Build a closed wedge outline centered at the origin.
///
/// Corner radii are clamped so rounding never exceeds the radial band: the
/// outer corner radius is clamped to `(radius - inner_radius) / 2` first, the
/// inner corner radius against the same band second, and both are then
/// limited by the chord the sweep allows. When nothing fits the corners
/// degrade to straight joins.
pub fn arc(spec: &ArcSpec) -> ArcPath {
    let empty = ArcPath {
        path: Path::new(),
        corner_radius: 0.0,
        inner_corner_radius: 0.0,
    };
    let mut radius = spec.radius;
    let mut inner_radius = if spec.inner_radius.is_nan() {
        0.0
    } else {
        spec.inner_radius
    };
    if spec.arc == 0.0 || (radius == 0.0 && inner_radius <= 0.0) {
        return empty;
    }
    let mut radius_y = spec.radius_y.unwrap_or(radius);
    if radius < inner_radius {
        std::mem::swap(&mut radius, &mut inner_radius);
        if spec.radius_y.is_some() && inner_radius != 0.0 {
            radius_y = radius_y / inner_radius * radius;
        } else {
            radius_y = radius;
        }
    }

    let arc = spec.arc.clamp(-360.0, 360.0);
    let full = arc.abs() == 360.0;
    let (mut corner_radius, mut inner_corner_radius) = if full {
        (0.0, 0.0)
    } else {
        (
            spec.corner_radius,
            spec.inner_corner_radius.unwrap_or(spec.corner_radius),
        )
    };
    let direction = if arc > 0.0 { 1.0 } else { -1.0 };
    let start_angle = spec.start_angle;
    let end_angle = start_angle + arc;
    let chord = sin(arc.abs().min(45.0) / 2.0);

    let ratio = if radius == 0.0 { 1.0 } else { radius_y / radius };
    let mut inner_radius_y = ratio * inner_radius;
    let mut corner_radius_y = ratio * corner_radius;
    let mut inner_corner_radius_y = ratio * inner_corner_radius;

    let band = (radius - inner_radius) / 2.0;
    let band_y = (radius_y - inner_radius_y) / 2.0;
    corner_radius = clamp_corner(corner_radius, band);
    corner_radius_y = clamp_corner(corner_radius_y, band_y);
    inner_corner_radius = clamp_corner(inner_corner_radius, band);
    inner_corner_radius_y = clamp_corner(inner_corner_radius_y, band_y);

    corner_radius = round_to(clamp_corner(corner_radius, radius * chord), 4);
    corner_radius_y = round_to(clamp_corner(corner_radius_y, radius_y * chord), 4);
    inner_corner_radius = round_to(clamp_corner(inner_corner_radius, inner_radius * chord), 4);
    inner_corner_radius_y = round_to(
        clamp_corner(inner_corner_radius_y, inner_radius_y * chord),
        4,
    );

    let corner_angle = corner_sweep(corner_radius, radius);
    let corner_angle_y = corner_sweep(corner_radius_y, radius_y);
    if inner_radius < inner_corner_radius {
        inner_radius = inner_corner_radius;
    }
    if inner_radius_y < inner_corner_radius_y {
        inner_radius_y = inner_corner_radius_y;
    }
    let inner_corner_angle = corner_sweep(inner_corner_radius, inner_radius);
    let inner_corner_angle_y = corner_sweep(inner_corner_radius_y, inner_radius_y);

    let middle_angle = start_angle + arc / 2.0;
    let middle = Point::new(
        round_to(cos(middle_angle) * inner_radius, 4),
        sin(middle_angle) * inner_radius_y,
    );
    let a0 = Point::elliptic(
        start_angle,
        inner_radius + inner_corner_radius,
        inner_radius_y + inner_corner_radius_y,
    );
    let b0 = Point::elliptic(
        start_angle,
        radius - corner_radius,
        radius_y - corner_radius_y,
    );
    let c0 = Point::elliptic(end_angle, radius - corner_radius, radius_y - corner_radius_y);
    let d0 = Point::elliptic(
        end_angle,
        inner_radius + inner_corner_radius,
        inner_radius_y + inner_corner_radius_y,
    );
    let b1 = Point::new(
        cos(start_angle + direction * corner_angle) * radius,
        sin(start_angle + direction * corner_angle_y) * radius_y,
    );
    let mut d1 = Point::new(
        cos(end_angle - direction * inner_corner_angle) * inner_radius,
        sin(end_angle - direction * inner_corner_angle_y) * inner_radius_y,
    );
    if inner_corner_angle > arc.abs() / 2.0 {
        d1 = middle;
    }

    // the inner corner arcs span slightly more than the clamped radius
    let inner_arc_radius = inner_corner_radius + inner_corner_radius * sin(inner_corner_angle / 2.0);
    let inner_arc_radius_y =
        inner_corner_radius_y + inner_corner_radius_y * sin(inner_corner_angle_y / 2.0);
    let clockwise = arc > 0.0;

    let mut path = Path::new();
    if full {
        path.move_to(b0);
    } else {
        path.move_to(a0);
        path.line_to(b0);
    }
    path.arc_to_point(b1, corner_radius, corner_radius_y, clockwise);
    path.extend(arc_to(
        start_angle + direction * corner_angle,
        arc - direction * 2.0 * corner_angle,
        radius,
        radius_y,
    ));
    path.arc_to_point(c0, corner_radius, corner_radius_y, clockwise);
    if full && corner_radius == 0.0 {
        path.move_to(d0);
    } else {
        path.line_to(d0);
    }
    path.arc_to_point(d1, inner_arc_radius, inner_arc_radius_y, clockwise);
    if inner_radius > 0.0 {
        path.extend(arc_to(
            end_angle - direction * inner_corner_angle,
            -(arc - direction * 2.0 * inner_corner_angle),
            inner_radius,
            inner_radius_y,
        ));
    }
    path.arc_to_point(a0, inner_arc_radius, inner_arc_radius_y, clockwise);
    path.close();

    ArcPath {
        path,
        corner_radius,
        inner_corner_radius,
    }
}

fn clamp_corner(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(max).max(0.0)
}

/// Angle subtended by a corner of radius `corner` on a circle of `radius`.
fn corner_sweep(corner: f64, radius: f64) -> f64 {
    let angle = (corner / radius / 2.0).asin() * DEGREES * 2.0;
    if angle.is_finite() { angle } else { 0.0 }
}

#[allow(clippy::too_many_arguments)]
fn flatten_arc(
    from: Point,
    to: Point,
    radius_x: f64,
    radius_y: f64,
    large_arc: bool,
    sweep: bool,
    out: &mut Vec<Point>,
) {
    if from == to {
        return;
    }
    let mut rx = radius_x.abs();
    let mut ry = radius_y.abs();
    if rx == 0.0 || ry == 0.0 {
        out.push(to);
        return;
    }
    let hx = (from.x - to.x) / 2.0;
    let hy = (from.y - to.y) / 2.0;
    let lambda = (hx * hx) / (rx * rx) + (hy * hy) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }
    let numerator = rx * rx * ry * ry - rx * rx * hy * hy - ry * ry * hx * hx;
    let denominator = rx * rx * hy * hy + ry * ry * hx * hx;
    let sign = if large_arc != sweep { 1.0 } else { -1.0 };
    let coef = sign * (numerator / denominator).max(0.0).sqrt();
    let cx_prime = coef * rx * hy / ry;
    let cy_prime = -coef * ry * hx / rx;
    let cx = cx_prime + (from.x + to.x) / 2.0;
    let cy = cy_prime + (from.y + to.y) / 2.0;

    let ux = (hx - cx_prime) / rx;
    let uy = (hy - cy_prime) / ry;
    let vx = (-hx - cx_prime) / rx;
    let vy = (-hy - cy_prime) / ry;
    let theta = uy.atan2(ux);
    let mut delta = (ux * vy - uy * vx).atan2(ux * vx + uy * vy);
    if !sweep && delta > 0.0 {
        delta -= std::f64::consts::TAU;
    } else if sweep && delta < 0.0 {
        delta += std::f64::consts::TAU;
    }
    if !delta.is_finite() {
        out.push(to);
        return;
    }

    let steps = ((delta.abs() * DEGREES / FLATTEN_STEP_DEGREES).ceil() as usize).max(1);
    for step in 1..steps {
        let angle = theta + delta * step as f64 / steps as f64;
        out.push(Point::new(cx + rx * angle.cos(), cy + ry * angle.sin()));
    }
    out.push(to);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::distance;

    #[test]
    fn corner_radius_is_clamped_to_band() {
        let wedge = arc(&ArcSpec::new(0.0, 90.0, 100.0, 80.0).with_corner_radius(30.0));
        assert!(wedge.corner_radius <= 10.0);
        assert!(wedge.inner_corner_radius <= 10.0);
        assert_eq!(wedge.corner_radius, 10.0);
    }

    #[test]
    fn corner_radius_limited_by_narrow_sweep() {
        let wedge = arc(&ArcSpec::new(0.0, 10.0, 100.0, 0.0).with_corner_radius(40.0));
        let chord = 100.0 * sin(5.0);
        assert!(wedge.corner_radius > 0.0);
        assert!(wedge.corner_radius <= chord + 1e-4);
    }

    #[test]
    fn full_circle_drops_corners() {
        let wedge = arc(&ArcSpec::new(-90.0, 360.0, 50.0, 20.0).with_corner_radius(5.0));
        assert_eq!(wedge.corner_radius, 0.0);
        assert!(matches!(wedge.path.commands()[0], PathCommand::MoveTo(_)));
    }

    #[test]
    fn zero_sweep_is_empty() {
        assert!(arc(&ArcSpec::new(0.0, 0.0, 50.0, 0.0)).path.is_empty());
        assert!(arc_to(10.0, 0.0, 50.0, 50.0).is_empty());
    }

    #[test]
    fn pie_slice_outline_stays_on_circle() {
        let wedge = arc(&ArcSpec::new(0.0, 90.0, 100.0, 0.0));
        let polylines = wedge.path.flatten();
        assert_eq!(polylines.len(), 1);
        for point in &polylines[0] {
            assert!(point.length() <= 100.0 + 1e-6);
        }
        let bounds = wedge.path.bounds().unwrap();
        assert!((bounds.max.x - 100.0).abs() < 1e-6);
        assert!((bounds.max.y - 100.0).abs() < 1e-6);
        assert!(bounds.min.x.abs() < 1e-6 && bounds.min.y.abs() < 1e-6);
    }

    #[test]
    fn arc_to_splits_long_sweeps() {
        let path = arc_to(0.0, 270.0, 10.0, 10.0);
        assert_eq!(path.commands().len(), 2);
        let PathCommand::ArcTo { to, sweep, .. } = path.commands()[1] else {
            panic!("expected arc segment");
        };
        assert!(sweep);
        assert!(distance(to, Point::new(0.0, -10.0)) < 1e-9);
    }

    #[test]
    fn counter_clockwise_arc_flattens_backwards() {
        let mut path = Path::new();
        path.move_to(Point::new(10.0, 0.0));
        path.extend(arc_to(0.0, -90.0, 10.0, 10.0));
        let points = &path.flatten()[0];
        // first intermediate point lies above the X axis (negative angle)
        assert!(points[1].y < 0.0);
        assert!(distance(*points.last().unwrap(), Point::new(0.0, -10.0)) < 1e-9);
    }

    #[test]
    fn elliptical_wedge_uses_radius_y() {
        let wedge = arc(&ArcSpec::new(0.0, 180.0, 100.0, 0.0).with_radius_y(40.0));
        let bounds = wedge.path.bounds().unwrap();
        assert!((bounds.max.y - 40.0).abs() < 1e-6);
        assert!((bounds.max.x - 100.0).abs() < 1e-6);
    }

    #[test]
    fn svg_output() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.5, -0.00001));
        path.close();
        assert_eq!(path.to_svg(), "M0,0 L10.5,0 Z");
    }

    #[test]
    fn translate_moves_points() {
        let path = Path::polyline(&[Point::new(1.0, 1.0), Point::new(2.0, 3.0)]).translate(10.0, 20.0);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(11.0, 21.0)),
                PathCommand::LineTo(Point::new(12.0, 23.0)),
            ]
        );
    }

    #[test]
    fn nan_radius_produces_non_finite_path() {
        let wedge = arc(&ArcSpec::new(0.0, 45.0, f64::NAN, 0.0));
        assert!(!wedge.path.is_finite());
    }
}
