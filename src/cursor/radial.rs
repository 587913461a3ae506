//! Polar cursor geometry over a circle or circular band.
//!
//! Points are relative to the circle center. Angles are fitted into the
//! sweep. While a drag is in progress the current angle stays pinned to the
//! boundary the pointer left from until the pointer comes back. For a partial
//! sweep that is when the pointer angle is inside the sweep again. For a full
//! circle the pointer is followed continuously, so the pin holds until it
//! crosses the seam back.

use crate::axis::AxisSpan;
use crate::cursor::behavior::{BehaviorAxes, CursorBehavior};
use crate::cursor::{CursorGeometry, Selection, lock_ranges, pan_window};
use crate::geom::{
    Point, RADIANS, angle_of, distance, fit_to_range, normalize_signed, round_to, unwrap_angle,
};
use crate::path::{ArcSpec, Path, arc, arc_to};
use crate::range::AxisRange;
use crate::transform::{CircleGeometry, CircularTransform};

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAngles {
    down: f64,
    current: f64,
    /// Pointer angle followed without wrapping since the drag began.
    travel: f64,
}

/// Cursor geometry over the band between an inner and an outer radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialCursor {
    circle: CircleGeometry,
    transform: CircularTransform,
    drag: Option<DragAngles>,
}

impl RadialCursor {
    /// Cursor over `circle` inside a container of the given size.
    pub fn new(circle: CircleGeometry, width: f64, height: f64) -> Self {
        Self {
            circle,
            transform: CircularTransform::new(&circle, AxisSpan::default(), width, height),
            drag: None,
        }
    }

    /// Circle settings.
    pub fn circle(&self) -> &CircleGeometry {
        &self.circle
    }

    /// Outer radius in pixels.
    pub fn pixel_radius(&self) -> f64 {
        self.transform.pixel_radius()
    }

    /// Inner radius in pixels.
    pub fn pixel_inner_radius(&self) -> f64 {
        self.transform.pixel_inner_radius()
    }

    /// Angle of `point`, fitted into the sweep.
    pub fn angle(&self, point: Point) -> f64 {
        self.transform.point_to_angle(point)
    }

    fn start_angle(&self) -> f64 {
        self.circle.start_angle
    }

    fn end_angle(&self) -> f64 {
        self.circle.end_angle
    }

    fn sweep(&self) -> f64 {
        self.end_angle() - self.start_angle()
    }

    /// Distance of `point` from the center, limited to the band.
    fn band_radius(&self, point: Point) -> f64 {
        fit_to_range(
            distance(point, Point::ORIGIN),
            self.pixel_inner_radius(),
            self.pixel_radius(),
        )
    }

    fn radius_fraction(&self, radius: f64) -> f64 {
        (radius - self.pixel_inner_radius()) / (self.pixel_radius() - self.pixel_inner_radius())
    }

    fn angle_fraction(&self, angle: f64) -> f64 {
        (angle - self.start_angle()) / self.sweep()
    }

    /// Down and current angles of the gesture from `down` to `point`.
    fn drag_angles(&self, down: Point, point: Point) -> (f64, f64) {
        match self.drag {
            Some(angles) => (angles.down, angles.current),
            None => (self.angle(down), self.angle(point)),
        }
    }
}

impl CursorGeometry for RadialCursor {
    fn set_size(&mut self, width: f64, height: f64) {
        self.transform = CircularTransform::new(&self.circle, AxisSpan::default(), width, height);
    }

    fn fits_to_bounds(&self, point: Point) -> bool {
        self.transform.fits_to_bounds(point)
    }

    fn fix_point(&self, point: Point) -> Point {
        point
    }

    fn positions(&self, point: Point) -> (f64, f64) {
        let x = self.angle_fraction(self.angle(point));
        let y = fit_to_range(
            self.radius_fraction(distance(point, Point::ORIGIN)),
            0.0,
            1.0,
        );
        (x, y)
    }

    fn begin_drag(&mut self, down: Point) {
        let angle = self.angle(down);
        self.drag = Some(DragAngles {
            down: angle,
            current: angle,
            travel: angle,
        });
    }

    fn track(&mut self, point: Point) {
        let lo = self.start_angle().min(self.end_angle());
        let hi = self.start_angle().max(self.end_angle());
        let raw = angle_of(point);
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.travel += normalize_signed(raw - drag.travel);
        drag.current = if hi - lo >= 360.0 {
            fit_to_range(drag.travel, lo, hi)
        } else {
            let candidate = unwrap_angle(raw, lo);
            if candidate <= hi {
                candidate
            } else if drag.current - lo <= hi - drag.current {
                lo
            } else {
                hi
            }
        };
    }

    fn end_drag(&mut self) {
        self.drag = None;
    }

    fn selection(&self, behavior: CursorBehavior, down: Point, point: Point) -> Option<Selection> {
        if !behavior.uses_selection() {
            return None;
        }
        let (down_angle, angle) = self.drag_angles(down, point);
        let down_radius = self.band_radius(down);
        let current_radius = self.band_radius(point);
        let radius = self.pixel_radius();
        let inner_radius = self.pixel_inner_radius();

        let path = match behavior.axes() {
            BehaviorAxes::X => {
                arc(&ArcSpec::new(down_angle, angle - down_angle, radius, inner_radius)).path
            }
            BehaviorAxes::Y => {
                let start = self.start_angle();
                let end = self.end_angle();
                let mut path = Path::new();
                path.move_to(Point::polar(start, current_radius));
                path.extend(arc_to(start, end - start, current_radius, current_radius));
                path.line_to(Point::polar(end, down_radius));
                path.extend(arc_to(end, start - end, down_radius, down_radius));
                path.close();
                path
            }
            BehaviorAxes::XY => {
                arc(&ArcSpec::new(
                    down_angle,
                    angle - down_angle,
                    down_radius.max(current_radius),
                    down_radius.min(current_radius),
                ))
                .path
            }
        };
        Some(Selection::Wedge(path))
    }

    fn drag_distance(&self, axes: BehaviorAxes, down: Point, point: Point) -> f64 {
        match axes {
            BehaviorAxes::X => {
                let (down_angle, angle) = self.drag_angles(down, point);
                (angle - down_angle).abs() * RADIANS * self.pixel_radius()
            }
            BehaviorAxes::Y => (self.band_radius(point) - self.band_radius(down)).abs(),
            BehaviorAxes::XY => distance(down, point),
        }
    }

    fn ranges(&self, behavior: CursorBehavior, down: Point, point: Point) -> (AxisRange, AxisRange) {
        let (down_angle, angle) = self.drag_angles(down, point);
        let x = AxisRange::new(self.angle_fraction(down_angle), self.angle_fraction(angle))
            .rounded(5)
            .sorted();
        let y = AxisRange::new(
            self.radius_fraction(self.band_radius(down)),
            self.radius_fraction(self.band_radius(point)),
        )
        .rounded(5)
        .sorted();
        lock_ranges(behavior.axes(), x, y)
    }

    fn panning_ranges(
        &self,
        behavior: CursorBehavior,
        down: Point,
        point: Point,
    ) -> (AxisRange, AxisRange) {
        let (down_angle, angle) = self.drag_angles(down, point);
        let delta_x = round_to((down_angle - angle) / self.sweep(), 5);
        let delta_y = round_to(
            (self.band_radius(down) - self.band_radius(point))
                / (self.pixel_radius() - self.pixel_inner_radius()),
            5,
        );
        lock_ranges(behavior.axes(), pan_window(delta_x), pan_window(delta_y))
    }

    fn line_x(&self, point: Point, cell: Option<(Point, Point)>) -> Path {
        let angle = self.angle(point);
        let radius = self.pixel_radius();
        let inner_radius = self.pixel_inner_radius();
        match cell {
            Some((start, end)) => {
                let mut cell_arc = self.angle(end) - self.angle(start);
                if self.start_angle() < self.end_angle() {
                    if cell_arc < 0.0 {
                        cell_arc += 360.0;
                    }
                } else if cell_arc > 0.0 {
                    cell_arc -= 360.0;
                }
                arc(&ArcSpec::new(angle - cell_arc / 2.0, cell_arc, radius, inner_radius)).path
            }
            None => Path::polyline(&[
                Point::polar(angle, inner_radius),
                Point::polar(angle, radius),
            ]),
        }
    }

    fn line_y(&self, point: Point, cell: Option<(Point, Point)>) -> Path {
        let start = self.start_angle();
        let sweep = self.sweep();
        match cell {
            Some((from, to)) => {
                let a = self.band_radius(from);
                let b = self.band_radius(to);
                arc(&ArcSpec::new(start, sweep, a.max(b), a.min(b))).path
            }
            None => {
                let radius = fit_to_range(distance(point, Point::ORIGIN), 0.0, self.pixel_radius());
                let mut path = Path::new();
                path.move_to(Point::polar(start, radius));
                path.extend(arc_to(start, sweep, radius, radius));
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radius::Radius;

    fn cursor() -> RadialCursor {
        RadialCursor::new(
            CircleGeometry::default().with_inner_radius(Radius::Pixels(20.0)),
            200.0,
            200.0,
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn bounds_follow_band() {
        let cursor = cursor();
        assert!(cursor.fits_to_bounds(Point::new(50.0, 0.0)));
        assert!(cursor.fits_to_bounds(Point::new(19.5, 0.0)));
        assert!(!cursor.fits_to_bounds(Point::new(10.0, 0.0)));
        assert!(!cursor.fits_to_bounds(Point::new(0.0, 101.5)));
    }

    #[test]
    fn positions_are_angle_and_radius_fractions() {
        let (x, y) = cursor().positions(Point::new(60.0, 0.0));
        assert!(close(x, 0.25));
        assert!(close(y, 0.5));
        let (_, y) = cursor().positions(Point::new(5.0, 0.0));
        assert_eq!(y, 0.0);
    }

    #[test]
    fn angular_ranges_are_sorted() {
        let (x, y) = cursor().ranges(
            CursorBehavior::ZoomX,
            Point::new(0.0, 60.0),
            Point::new(60.0, 0.0),
        );
        assert_eq!(x, AxisRange::new(0.25, 0.5));
        assert_eq!(y, AxisRange::FULL);
    }

    #[test]
    fn radial_ranges_use_band() {
        let (x, y) = cursor().ranges(
            CursorBehavior::ZoomY,
            Point::new(100.0, 0.0),
            Point::new(0.0, 60.0),
        );
        assert_eq!(x, AxisRange::FULL);
        assert_eq!(y, AxisRange::new(0.5, 1.0));
    }

    #[test]
    fn drag_across_seam_pins_to_boundary() {
        let mut cursor = cursor();
        // just left of the top, near the end of the sweep
        let down = Point::new(-10.0, -60.0);
        cursor.begin_drag(down);
        cursor.track(Point::new(-3.0, -60.0));
        // crossing to the right of the top wraps to the start of the sweep
        cursor.track(Point::new(5.0, -60.0));
        let (down_angle, current) = cursor.drag_angles(down, Point::ORIGIN);
        assert!(down_angle > 260.0);
        assert_eq!(current, 270.0);

        let (x, _) = cursor.ranges(CursorBehavior::ZoomX, down, Point::new(5.0, -60.0));
        assert!(x.start > 0.97);
        assert_eq!(x.end, 1.0);
        cursor.end_drag();
    }

    #[test]
    fn drag_back_across_seam_releases_the_pin() {
        let mut cursor = cursor();
        let down = Point::new(-10.0, -60.0);
        cursor.begin_drag(down);
        cursor.track(Point::new(5.0, -60.0));
        cursor.track(Point::new(40.0, -40.0));
        assert_eq!(cursor.drag_angles(down, Point::ORIGIN).1, 270.0);
        cursor.track(Point::new(-20.0, -60.0));
        let (_, current) = cursor.drag_angles(down, Point::ORIGIN);
        assert!(current > 250.0 && current < 270.0);
    }

    #[test]
    fn partial_sweep_drag_through_gap_keeps_the_boundary_it_left() {
        let mut cursor = RadialCursor::new(
            CircleGeometry::default().with_angles(0.0, 90.0),
            200.0,
            200.0,
        );
        let down = Point::polar(45.0, 50.0);
        cursor.begin_drag(down);
        for angle in [60.0, 80.0, 100.0, 140.0, 180.0, 220.0, 240.0] {
            let point = Point::polar(angle, 50.0);
            cursor.track(point);
            let (x, _) = cursor.ranges(CursorBehavior::ZoomX, down, point);
            assert_eq!(x.start, 0.5);
            if angle > 90.0 {
                assert_eq!(x.end, 1.0, "flipped at {angle}");
            }
        }

        // back inside the sweep the pin is released
        let back = Point::polar(70.0, 50.0);
        cursor.track(back);
        let (x, _) = cursor.ranges(CursorBehavior::ZoomX, down, back);
        assert!(close(x.start, 0.5));
        assert!(close(x.end, 0.77778));
        cursor.end_drag();
    }

    #[test]
    fn xy_selection_spans_smaller_to_larger_radius() {
        let cursor = cursor();
        let selection = cursor
            .selection(CursorBehavior::SelectXY, Point::new(80.0, 0.0), Point::new(0.0, 40.0))
            .expect("selection");
        let bounds = selection.path().bounds().expect("wedge");
        assert!(close(bounds.max.x, 80.0));
        assert!(close(bounds.max.y, 80.0));
        assert!(close(bounds.min.x, 0.0));
        assert!(close(bounds.min.y, 0.0));
    }

    #[test]
    fn y_selection_covers_whole_sweep() {
        let cursor = cursor();
        let selection = cursor
            .selection(CursorBehavior::ZoomY, Point::new(40.0, 0.0), Point::new(80.0, 0.0))
            .expect("selection");
        let bounds = selection.path().bounds().expect("ring");
        // the left extreme is a flattened sample, not an arc endpoint
        assert!((bounds.min.x + 80.0).abs() < 0.5);
        assert!(close(bounds.max.y, 80.0));
    }

    #[test]
    fn x_selection_spans_band() {
        let cursor = cursor();
        let selection = cursor
            .selection(CursorBehavior::ZoomX, Point::new(50.0, 0.0), Point::new(0.0, 50.0))
            .expect("selection");
        let bounds = selection.path().bounds().expect("wedge");
        assert!(close(bounds.max.x, 100.0));
        assert!(close(bounds.max.y, 100.0));
    }

    #[test]
    fn drag_distance_on_angle_is_arc_length() {
        let cursor = cursor();
        let length = cursor.drag_distance(
            BehaviorAxes::X,
            Point::new(50.0, 0.0),
            Point::new(0.0, 50.0),
        );
        assert!(close(length, std::f64::consts::FRAC_PI_2 * 100.0));
    }

    #[test]
    fn line_x_is_radial_segment() {
        let path = cursor().line_x(Point::new(30.0, 0.0), None);
        let bounds = path.bounds().expect("line");
        assert!(close(bounds.min.x, 20.0));
        assert!(close(bounds.max.x, 100.0));
    }

    #[test]
    fn line_x_band_is_centered_on_pointer() {
        let cell = Some((Point::polar(-10.0, 50.0), Point::polar(10.0, 50.0)));
        let path = cursor().line_x(Point::new(50.0, 0.0), cell);
        let bounds = path.bounds().expect("band");
        assert!(close(bounds.max.x, 100.0));
        assert!(bounds.min.y < 0.0 && bounds.max.y > 0.0);
        assert!(close(bounds.min.y, -bounds.max.y));
    }

    #[test]
    fn pan_y_window_from_radius_change() {
        let (x, y) = cursor().panning_ranges(
            CursorBehavior::PanY,
            Point::new(60.0, 0.0),
            Point::new(52.0, 0.0),
        );
        assert_eq!(x, AxisRange::FULL);
        assert!(close(y.start, 0.1));
        assert!(close(y.end, 1.1));
    }
}
