//! Rectangular plot-area cursor geometry.

use crate::cursor::behavior::{BehaviorAxes, CursorBehavior};
use crate::cursor::{CursorGeometry, Selection, lock_ranges, pan_window};
use crate::geom::{Point, Rect, round_to};
use crate::path::Path;
use crate::range::AxisRange;

/// Cursor geometry over a `width` x `height` plot area.
///
/// Points are relative to the area's top-left corner. Y positions and ranges
/// are inverted so 0 is the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianCursor {
    width: f64,
    height: f64,
}

impl CartesianCursor {
    /// Cursor over an area of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Area height.
    pub fn height(&self) -> f64 {
        self.height
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn x_fraction(&self, x: f64) -> f64 {
        round_to(x / self.width, 5)
    }

    fn y_fraction(&self, y: f64) -> f64 {
        round_to(1.0 - y / self.height, 5)
    }
}

impl CursorGeometry for CartesianCursor {
    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn fits_to_bounds(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn fix_point(&self, point: Point) -> Point {
        self.bounds().clamp(point)
    }

    fn positions(&self, point: Point) -> (f64, f64) {
        let point = self.fix_point(point);
        (point.x / self.width, 1.0 - point.y / self.height)
    }

    fn selection(&self, behavior: CursorBehavior, down: Point, point: Point) -> Option<Selection> {
        if !behavior.uses_selection() {
            return None;
        }
        let rect = match behavior.axes() {
            BehaviorAxes::X => Rect::from_corners(
                Point::new(down.x, 0.0),
                Point::new(point.x, self.height),
            ),
            BehaviorAxes::Y => Rect::from_corners(
                Point::new(0.0, down.y),
                Point::new(self.width, point.y),
            ),
            BehaviorAxes::XY => Rect::from_corners(down, point),
        };
        Some(Selection::Rect(rect))
    }

    fn drag_distance(&self, axes: BehaviorAxes, down: Point, point: Point) -> f64 {
        match axes {
            BehaviorAxes::X => (point.x - down.x).abs(),
            BehaviorAxes::Y => (point.y - down.y).abs(),
            BehaviorAxes::XY => (point.x - down.x).hypot(point.y - down.y),
        }
    }

    fn ranges(&self, behavior: CursorBehavior, down: Point, point: Point) -> (AxisRange, AxisRange) {
        let x = AxisRange::new(self.x_fraction(down.x), self.x_fraction(point.x)).sorted();
        let y = AxisRange::new(self.y_fraction(down.y), self.y_fraction(point.y)).sorted();
        lock_ranges(behavior.axes(), x, y)
    }

    fn panning_ranges(
        &self,
        behavior: CursorBehavior,
        down: Point,
        point: Point,
    ) -> (AxisRange, AxisRange) {
        let delta_x = self.x_fraction(down.x) - self.x_fraction(point.x);
        let delta_y = self.y_fraction(down.y) - self.y_fraction(point.y);
        lock_ranges(behavior.axes(), pan_window(delta_x), pan_window(delta_y))
    }

    fn line_x(&self, point: Point, cell: Option<(Point, Point)>) -> Path {
        match cell {
            Some((start, end)) => Path::rectangle(Rect::from_corners(
                Point::new(start.x, 0.0),
                Point::new(end.x, self.height),
            )),
            None => Path::polyline(&[Point::new(point.x, 0.0), Point::new(point.x, self.height)]),
        }
    }

    fn line_y(&self, point: Point, cell: Option<(Point, Point)>) -> Path {
        match cell {
            Some((start, end)) => Path::rectangle(Rect::from_corners(
                Point::new(0.0, start.y),
                Point::new(self.width, end.y),
            )),
            None => Path::polyline(&[Point::new(0.0, point.y), Point::new(self.width, point.y)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> CartesianCursor {
        CartesianCursor::new(200.0, 100.0)
    }

    #[test]
    fn bounds_are_inclusive() {
        let cursor = cursor();
        assert!(cursor.fits_to_bounds(Point::new(0.0, 0.0)));
        assert!(cursor.fits_to_bounds(Point::new(200.0, 100.0)));
        assert!(!cursor.fits_to_bounds(Point::new(201.0, 50.0)));
    }

    #[test]
    fn positions_invert_y() {
        let (x, y) = cursor().positions(Point::new(50.0, 25.0));
        assert_eq!(x, 0.25);
        assert_eq!(y, 0.75);
    }

    #[test]
    fn zoom_x_selection_spans_full_height() {
        let selection = cursor()
            .selection(CursorBehavior::ZoomX, Point::new(150.0, 10.0), Point::new(100.0, 60.0))
            .expect("selection");
        let Selection::Rect(rect) = selection else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.min, Point::new(100.0, 0.0));
        assert_eq!(rect.max, Point::new(150.0, 100.0));
    }

    #[test]
    fn zoom_y_selection_spans_full_width() {
        let selection = cursor()
            .selection(CursorBehavior::SelectY, Point::new(20.0, 80.0), Point::new(40.0, 30.0))
            .expect("selection");
        assert_eq!(
            selection,
            Selection::Rect(Rect::from_corners(Point::new(0.0, 30.0), Point::new(200.0, 80.0)))
        );
    }

    #[test]
    fn pan_has_no_selection() {
        assert!(cursor()
            .selection(CursorBehavior::PanXY, Point::ORIGIN, Point::new(5.0, 5.0))
            .is_none());
    }

    #[test]
    fn xy_ranges_are_sorted_and_inverted() {
        let (x, y) = cursor().ranges(
            CursorBehavior::ZoomXY,
            Point::new(150.0, 20.0),
            Point::new(50.0, 70.0),
        );
        assert_eq!(x, AxisRange::new(0.25, 0.75));
        assert_eq!(y, AxisRange::new(0.3, 0.8));
    }

    #[test]
    fn pan_window_follows_drag() {
        let (x, y) = cursor().panning_ranges(
            CursorBehavior::PanX,
            Point::new(100.0, 50.0),
            Point::new(90.0, 50.0),
        );
        assert!((x.start - 0.05).abs() < 1e-12);
        assert!((x.end - 1.05).abs() < 1e-12);
        assert_eq!(y, AxisRange::FULL);
    }

    #[test]
    fn pan_window_keeps_the_whole_drag() {
        let (x, y) = cursor().panning_ranges(
            CursorBehavior::PanXY,
            Point::new(200.0, 50.0),
            Point::new(0.0, 50.0),
        );
        assert!((x.start - 1.0).abs() < 1e-12);
        assert!((x.end - 2.0).abs() < 1e-12);
        assert_eq!(y, AxisRange::FULL);
    }

    #[test]
    fn drag_distance_per_axis() {
        let cursor = cursor();
        let down = Point::new(10.0, 10.0);
        let up = Point::new(13.0, 14.0);
        assert_eq!(cursor.drag_distance(BehaviorAxes::X, down, up), 3.0);
        assert_eq!(cursor.drag_distance(BehaviorAxes::Y, down, up), 4.0);
        assert_eq!(cursor.drag_distance(BehaviorAxes::XY, down, up), 5.0);
    }

    #[test]
    fn full_width_line_covers_cell() {
        let path = cursor().line_x(
            Point::new(30.0, 10.0),
            Some((Point::new(20.0, 0.0), Point::new(40.0, 0.0))),
        );
        let bounds = path.bounds().expect("band");
        assert_eq!(bounds.min, Point::new(20.0, 0.0));
        assert_eq!(bounds.max, Point::new(40.0, 100.0));
    }
}
