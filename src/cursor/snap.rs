//! Cursor line anchors and snapping to series tooltips.

use crate::animation::{EasedPoint, Easing};
use crate::geom::{Point, distance};
use crate::series::SeriesId;

use super::host::CursorHost;

/// Where a cursor line is drawn, possibly gliding toward a snap target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CursorLine {
    point: Point,
    cell: Option<(Point, Point)>,
    animation: Option<EasedPoint>,
}

impl CursorLine {
    /// Current anchor, including any glide in progress.
    pub fn point(&self) -> Point {
        self.animation
            .as_ref()
            .map_or(self.point, EasedPoint::value)
    }

    /// Axis cell the line is widened to, if any.
    pub fn cell(&self) -> Option<(Point, Point)> {
        self.cell
    }

    /// Whether a glide is in progress.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(crate) fn set_cell(&mut self, cell: Option<(Point, Point)>) {
        self.cell = cell;
    }

    /// Move immediately, cancelling any glide.
    pub(crate) fn jump_to(&mut self, point: Point) {
        self.animation = None;
        self.point = point;
    }

    /// Glide toward `target`, replacing any glide already running.
    pub(crate) fn glide_to(&mut self, target: Point, duration: f64) {
        let current_target = self
            .animation
            .as_ref()
            .map_or(self.point, EasedPoint::target);
        if current_target == target {
            return;
        }
        let from = self.point();
        self.point = target;
        self.animation = Some(EasedPoint::new(from, target, duration, Easing::CubicOut));
    }

    /// Advance the glide; returns whether it is still running.
    pub(crate) fn tick(&mut self, dt: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.update(dt);
        if animation.is_complete() {
            self.animation = None;
            return false;
        }
        true
    }
}

/// Tooltip point of the snapped series nearest to `pointer`.
///
/// Hidden series are skipped. A negative `max_distance` accepts any distance.
pub fn nearest_tooltip(
    host: &dyn CursorHost,
    series: &[SeriesId],
    pointer: Point,
    max_distance: f64,
) -> Option<Point> {
    series
        .iter()
        .filter_map(|id| host.series_tooltip(*id))
        .filter_map(|tooltip| tooltip.visible_point())
        .map(|point| (distance(point, pointer), point))
        .filter(|(d, _)| max_distance < 0.0 || *d <= max_distance)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisId;
    use crate::series::SeriesTooltip;
    use std::collections::HashMap;

    struct Tooltips(HashMap<SeriesId, SeriesTooltip>);

    impl CursorHost for Tooltips {
        fn axis_cell(&self, _axis: AxisId) -> Option<(Point, Point)> {
            None
        }

        fn axis_tooltip_point(&self, _axis: AxisId) -> Option<Point> {
            None
        }

        fn series_tooltip(&self, series: SeriesId) -> Option<SeriesTooltip> {
            self.0.get(&series).copied()
        }
    }

    #[test]
    fn glide_supersedes_previous_glide() {
        let mut line = CursorLine::default();
        line.glide_to(Point::new(100.0, 0.0), 1.0);
        line.tick(0.5);
        let midway = line.point();
        assert!(midway.x > 50.0 && midway.x < 100.0);
        line.glide_to(Point::new(0.0, 0.0), 1.0);
        assert_eq!(line.point(), midway);
        assert!(!line.tick(2.0));
        assert_eq!(line.point(), Point::ORIGIN);
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut line = CursorLine::default();
        line.glide_to(Point::new(10.0, 0.0), 1.0);
        line.tick(0.9);
        let before = line.point();
        line.glide_to(Point::new(10.0, 0.0), 1.0);
        assert_eq!(line.point(), before);
    }

    #[test]
    fn nearest_visible_tooltip_wins() {
        let a = SeriesId::from_raw(1);
        let b = SeriesId::from_raw(2);
        let c = SeriesId::from_raw(3);
        let host = Tooltips(HashMap::from([
            (a, SeriesTooltip::at(Point::new(50.0, 0.0))),
            (b, SeriesTooltip::at(Point::new(12.0, 0.0))),
            (c, SeriesTooltip::hidden()),
        ]));
        let pointer = Point::new(10.0, 0.0);
        assert_eq!(
            nearest_tooltip(&host, &[a, b, c], pointer, -1.0),
            Some(Point::new(12.0, 0.0))
        );
        assert_eq!(nearest_tooltip(&host, &[a, c], pointer, 20.0), None);
        assert_eq!(nearest_tooltip(&host, &[c], pointer, -1.0), None);
    }
}
