//! What a cursor asks of the chart that owns it.

use crate::axis::AxisId;
use crate::geom::Point;
use crate::series::{SeriesId, SeriesTooltip};

/// Chart-side collaborator queried by a cursor while it handles pointer input.
///
/// All points are in the cursor's local frame: the plot area's top-left corner
/// for Cartesian cursors, the circle center for radial ones.
pub trait CursorHost {
    /// Start and end points of the axis cell under the pointer, used to widen
    /// cursor lines into bands.
    fn axis_cell(&self, axis: AxisId) -> Option<(Point, Point)>;

    /// Where the axis tooltip currently points.
    fn axis_tooltip_point(&self, axis: AxisId) -> Option<Point>;

    /// Last tooltip state of a series.
    fn series_tooltip(&self, series: SeriesId) -> Option<SeriesTooltip>;
}

/// A chart with no axes or series bound to the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl CursorHost for NullHost {
    fn axis_cell(&self, _axis: AxisId) -> Option<(Point, Point)> {
        None
    }

    fn axis_tooltip_point(&self, _axis: AxisId) -> Option<Point> {
        None
    }

    fn series_tooltip(&self, _series: SeriesId) -> Option<SeriesTooltip> {
        None
    }
}
