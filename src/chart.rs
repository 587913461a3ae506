//! Minimal chart state: axis spans, tooltips, and applying cursor gestures.

use std::collections::HashMap;

use tracing::debug;

use crate::axis::{AxisId, AxisSpan};
use crate::cursor::{CursorEvent, CursorHost};
use crate::geom::Point;
use crate::range::AxisRange;
use crate::series::{SeriesId, SeriesTooltip};

/// Narrowest span a zoom may produce.
const MIN_SPAN: f64 = 1e-6;

/// Default for how far a pan may reach past either end of an axis.
pub const DEFAULT_MAX_PAN_OUT: f64 = 0.1;

#[derive(Debug, Clone, Default)]
struct AxisState {
    span: AxisSpan,
    cell: Option<(Point, Point)>,
    tooltip: Option<Point>,
}

/// Axis spans and tooltip positions of a chart, driven by cursor events.
///
/// Implements [`CursorHost`] so a cursor can query it directly.
#[derive(Debug, Clone)]
pub struct ChartContext {
    axes: HashMap<AxisId, AxisState>,
    series: HashMap<SeriesId, SeriesTooltip>,
    x_axis: Option<AxisId>,
    y_axis: Option<AxisId>,
    pan_origin: Option<(AxisSpan, AxisSpan)>,
    max_pan_out: f64,
}

impl Default for ChartContext {
    fn default() -> Self {
        Self {
            axes: HashMap::new(),
            series: HashMap::new(),
            x_axis: None,
            y_axis: None,
            pan_origin: None,
            max_pan_out: DEFAULT_MAX_PAN_OUT,
        }
    }
}

impl ChartContext {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let pans reach `max_pan_out` (a fraction of the axis) past either end.
    pub fn with_max_pan_out(mut self, max_pan_out: f64) -> Self {
        self.set_max_pan_out(max_pan_out);
        self
    }

    /// Set how far pans may reach past either end of an axis.
    pub fn set_max_pan_out(&mut self, max_pan_out: f64) {
        self.max_pan_out = max_pan_out.max(0.0);
    }

    /// How far pans may reach past either end of an axis.
    pub fn max_pan_out(&self) -> f64 {
        self.max_pan_out
    }

    /// Register the axis zoomed by horizontal or angular gestures.
    pub fn with_x_axis(mut self, axis: AxisId, span: AxisSpan) -> Self {
        self.add_axis(axis, span);
        self.x_axis = Some(axis);
        self
    }

    /// Register the axis zoomed by vertical or radial gestures.
    pub fn with_y_axis(mut self, axis: AxisId, span: AxisSpan) -> Self {
        self.add_axis(axis, span);
        self.y_axis = Some(axis);
        self
    }

    /// Register an axis.
    pub fn add_axis(&mut self, axis: AxisId, span: AxisSpan) {
        self.axes.entry(axis).or_default().span = span;
    }

    /// Visible span of an axis.
    pub fn span(&self, axis: AxisId) -> Option<AxisSpan> {
        self.axes.get(&axis).map(|state| state.span)
    }

    /// Record the axis cell under the pointer.
    pub fn set_axis_cell(&mut self, axis: AxisId, cell: Option<(Point, Point)>) {
        self.axes.entry(axis).or_default().cell = cell;
    }

    /// Record where the axis tooltip points.
    pub fn set_axis_tooltip(&mut self, axis: AxisId, point: Option<Point>) {
        self.axes.entry(axis).or_default().tooltip = point;
    }

    /// Record the tooltip state of a series.
    pub fn set_series_tooltip(&mut self, series: SeriesId, tooltip: SeriesTooltip) {
        self.series.insert(series, tooltip);
    }

    /// Zoom every registered axis back out.
    pub fn reset_zoom(&mut self) {
        for state in self.axes.values_mut() {
            state.span = AxisSpan::new(0.0, 1.0).inversed(state.span.inversed);
        }
    }

    /// Apply a cursor event; returns whether any span changed.
    pub fn apply(&mut self, event: &CursorEvent) -> bool {
        match *event {
            CursorEvent::ZoomEnded { x, y } => {
                let changed_x = self.zoom(self.x_axis, x);
                let changed_y = self.zoom(self.y_axis, y);
                changed_x || changed_y
            }
            CursorEvent::PanStarted => {
                self.pan_origin = Some((
                    self.axis_span_or_default(self.x_axis),
                    self.axis_span_or_default(self.y_axis),
                ));
                false
            }
            CursorEvent::Panning { x, y } | CursorEvent::PanEnded { x, y } => {
                let Some((origin_x, origin_y)) = self.pan_origin else {
                    return false;
                };
                let max_pan_out = self.max_pan_out;
                let changed_x = self.set_span(self.x_axis, pan_span(origin_x, x, max_pan_out));
                let changed_y = self.set_span(self.y_axis, pan_span(origin_y, y, max_pan_out));
                if matches!(event, CursorEvent::PanEnded { .. }) {
                    self.pan_origin = None;
                }
                changed_x || changed_y
            }
            CursorEvent::BehaviorCanceled => {
                self.pan_origin = None;
                false
            }
            _ => false,
        }
    }

    fn axis_span_or_default(&self, axis: Option<AxisId>) -> AxisSpan {
        axis.and_then(|axis| self.span(axis)).unwrap_or_default()
    }

    fn zoom(&mut self, axis: Option<AxisId>, range: AxisRange) -> bool {
        if range == AxisRange::FULL {
            return false;
        }
        let current = self.axis_span_or_default(axis);
        self.set_span(axis, zoom_span(current, range))
    }

    fn set_span(&mut self, axis: Option<AxisId>, span: AxisSpan) -> bool {
        let Some(state) = axis.and_then(|axis| self.axes.get_mut(&axis)) else {
            return false;
        };
        if state.span == span {
            return false;
        }
        debug!(start = span.start, end = span.end, "axis span changed");
        state.span = span;
        true
    }
}

/// Narrow `span` to the part `range` covers, where `range` is relative to the
/// visible span (0 = first visible position).
pub fn zoom_span(span: AxisSpan, range: AxisRange) -> AxisSpan {
    let range = range.sorted();
    let width = span.width();
    let (start, end) = if span.inversed {
        (span.end - range.end * width, span.end - range.start * width)
    } else {
        (span.start + range.start * width, span.start + range.end * width)
    };
    let start = start.clamp(0.0, 1.0);
    let end = end.clamp(0.0, 1.0).max(start + MIN_SPAN);
    AxisSpan::new(start, end).inversed(span.inversed)
}

/// Shift `span` by a pan window, keeping its width.
///
/// The shifted span may reach `max_pan_out` past either end of `0..1` and no
/// further.
pub fn pan_span(span: AxisSpan, window: AxisRange, max_pan_out: f64) -> AxisSpan {
    let width = span.width();
    let shift = if span.inversed {
        -window.start * width
    } else {
        window.start * width
    };
    let min = -max_pan_out;
    let max = (1.0 + max_pan_out - width).max(min);
    let start = (span.start + shift).clamp(min, max);
    AxisSpan::new(start, start + width).inversed(span.inversed)
}

impl CursorHost for ChartContext {
    fn axis_cell(&self, axis: AxisId) -> Option<(Point, Point)> {
        self.axes.get(&axis).and_then(|state| state.cell)
    }

    fn axis_tooltip_point(&self, axis: AxisId) -> Option<Point> {
        self.axes.get(&axis).and_then(|state| state.tooltip)
    }

    fn series_tooltip(&self, series: SeriesId) -> Option<SeriesTooltip> {
        self.series.get(&series).copied()
    }
}
