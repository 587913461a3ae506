//! Chart cursor: pointer gestures turned into zoom, select, and pan ranges.
//!
//! A [`Cursor`] owns its line and selection state and delegates geometry to
//! one of two strategies: [`CartesianCursor`] for rectangular plot areas and
//! [`RadialCursor`] for polar ones. Handlers take points in the cursor's local
//! frame (see [`Cursor::to_local`]) and return the events they raised.

pub mod behavior;
pub mod cartesian;
pub mod config;
pub mod host;
pub mod radial;
pub mod snap;

use tracing::{debug, trace};

use crate::axis::AxisId;
use crate::geom::{Point, Rect, distance};
use crate::path::Path;
use crate::range::AxisRange;
use crate::render::{RenderList, ShapeStyle};
use crate::style::Theme;

pub use behavior::{BehaviorAxes, CursorBehavior, GeneralBehavior};
pub use cartesian::CartesianCursor;
pub use config::{CursorConfig, RadialCursorConfig};
pub use host::{CursorHost, NullHost};
pub use radial::RadialCursor;
pub use snap::CursorLine;

/// Pixels a pan drag must cover before panning notifications start.
const PAN_START_DISTANCE: f64 = 3.0;

/// Shape of the area being selected.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Rectangle in a Cartesian plot area.
    Rect(Rect),
    /// Polar wedge or ring relative to the circle center.
    Wedge(Path),
}

impl Selection {
    /// Outline of the selection.
    pub fn path(&self) -> Path {
        match self {
            Self::Rect(rect) => Path::rectangle(*rect),
            Self::Wedge(path) => path.clone(),
        }
    }
}

/// Pointer style a host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerStyle {
    /// Platform default.
    #[default]
    Default,
    /// A closed hand while panning.
    Grabbing,
}

/// Notifications raised by cursor handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorEvent {
    /// Normalized pointer position changed.
    CursorPositionChanged {
        /// Horizontal or angular position.
        x: f64,
        /// Vertical or radial position.
        y: f64,
    },
    /// A zoom drag started.
    ZoomStarted,
    /// A zoom drag finished.
    ZoomEnded {
        /// Horizontal or angular range.
        x: AxisRange,
        /// Vertical or radial range.
        y: AxisRange,
    },
    /// A select drag started.
    SelectStarted,
    /// A select drag finished.
    SelectEnded {
        /// Horizontal or angular range.
        x: AxisRange,
        /// Vertical or radial range.
        y: AxisRange,
    },
    /// A pan drag started.
    PanStarted,
    /// The pan window moved.
    Panning {
        /// Horizontal or angular window.
        x: AxisRange,
        /// Vertical or radial window.
        y: AxisRange,
    },
    /// A pan drag finished.
    PanEnded {
        /// Horizontal or angular window.
        x: AxisRange,
        /// Vertical or radial window.
        y: AxisRange,
    },
    /// A drag ended within the hit tolerance and was discarded.
    BehaviorCanceled,
    /// The host should switch pointer style.
    PointerStyleChanged(PointerStyle),
}

/// Geometry shared by Cartesian and radial cursors.
pub trait CursorGeometry {
    /// Update the area the cursor covers.
    fn set_size(&mut self, width: f64, height: f64);

    /// Whether `point` is over the cursor area.
    fn fits_to_bounds(&self, point: Point) -> bool;

    /// Limit a dragged point to the area.
    fn fix_point(&self, point: Point) -> Point;

    /// Normalized X and Y positions of `point`.
    fn positions(&self, point: Point) -> (f64, f64);

    /// A drag started at `down`.
    fn begin_drag(&mut self, _down: Point) {}

    /// The drag moved to `point`.
    fn track(&mut self, _point: Point) {}

    /// The drag finished.
    fn end_drag(&mut self) {}

    /// Selection shape for a drag from `down` to `point`.
    fn selection(&self, behavior: CursorBehavior, down: Point, point: Point) -> Option<Selection>;

    /// Distance of a drag along the axes a behavior acts on.
    fn drag_distance(&self, axes: BehaviorAxes, down: Point, point: Point) -> f64;

    /// Sorted zoom or select ranges of a drag.
    fn ranges(&self, behavior: CursorBehavior, down: Point, point: Point) -> (AxisRange, AxisRange);

    /// Pan windows of a drag.
    fn panning_ranges(
        &self,
        behavior: CursorBehavior,
        down: Point,
        point: Point,
    ) -> (AxisRange, AxisRange);

    /// Outline of the X line at `point`, or a band over `cell`.
    fn line_x(&self, point: Point, cell: Option<(Point, Point)>) -> Path;

    /// Outline of the Y line at `point`, or a band over `cell`.
    fn line_y(&self, point: Point, cell: Option<(Point, Point)>) -> Path;
}

/// Replace the range of the axis a behavior leaves alone with the full window.
pub(crate) fn lock_ranges(axes: BehaviorAxes, x: AxisRange, y: AxisRange) -> (AxisRange, AxisRange) {
    match axes {
        BehaviorAxes::X => (x, AxisRange::FULL),
        BehaviorAxes::Y => (AxisRange::FULL, y),
        BehaviorAxes::XY => (x, y),
    }
}

/// Unit window shifted by `delta`.
///
/// The window is not clamped here; how far a pan may go past the data is up
/// to whoever applies it (see `ChartContext::with_max_pan_out`).
pub(crate) fn pan_window(delta: f64) -> AxisRange {
    AxisRange::shifted_window(delta)
}

/// Geometry strategy of a cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorKind {
    /// Rectangular plot area.
    Cartesian(CartesianCursor),
    /// Circle or circular band.
    Radial(RadialCursor),
}

impl CursorKind {
    fn geometry(&self) -> &dyn CursorGeometry {
        match self {
            Self::Cartesian(cursor) => cursor,
            Self::Radial(cursor) => cursor,
        }
    }

    fn geometry_mut(&mut self) -> &mut dyn CursorGeometry {
        match self {
            Self::Cartesian(cursor) => cursor,
            Self::Radial(cursor) => cursor,
        }
    }
}

/// Interactive chart cursor.
#[derive(Debug, Clone)]
pub struct Cursor {
    config: CursorConfig,
    kind: CursorKind,
    area: Rect,
    visible: bool,
    point: Point,
    down_point: Option<Point>,
    selection: Option<Selection>,
    selection_visible: bool,
    x_range: Option<AxisRange>,
    y_range: Option<AxisRange>,
    x_position: Option<f64>,
    y_position: Option<f64>,
    line_x: CursorLine,
    line_y: CursorLine,
    pointer_style: PointerStyle,
}

impl Cursor {
    fn with_kind(config: CursorConfig, kind: CursorKind) -> Self {
        Self {
            config,
            kind,
            area: Rect::default(),
            visible: false,
            point: Point::ORIGIN,
            down_point: None,
            selection: None,
            selection_visible: false,
            x_range: None,
            y_range: None,
            x_position: None,
            y_position: None,
            line_x: CursorLine::default(),
            line_y: CursorLine::default(),
            pointer_style: PointerStyle::Default,
        }
    }

    /// Cursor over a rectangular plot area.
    pub fn cartesian(config: CursorConfig) -> Self {
        Self::with_kind(config, CursorKind::Cartesian(CartesianCursor::default()))
    }

    /// Cursor over a circle.
    pub fn radial(config: RadialCursorConfig) -> Self {
        let kind = CursorKind::Radial(RadialCursor::new(config.circle, 0.0, 0.0));
        Self::with_kind(config.cursor, kind)
    }

    /// Place the cursor over `area`, given in container coordinates.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.kind
            .geometry_mut()
            .set_size(area.width(), area.height());
    }

    /// Area in container coordinates.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Container position of the local frame origin.
    pub fn origin(&self) -> Point {
        match self.kind {
            CursorKind::Cartesian(_) => self.area.min,
            CursorKind::Radial(_) => self.area.center(),
        }
    }

    /// Convert a container point into the local frame handlers expect.
    pub fn to_local(&self, point: Point) -> Point {
        let origin = self.origin();
        Point::new(point.x - origin.x, point.y - origin.y)
    }

    /// Settings.
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Change the drag behavior. Any drag in progress keeps its gesture state.
    pub fn set_behavior(&mut self, behavior: CursorBehavior) {
        self.config.behavior = behavior;
    }

    /// Geometry strategy.
    pub fn kind(&self) -> &CursorKind {
        &self.kind
    }

    /// Whether the cursor is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.down_point.is_some()
    }

    /// Where the current drag started.
    pub fn down_point(&self) -> Option<Point> {
        self.down_point
    }

    /// Last pointer position.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Visible selection shape.
    pub fn selection(&self) -> Option<&Selection> {
        if self.selection_visible {
            self.selection.as_ref()
        } else {
            None
        }
    }

    /// Whether the selection element is shown, even while still empty.
    pub fn is_selection_visible(&self) -> bool {
        self.selection_visible
    }

    /// Horizontal or angular range of the last gesture.
    pub fn x_range(&self) -> Option<AxisRange> {
        self.x_range
    }

    /// Vertical or radial range of the last gesture.
    pub fn y_range(&self) -> Option<AxisRange> {
        self.y_range
    }

    /// Normalized horizontal or angular pointer position.
    pub fn x_position(&self) -> Option<f64> {
        self.x_position
    }

    /// Normalized vertical or radial pointer position.
    pub fn y_position(&self) -> Option<f64> {
        self.y_position
    }

    /// X line state.
    pub fn line_x(&self) -> &CursorLine {
        &self.line_x
    }

    /// Y line state.
    pub fn line_y(&self) -> &CursorLine {
        &self.line_y
    }

    /// Pointer style the host should show.
    pub fn pointer_style(&self) -> PointerStyle {
        self.pointer_style
    }

    /// Whether series should hide their tooltips right now.
    pub fn series_tooltips_hidden(&self) -> bool {
        self.config.hide_series_tooltips_on_selection
            && self.is_dragging()
            && self.config.behavior.uses_selection()
    }

    /// Handle pointer movement.
    pub fn pointer_move(&mut self, point: Point, host: Option<&dyn CursorHost>) -> Vec<CursorEvent> {
        let mut events = Vec::new();
        let dragging = self.is_dragging();
        if !dragging && !self.kind.geometry().fits_to_bounds(point) {
            if self.visible {
                self.visible = false;
                debug!("cursor left its area");
            }
            return events;
        }

        let point = if dragging {
            self.kind.geometry().fix_point(point)
        } else {
            point
        };
        self.visible = true;
        self.point = point;
        self.update_positions(host, &mut events);
        self.update_lines(point, host.unwrap_or(&NullHost), dragging);

        if let Some(down) = self.down_point {
            let behavior = self.config.behavior;
            self.kind.geometry_mut().track(point);
            match behavior.general() {
                Some(GeneralBehavior::Pan) => {
                    if distance(down, point) > PAN_START_DISTANCE {
                        let (x, y) = self.kind.geometry().panning_ranges(behavior, down, point);
                        self.x_range = Some(x);
                        self.y_range = Some(y);
                        events.push(CursorEvent::Panning { x, y });
                    }
                }
                Some(GeneralBehavior::Zoom | GeneralBehavior::Select) => {
                    self.selection = self.kind.geometry().selection(behavior, down, point);
                }
                None => {}
            }
        }
        trace!(x = point.x, y = point.y, dragging, "cursor moved");
        events
    }

    /// Handle a pointer press.
    pub fn pointer_down(&mut self, point: Point, host: Option<&dyn CursorHost>) -> Vec<CursorEvent> {
        let mut events = Vec::new();
        if !self.kind.geometry().fits_to_bounds(point) {
            return events;
        }
        self.visible = true;
        self.point = point;
        self.update_lines(point, host.unwrap_or(&NullHost), false);

        let behavior = self.config.behavior;
        let Some(general) = behavior.general() else {
            return events;
        };
        self.down_point = Some(point);
        self.kind.geometry_mut().begin_drag(point);
        self.x_range = None;
        self.y_range = None;
        self.selection = None;

        match general {
            GeneralBehavior::Zoom => {
                self.selection_visible = true;
                events.push(CursorEvent::ZoomStarted);
            }
            GeneralBehavior::Select => {
                self.selection_visible = true;
                events.push(CursorEvent::SelectStarted);
            }
            GeneralBehavior::Pan => {
                self.selection_visible = false;
                events.push(CursorEvent::PanStarted);
                self.set_pointer_style(PointerStyle::Grabbing, &mut events);
            }
        }
        debug!(%behavior, x = point.x, y = point.y, "cursor drag started");
        events
    }

    /// Handle a pointer release.
    pub fn pointer_up(&mut self, point: Point, host: Option<&dyn CursorHost>) -> Vec<CursorEvent> {
        let mut events = Vec::new();
        let Some(down) = self.down_point else {
            return events;
        };
        let behavior = self.config.behavior;
        let point = self.kind.geometry().fix_point(point);
        self.kind.geometry_mut().track(point);

        let dragged = self
            .kind
            .geometry()
            .drag_distance(behavior.axes(), down, point);
        let general = behavior.general();

        if dragged > self.config.hit_tolerance {
            let geometry = self.kind.geometry();
            let (x, y) = match general {
                Some(GeneralBehavior::Pan) => geometry.panning_ranges(behavior, down, point),
                _ => geometry.ranges(behavior, down, point),
            };
            self.x_range = Some(x);
            self.y_range = Some(y);
            match general {
                Some(GeneralBehavior::Zoom) => {
                    self.selection_visible = false;
                    events.push(CursorEvent::ZoomEnded { x, y });
                }
                Some(GeneralBehavior::Select) => {
                    self.selection = geometry.selection(behavior, down, point);
                    events.push(CursorEvent::SelectEnded { x, y });
                }
                Some(GeneralBehavior::Pan) => {
                    events.push(CursorEvent::PanEnded { x, y });
                    self.set_pointer_style(PointerStyle::Default, &mut events);
                }
                None => {}
            }
            debug!(%behavior, ?x, ?y, "cursor drag finished");
        } else {
            self.selection_visible = false;
            self.selection = None;
            self.x_range = None;
            self.y_range = None;
            events.push(CursorEvent::BehaviorCanceled);
            if general == Some(GeneralBehavior::Pan) {
                self.set_pointer_style(PointerStyle::Default, &mut events);
            }
            debug!(%behavior, dragged, "cursor drag cancelled");
        }

        self.kind.geometry_mut().end_drag();
        self.down_point = None;
        self.point = point;
        self.update_positions(host, &mut events);
        events
    }

    /// Handle the pointer leaving the chart.
    pub fn pointer_leave(&mut self) {
        if !self.is_dragging() && self.visible {
            self.visible = false;
            debug!("cursor hidden");
        }
    }

    /// Hide a persisted selection and forget its ranges.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.selection_visible = false;
        self.x_range = None;
        self.y_range = None;
    }

    /// An axis tooltip moved; lines bound to that axis follow it at once.
    pub fn axis_tooltip_moved(&mut self, axis: AxisId, point: Point) {
        if self.config.x_axis == Some(axis) {
            self.line_x.jump_to(point);
        }
        if self.config.y_axis == Some(axis) {
            self.line_y.jump_to(point);
        }
    }

    /// Advance line animations by `dt` seconds; returns whether any is still running.
    pub fn tick(&mut self, dt: f64) -> bool {
        let x = self.line_x.tick(dt);
        let y = self.line_y.tick(dt);
        x || y
    }

    /// Lines and selection in container coordinates.
    pub fn render(&self, theme: &Theme) -> RenderList {
        let mut list = RenderList::new();
        let geometry = self.kind.geometry();
        if let Some(selection) = self.selection() {
            list.push_path(selection.path(), theme.selection);
        }
        if self.visible {
            let band = ShapeStyle::filled(theme.cursor_band);
            if self.config.line_x {
                let cell = self.line_x.cell();
                let style = if cell.is_some() { band } else { theme.cursor_line.shape() };
                list.push_path(geometry.line_x(self.line_x.point(), cell), style);
            }
            if self.config.line_y {
                let cell = self.line_y.cell();
                let style = if cell.is_some() { band } else { theme.cursor_line.shape() };
                list.push_path(geometry.line_y(self.line_y.point(), cell), style);
            }
        }
        let origin = self.origin();
        list.translated(origin.x, origin.y)
    }

    fn update_positions(&mut self, host: Option<&dyn CursorHost>, events: &mut Vec<CursorEvent>) {
        if host.is_none() {
            return;
        }
        let (x, y) = self.kind.geometry().positions(self.point);
        self.x_position = Some(x);
        self.y_position = Some(y);
        events.push(CursorEvent::CursorPositionChanged { x, y });
    }

    fn update_lines(&mut self, point: Point, host: &dyn CursorHost, dragging: bool) {
        let snap_target = if dragging || self.config.snap_to_series.is_empty() {
            None
        } else {
            snap::nearest_tooltip(
                host,
                &self.config.snap_to_series,
                point,
                self.config.max_tooltip_distance,
            )
        };
        let duration = self.config.snap_duration_ms / 1000.0;
        let bindings = [
            (self.config.x_axis, self.config.full_width_line_x),
            (self.config.y_axis, self.config.full_width_line_y),
        ];
        for (line, (axis, full_width)) in [&mut self.line_x, &mut self.line_y]
            .into_iter()
            .zip(bindings)
        {
            let axis_point = axis.and_then(|axis| host.axis_tooltip_point(axis));
            let cell = match axis {
                Some(axis) if full_width => host.axis_cell(axis),
                _ => None,
            };
            line.set_cell(cell);
            match (axis_point, snap_target) {
                (Some(axis_point), _) => line.jump_to(axis_point),
                (None, Some(target)) => line.glide_to(target, duration),
                (None, None) => line.jump_to(point),
            }
        }
    }

    fn set_pointer_style(&mut self, style: PointerStyle, events: &mut Vec<CursorEvent>) {
        if self.pointer_style != style {
            self.pointer_style = style;
            events.push(CursorEvent::PointerStyleChanged(style));
        }
    }
}
