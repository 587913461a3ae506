use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use gpui::prelude::*;
use gpui::{
    Bounds, CursorStyle, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point,
    Window, canvas, div,
};
use tracing::trace;

use crate::axis::AxisId;
use crate::chart::ChartContext;
use crate::cursor::{Cursor, CursorEvent, CursorHost, PointerStyle};
use crate::geom::{Point as ChartPoint, Rect};
use crate::render::{CircularAxisRenderer, RenderList};

use super::config::PolarViewConfig;
use super::paint::{paint_list, to_hsla};
use super::text::GpuiTextMeasurer;

struct PolarState {
    cursor: Cursor,
    axis: Option<CircularAxisRenderer>,
    chart: ChartContext,
    last_frame: Option<Instant>,
}

/// A GPUI view that draws an optional circular axis under a [`Cursor`].
///
/// Mouse input drives the cursor; finished zoom and pan gestures are applied
/// to the view's [`ChartContext`] and the axis follows the angular span.
#[derive(Clone)]
pub struct GpuiPolarView {
    state: Arc<RwLock<PolarState>>,
    config: PolarViewConfig,
}

impl GpuiPolarView {
    /// Create a view for `cursor` with the default [`PolarViewConfig`].
    pub fn new(cursor: Cursor) -> Self {
        Self::with_config(cursor, PolarViewConfig::default())
    }

    /// Create a view with a custom configuration.
    pub fn with_config(cursor: Cursor, config: PolarViewConfig) -> Self {
        let chart = ChartContext::new().with_max_pan_out(cursor.config().max_pan_out);
        Self {
            state: Arc::new(RwLock::new(PolarState {
                cursor,
                axis: None,
                chart,
                last_frame: None,
            })),
            config,
        }
    }

    /// Draw `axis` under the cursor.
    pub fn with_axis(self, axis: CircularAxisRenderer) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .axis = Some(axis);
        self
    }

    /// Use `chart` as the cursor host. Pans overshoot by the cursor's `max_pan_out`.
    pub fn with_chart(self, chart: ChartContext) -> Self {
        self.handle().write(|cursor, current| {
            *current = chart.with_max_pan_out(cursor.config().max_pan_out);
        });
        self
    }

    /// Get a handle for inspecting or mutating the cursor and chart.
    pub fn handle(&self) -> PolarHandle {
        PolarHandle {
            state: Arc::clone(&self.state),
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if self.config.clear_selection_on_press {
            state.cursor.clear_selection();
        }
        let PolarState {
            cursor, axis, chart, ..
        } = &mut *state;
        let point = cursor.to_local(to_chart_point(ev.position));
        let host: &dyn CursorHost = chart;
        let events = cursor.pointer_down(point, Some(host));
        apply_events(chart, axis.as_mut(), cursor.config().x_axis, &events);
        cx.notify();
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let PolarState {
            cursor, axis, chart, ..
        } = &mut *state;
        let point = cursor.to_local(to_chart_point(ev.position));
        let host: &dyn CursorHost = chart;
        let events = cursor.pointer_move(point, Some(host));
        apply_events(chart, axis.as_mut(), cursor.config().x_axis, &events);
        cx.notify();
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let PolarState {
            cursor, axis, chart, ..
        } = &mut *state;
        let point = cursor.to_local(to_chart_point(ev.position));
        let host: &dyn CursorHost = chart;
        let events = cursor.pointer_up(point, Some(host));
        apply_events(chart, axis.as_mut(), cursor.config().x_axis, &events);
        cx.notify();
    }

    fn on_hover(&mut self, hovered: bool, cx: &mut Context<Self>) {
        if hovered {
            return;
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.cursor.pointer_leave();
        cx.notify();
    }
}

impl Render for GpuiPolarView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let pointer = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cursor
            .pointer_style();

        div()
            .id("polar-view")
            .size_full()
            .bg(to_hsla(config.theme.background))
            .cursor(match pointer {
                PointerStyle::Default => CursorStyle::Arrow,
                PointerStyle::Grabbing => CursorStyle::ClosedHand,
            })
            .child(
                canvas(
                    move |bounds, window, _| {
                        let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
                        build_frame(&mut state, &config, bounds, window)
                    },
                    move |_, frame, window, cx| {
                        paint_list(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                this.on_hover(*hovered, cx);
            }))
    }
}

/// A handle for mutating the cursor and chart held inside a `GpuiPolarView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct PolarHandle {
    state: Arc<RwLock<PolarState>>,
}

impl PolarHandle {
    /// Read the cursor and chart.
    pub fn read<R>(&self, f: impl FnOnce(&Cursor, &ChartContext) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state.cursor, &state.chart)
    }

    /// Mutate the cursor and chart.
    pub fn write<R>(&self, f: impl FnOnce(&mut Cursor, &mut ChartContext) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let PolarState { cursor, chart, .. } = &mut *state;
        f(cursor, chart)
    }
}

fn build_frame(
    state: &mut PolarState,
    config: &PolarViewConfig,
    bounds: Bounds<Pixels>,
    window: &mut Window,
) -> RenderList {
    let pad = f64::from(config.padding_px);
    let origin = to_chart_point(bounds.origin);
    let area = Rect::from_corners(
        origin.offset(pad, pad),
        origin.offset(
            (f64::from(f32::from(bounds.size.width)) - pad).max(pad),
            (f64::from(f32::from(bounds.size.height)) - pad).max(pad),
        ),
    );
    if state.cursor.area() != area {
        state.cursor.set_area(area);
    }

    let now = Instant::now();
    let dt = state
        .last_frame
        .map_or(0.0, |last| now.duration_since(last).as_secs_f64());
    if state.cursor.tick(dt) {
        state.last_frame = Some(now);
        window.request_animation_frame();
    } else {
        state.last_frame = None;
    }

    let mut list = RenderList::new();
    if let Some(axis) = state.axis.as_mut() {
        axis.layout(area.width(), area.height(), &GpuiTextMeasurer::new(window));
        list.extend(axis.render(&config.theme).translated(area.min.x, area.min.y));
    }
    list.extend(state.cursor.render(&config.theme));
    list
}

fn apply_events(
    chart: &mut ChartContext,
    axis: Option<&mut CircularAxisRenderer>,
    angular_axis: Option<AxisId>,
    events: &[CursorEvent],
) {
    let mut changed = false;
    for event in events {
        trace!(?event, "cursor event");
        changed |= chart.apply(event);
    }
    if !changed {
        return;
    }
    if let (Some(axis), Some(span)) = (axis, angular_axis.and_then(|id| chart.span(id))) {
        axis.set_span(span);
    }
}

fn to_chart_point(point: Point<Pixels>) -> ChartPoint {
    ChartPoint::new(f64::from(f32::from(point.x)), f64::from(f32::from(point.y)))
}
