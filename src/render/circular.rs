//! Grid, ticks, labels, axis line, and fills of a circular axis.

use tracing::debug;

use crate::axis::{AxisSpan, CircularAxisConfig};
use crate::geom::Point;
use crate::path::{ArcSpec, Path, arc, arc_to};
use crate::radius::relative_to_pixels;
use crate::render::label::{LabelPlacement, TextMeasurer, fix_point};
use crate::render::{RenderCommand, RenderList, ShapeStyle, TextStyle};
use crate::style::Theme;
use crate::transform::CircularTransform;

/// Tolerance when comparing item positions against visibility limits.
const POSITION_EPSILON: f64 = 1e-9;

/// A grid line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    /// Axis position of the line.
    pub position: f64,
    /// Line from the inner to the outer end.
    pub path: Path,
    /// Whether the line is drawn.
    pub visible: bool,
}

/// A tick mark.
#[derive(Debug, Clone, PartialEq)]
pub struct TickItem {
    /// Axis position of the tick.
    pub position: f64,
    /// Tick segment.
    pub path: Path,
    /// Whether the tick is drawn.
    pub visible: bool,
}

/// A positioned label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelItem {
    /// Axis position of the label.
    pub position: f64,
    /// Label text.
    pub text: String,
    /// Measured width and height.
    pub size: (f64, f64),
    /// Placement relative to the circle center.
    pub placement: LabelPlacement,
    /// Whether the label is drawn.
    pub visible: bool,
}

/// A filled wedge between two positions.
#[derive(Debug, Clone, PartialEq)]
pub struct FillItem {
    /// First position.
    pub start: f64,
    /// Second position.
    pub end: f64,
    /// Wedge outline.
    pub path: Path,
}

/// Everything a circular axis draws, relative to the circle center.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLayout {
    /// Center of the circle in container coordinates.
    pub center: Point,
    /// Grid lines.
    pub grid: Vec<GridItem>,
    /// Ticks.
    pub ticks: Vec<TickItem>,
    /// Labels.
    pub labels: Vec<LabelItem>,
    /// Arc along the whole sweep at the outer radius.
    pub axis_line: Path,
    /// Alternating cells and explicit ranges.
    pub fills: Vec<FillItem>,
}

/// Lays out a circular axis inside a container.
#[derive(Debug, Clone)]
pub struct CircularAxisRenderer {
    config: CircularAxisConfig,
    ranges: Vec<(f64, f64)>,
    size: (f64, f64),
    transform: Option<CircularTransform>,
    layout: AxisLayout,
    dirty: bool,
}

impl CircularAxisRenderer {
    /// Create a renderer for `config`.
    pub fn new(config: CircularAxisConfig) -> Self {
        Self {
            config,
            ranges: Vec::new(),
            size: (0.0, 0.0),
            transform: None,
            layout: AxisLayout::default(),
            dirty: true,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &CircularAxisConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: CircularAxisConfig) {
        self.config = config;
        self.dirty = true;
    }

    /// Change the visible span, for example after a zoom.
    pub fn set_span(&mut self, span: AxisSpan) {
        if self.config.span != span {
            self.config.span = span;
            self.dirty = true;
        }
    }

    /// Highlight the wedge between two positions.
    pub fn add_range(&mut self, start: f64, end: f64) {
        self.ranges.push((start, end));
        self.dirty = true;
    }

    /// Remove every highlighted range.
    pub fn clear_ranges(&mut self) {
        self.ranges.clear();
        self.dirty = true;
    }

    /// Transform from the last layout.
    pub fn transform(&self) -> Option<&CircularTransform> {
        self.transform.as_ref()
    }

    /// Most recent layout.
    pub fn current_layout(&self) -> &AxisLayout {
        &self.layout
    }

    /// Lay the axis out in a container of `width` by `height` pixels.
    ///
    /// The pixel radius is recomputed from the container every time the size
    /// or any setting changed.
    pub fn layout(&mut self, width: f64, height: f64, measurer: &dyn TextMeasurer) -> &AxisLayout {
        if self.dirty || self.size != (width, height) || self.transform.is_none() {
            self.size = (width, height);
            let transform =
                CircularTransform::new(&self.config.circle, self.config.span, width, height);
            self.transform = Some(transform);
            self.layout = self.build(&transform, measurer);
            self.dirty = false;
            debug!(
                radius = transform.pixel_radius(),
                inner_radius = transform.pixel_inner_radius(),
                grid = self.layout.grid.len(),
                "circular axis laid out"
            );
        }
        &self.layout
    }

    fn build(&self, transform: &CircularTransform, measurer: &dyn TextMeasurer) -> AxisLayout {
        let config = &self.config;
        let cells = config.cell_count();
        // value axes also get an item at the end of the last cell
        let items = if config.categories.is_empty() { cells + 1 } else { cells };
        let cell_position = |index: usize, location: f64| (index as f64 + location) / cells as f64;

        let mut layout = AxisLayout {
            center: Point::new(self.size.0 / 2.0, self.size.1 / 2.0),
            axis_line: axis_line_path(transform),
            ..AxisLayout::default()
        };

        for index in 0..items {
            if config.grid.enabled {
                let position = cell_position(index, config.grid.location);
                layout.grid.push(GridItem {
                    position,
                    path: self.grid_path(transform, position),
                    visible: toggle_visibility(relative_position(transform, position), 0.0, 1.0),
                });
            }
            if config.ticks.enabled {
                let position = cell_position(index, config.ticks.location);
                layout.ticks.push(TickItem {
                    position,
                    path: self.tick_path(transform, position),
                    visible: toggle_visibility(relative_position(transform, position), 0.0, 1.0),
                });
            }
            if config.labels.enabled {
                let position = cell_position(index, config.labels.location);
                layout.labels.push(self.label_item(transform, index, position, measurer));
            }
        }

        if is_full_circle(transform) && layout.labels.len() > 1 {
            let first = layout.labels[0].position;
            if let Some(last) = layout.labels.last_mut() {
                let first_angle = transform.position_to_angle(first);
                let last_angle = transform.position_to_angle(last.position);
                if ((last_angle - first_angle).abs() - 360.0).abs() < 1e-6 {
                    last.visible = false;
                }
            }
        }

        if config.fills.alternate_cells {
            for index in (0..cells).step_by(2) {
                let start = index as f64 / cells as f64;
                let end = (index + 1) as f64 / cells as f64;
                layout.fills.push(FillItem {
                    start,
                    end,
                    path: self.position_range_path(transform, start, end),
                });
            }
        }
        for &(start, end) in &self.ranges {
            layout.fills.push(FillItem {
                start,
                end,
                path: self.position_range_path(transform, start, end),
            });
        }
        layout
    }

    /// Grid line at `position`, from the grid inner radius to its outer radius.
    pub fn grid_path(&self, transform: &CircularTransform, position: f64) -> Path {
        let radius = transform.pixel_radius();
        let outer = relative_to_pixels(self.config.grid.radius, radius, radius);
        let inner = relative_to_pixels(
            self.config.grid.inner_radius,
            radius,
            transform.pixel_inner_radius(),
        );
        Path::polyline(&[
            transform.position_to_point_at(position, inner),
            transform.position_to_point_at(position, outer),
        ])
    }

    /// Tick at `position`, pointing away from the center unless inside.
    pub fn tick_path(&self, transform: &CircularTransform, position: f64) -> Path {
        let radius = transform.pixel_radius();
        let length = if self.config.ticks.inside {
            -self.config.ticks.length
        } else {
            self.config.ticks.length
        };
        Path::polyline(&[
            transform.position_to_point_at(position, radius),
            transform.position_to_point_at(position, radius + length),
        ])
    }

    fn label_item(
        &self,
        transform: &CircularTransform,
        index: usize,
        position: f64,
        measurer: &dyn TextMeasurer,
    ) -> LabelItem {
        let labels = &self.config.labels;
        let text = self.config.cell_label(index);
        let size = measurer.measure(&text, labels.font_size);
        let placement = fix_point(
            transform.position_to_angle(position),
            transform.pixel_radius(),
            transform.pixel_radius_y(),
            labels.radius,
            labels.relative_rotation,
            size,
        );
        let relative = relative_position(transform, position);
        let visible = toggle_visibility(relative, 0.0, 1.0)
            && toggle_visibility(
                relative,
                self.config.min_label_position,
                self.config.max_label_position,
            );
        LabelItem {
            position,
            text,
            size,
            placement,
            visible,
        }
    }

    /// Wedge between two positions spanning the inner to the outer radius.
    ///
    /// Positions outside the visible span are clipped to it.
    pub fn position_range_path(&self, transform: &CircularTransform, start: f64, end: f64) -> Path {
        let span = transform.span();
        let (lo, hi) = if span.start <= span.end {
            (span.start, span.end)
        } else {
            (span.end, span.start)
        };
        let start = start.clamp(lo, hi);
        let end = end.clamp(lo, hi);
        let start_angle = transform.position_to_angle(start);
        let end_angle = transform.position_to_angle(end);
        let fills = &self.config.fills;
        let mut spec = ArcSpec::new(
            start_angle,
            end_angle - start_angle,
            transform.pixel_radius(),
            transform.pixel_inner_radius(),
        )
        .with_radius_y(transform.pixel_radius_y())
        .with_corner_radius(fills.corner_radius);
        if let Some(inner) = fills.inner_corner_radius {
            spec = spec.with_inner_corner_radius(inner);
        }
        arc(&spec).path
    }

    /// Render the last layout in container coordinates.
    pub fn render(&self, theme: &Theme) -> RenderList {
        let layout = &self.layout;
        let mut list = RenderList::new();
        for fill in &layout.fills {
            push_finite(&mut list, &fill.path, ShapeStyle::filled(theme.axis_fill));
        }
        for grid in layout.grid.iter().filter(|item| item.visible) {
            push_finite(&mut list, &grid.path, theme.grid.shape());
        }
        push_finite(&mut list, &layout.axis_line, theme.axis_line.shape());
        for tick in layout.ticks.iter().filter(|item| item.visible) {
            push_finite(&mut list, &tick.path, theme.tick.shape());
        }
        for label in layout.labels.iter().filter(|item| item.visible) {
            let position = label.placement.center();
            if !position.is_finite() {
                continue;
            }
            list.push(RenderCommand::Text {
                position,
                text: label.text.clone(),
                style: TextStyle {
                    color: theme.label,
                    size: self.config.labels.font_size as f32,
                },
                rotation: label.placement.rotation,
            });
        }
        list.translated(layout.center.x, layout.center.y)
    }
}

/// Whether a relative position lies inside `[min, max]`.
pub fn toggle_visibility(position: f64, min: f64, max: f64) -> bool {
    position >= min - POSITION_EPSILON && position <= max + POSITION_EPSILON
}

fn relative_position(transform: &CircularTransform, position: f64) -> f64 {
    let span = transform.span();
    (position - span.start) / span.width()
}

fn is_full_circle(transform: &CircularTransform) -> bool {
    ((transform.end_angle() - transform.start_angle()).abs() - 360.0).abs() < 1e-9
}

fn axis_line_path(transform: &CircularTransform) -> Path {
    let start = transform.start_angle();
    let sweep = transform.end_angle() - start;
    let mut path = Path::new();
    path.move_to(Point::elliptic(
        start,
        transform.pixel_radius(),
        transform.pixel_radius_y(),
    ));
    path.extend(arc_to(
        start,
        sweep,
        transform.pixel_radius(),
        transform.pixel_radius_y(),
    ));
    path
}

fn push_finite(list: &mut RenderList, path: &Path, style: ShapeStyle) {
    if path.is_finite() {
        list.push_path(path.clone(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::label::EstimatedTextMeasurer;
    use crate::radius::Radius;

    fn laid_out(config: CircularAxisConfig) -> CircularAxisRenderer {
        let mut renderer = CircularAxisRenderer::new(config);
        renderer.layout(200.0, 200.0, &EstimatedTextMeasurer::default());
        renderer
    }

    #[test]
    fn value_axis_hides_duplicate_last_label() {
        let renderer = laid_out(CircularAxisConfig::values(0.0, 100.0, 4));
        let labels = &renderer.current_layout().labels;
        assert_eq!(labels.len(), 5);
        assert!(labels[..4].iter().all(|label| label.visible));
        assert!(!labels[4].visible);
    }

    #[test]
    fn partial_sweep_keeps_last_label() {
        let renderer = laid_out(CircularAxisConfig::values(0.0, 100.0, 4).with_angles(180.0, 360.0));
        let labels = &renderer.current_layout().labels;
        assert!(labels.iter().all(|label| label.visible));
    }

    #[test]
    fn grid_runs_from_inner_to_outer_radius() {
        let config = CircularAxisConfig::values(0.0, 1.0, 4)
            .with_radii(Radius::percent(100.0), Radius::Pixels(20.0));
        let renderer = laid_out(config);
        let grid = &renderer.current_layout().grid[1];
        assert_eq!(grid.position, 0.25);
        let bounds = grid.path.bounds().expect("grid path");
        assert!((bounds.min.x - 20.0).abs() < 1e-9);
        assert!((bounds.max.x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_point_outward_or_inward() {
        let outward = laid_out(CircularAxisConfig::values(0.0, 1.0, 4).with_ticks(10.0, false));
        let tick = outward.current_layout().ticks[1].path.bounds().expect("tick");
        assert!((tick.max.x - 110.0).abs() < 1e-9);

        let inward = laid_out(CircularAxisConfig::values(0.0, 1.0, 4).with_ticks(10.0, true));
        let tick = inward.current_layout().ticks[1].path.bounds().expect("tick");
        assert!((tick.min.x - 90.0).abs() < 1e-9);
    }

    #[test]
    fn zoomed_span_hides_items_outside() {
        let mut renderer = CircularAxisRenderer::new(CircularAxisConfig::values(0.0, 1.0, 4));
        renderer.set_span(AxisSpan::new(0.25, 0.75));
        renderer.layout(200.0, 200.0, &EstimatedTextMeasurer::default());
        let visible: Vec<f64> = renderer
            .current_layout()
            .grid
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.position)
            .collect();
        assert_eq!(visible, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn label_position_limits() {
        let mut config = CircularAxisConfig::values(0.0, 1.0, 4).with_angles(0.0, 180.0);
        config.min_label_position = 0.1;
        config.max_label_position = 0.9;
        let renderer = laid_out(config);
        let visible: Vec<bool> = renderer
            .current_layout()
            .labels
            .iter()
            .map(|label| label.visible)
            .collect();
        assert_eq!(visible, vec![false, true, true, true, false]);
    }

    #[test]
    fn radius_recomputed_on_resize() {
        let mut renderer = CircularAxisRenderer::new(CircularAxisConfig::default());
        let measurer = EstimatedTextMeasurer::default();
        renderer.layout(200.0, 200.0, &measurer);
        assert_eq!(renderer.transform().map(|t| t.pixel_radius()), Some(100.0));
        renderer.layout(400.0, 300.0, &measurer);
        assert_eq!(renderer.transform().map(|t| t.pixel_radius()), Some(150.0));
    }

    #[test]
    fn range_fill_is_wedge_between_positions() {
        let mut renderer = CircularAxisRenderer::new(
            CircularAxisConfig::values(0.0, 1.0, 4)
                .with_radii(Radius::percent(100.0), Radius::percent(50.0)),
        );
        renderer.add_range(0.25, 0.5);
        renderer.layout(200.0, 200.0, &EstimatedTextMeasurer::default());
        let fill = &renderer.current_layout().fills[0];
        let bounds = fill.path.bounds().expect("fill");
        // quarter from 0 deg to 90 deg between radius 50 and 100
        assert!(bounds.min.x.abs() < 1e-6);
        assert!(bounds.min.y.abs() < 1e-6);
        assert!((bounds.max.x - 100.0).abs() < 1e-6);
        assert!((bounds.max.y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn render_translates_to_container_center() {
        let renderer = laid_out(CircularAxisConfig::values(0.0, 1.0, 4));
        let list = renderer.render(&Theme::default());
        assert!(!list.is_empty());
        let text_positions: Vec<Point> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { position, .. } => Some(*position),
                RenderCommand::Path { .. } => None,
            })
            .collect();
        assert_eq!(text_positions.len(), 4);
        // first label sits above the top of the circle
        assert!((text_positions[0].x - 100.0).abs() < 1e-9);
        assert!(text_positions[0].y < 0.0);
    }

    #[test]
    fn nan_radius_draws_nothing() {
        let config = CircularAxisConfig::values(0.0, 1.0, 4)
            .with_radii(Radius::Pixels(f64::NAN), Radius::Pixels(0.0));
        let renderer = laid_out(config);
        let list = renderer.render(&Theme::default());
        assert!(list.is_empty());
    }
}
