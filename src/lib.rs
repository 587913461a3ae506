//! gpui_polarplot provides circular axes and chart cursors for GPUI.
//! The core is backend-agnostic: angle and wedge geometry, a circular axis
//! coordinate mapper and renderer, and a cursor that turns pointer gestures
//! into zoom, select, and pan ranges over rectangular or circular plot areas.
//! Enable the `gpui` feature for an interactive view.

#![forbid(unsafe_code)]

pub mod animation;
pub mod axis;
pub mod chart;
pub mod config;
pub mod cursor;
pub mod error;
pub mod geom;
pub mod path;
pub mod radius;
pub mod range;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use animation::{EasedPoint, EasedValue, Easing};
pub use axis::{AxisFormatter, AxisId, AxisSpan, CircularAxisConfig};
pub use chart::ChartContext;
pub use config::{ChartObject, ObjectSpec, build_from_json};
pub use cursor::{
    Cursor, CursorBehavior, CursorConfig, CursorEvent, CursorHost, NullHost, PointerStyle,
    RadialCursorConfig, Selection,
};
pub use error::ConfigError;
pub use geom::{Point, Rect};
pub use path::{ArcSpec, Path, PathCommand, arc, arc_to};
pub use radius::Radius;
pub use range::AxisRange;
pub use render::{
    AxisLayout, CircularAxisRenderer, Color, LineStyle, RenderCommand, RenderList, ShapeStyle,
    TextMeasurer, TextStyle,
};
pub use series::{SeriesId, SeriesTooltip};
pub use style::Theme;
pub use transform::{CircleGeometry, CircularTransform};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiPolarView, PolarHandle, PolarViewConfig};
