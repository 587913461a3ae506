//! GPUI integration for gpui_polarplot.
//!
//! This module provides a GPUI view that draws a circular axis together with
//! a chart cursor and turns mouse input into zoom, select, and pan gestures.

mod config;
mod paint;
mod text;
mod view;

pub use config::PolarViewConfig;
pub use view::{GpuiPolarView, PolarHandle};
