//! Rendering primitives.
//!
//! These types are backend-agnostic and are used by render backends (such as the
//! GPUI backend) to describe how axes and cursors should be drawn.

pub mod circular;
pub mod label;

use crate::geom::Point;
use crate::path::Path;

pub use circular::{AxisLayout, CircularAxisRenderer, FillItem, GridItem, LabelItem, TickItem};
pub use label::{EstimatedTextMeasurer, LabelPlacement, TextMeasurer, fix_point};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl LineStyle {
    /// Stroke-only shape style.
    pub fn shape(self) -> ShapeStyle {
        ShapeStyle {
            fill: Color::TRANSPARENT,
            stroke: self.color,
            stroke_width: self.width,
        }
    }
}

/// Fill and stroke styling for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Color::TRANSPARENT,
            stroke: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

impl ShapeStyle {
    /// Fill-only shape style.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill and/or stroke a path.
    Path {
        /// Outline to draw.
        path: Path,
        /// Styling for the outline.
        style: ShapeStyle,
    },
    /// Draw text.
    Text {
        /// Center of the text box.
        position: Point,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
        /// Rotation around the center, in degrees.
        rotation: f64,
    },
}

impl RenderCommand {
    /// Same command moved by `dx`/`dy`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        match self {
            Self::Path { path, style } => Self::Path {
                path: path.translate(dx, dy),
                style: *style,
            },
            Self::Text {
                position,
                text,
                style,
                rotation,
            } => Self::Text {
                position: position.offset(dx, dy),
                text: text.clone(),
                style: style.clone(),
                rotation: *rotation,
            },
        }
    }
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Push a path, skipping empty ones.
    pub fn push_path(&mut self, path: Path, style: ShapeStyle) {
        if !path.is_empty() {
            self.commands.push(RenderCommand::Path { path, style });
        }
    }

    /// Append every command of `other`.
    pub fn extend(&mut self, other: RenderList) {
        self.commands.extend(other.commands);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Copy of the list with every command moved by `dx`/`dy`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|command| command.translate(dx, dy))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_paths_are_skipped() {
        let mut list = RenderList::new();
        list.push_path(Path::new(), ShapeStyle::default());
        assert!(list.is_empty());
        list.push_path(
            Path::polyline(&[Point::ORIGIN, Point::new(1.0, 1.0)]),
            ShapeStyle::default(),
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn translation_moves_text_and_paths() {
        let mut list = RenderList::new();
        list.push(RenderCommand::Text {
            position: Point::new(1.0, 2.0),
            text: "N".to_string(),
            style: TextStyle::default(),
            rotation: 0.0,
        });
        list.push_path(
            Path::polyline(&[Point::ORIGIN, Point::new(5.0, 0.0)]),
            LineStyle::default().shape(),
        );
        let moved = list.translated(10.0, 20.0);
        match &moved.commands()[0] {
            RenderCommand::Text { position, .. } => assert_eq!(*position, Point::new(11.0, 22.0)),
            other => panic!("unexpected command {other:?}"),
        }
        match &moved.commands()[1] {
            RenderCommand::Path { path, .. } => {
                assert_eq!(path.bounds().map(|rect| rect.min), Some(Point::new(10.0, 20.0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
