//! Placement of axis labels around a circle.

use crate::geom::{Point, cos, normalize_signed, sin};
use crate::radius::Radius;

/// Measures rendered text.
pub trait TextMeasurer {
    /// Width and height of `text` at `font_size` pixels.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Measurer that assumes a fixed advance per character.
///
/// Used when no backend text system is available, for example in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    /// Character advance as a fraction of the font size.
    pub char_width: f64,
    /// Line height as a fraction of the font size.
    pub line_height: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let chars = text.chars().count() as f64;
        (
            chars * font_size * self.char_width,
            font_size * self.line_height,
        )
    }
}

/// Where a label goes and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Point on the label circle the label is attached to.
    pub anchor: Point,
    /// Horizontal offset from the anchor to the label center.
    pub dx: f64,
    /// Vertical offset from the anchor to the label center.
    pub dy: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl LabelPlacement {
    /// Center of the label box.
    pub fn center(&self) -> Point {
        self.anchor.offset(self.dx, self.dy)
    }
}

/// Place a `width` x `height` label at `angle` so its nearest edge touches
/// the circle `label_radius` away from the axis circle.
///
/// A negative label radius puts the label inside the circle and pushes the
/// box inward instead of outward. With `relative_rotation` the label turns
/// with the circle and is offset by half its height along the radius.
pub fn fix_point(
    angle: f64,
    axis_radius: f64,
    axis_radius_y: f64,
    label_radius: Radius,
    relative_rotation: Option<f64>,
    size: (f64, f64),
) -> LabelPlacement {
    let (width, height) = size;
    let offset = label_radius.resolve(axis_radius);
    let direction = if label_radius.is_negative() { -1.0 } else { 1.0 };
    let ratio = if axis_radius == 0.0 {
        1.0
    } else {
        axis_radius_y / axis_radius
    };
    let radius = axis_radius + offset;
    let anchor = Point::elliptic(angle, radius, radius * ratio);

    match relative_rotation {
        Some(relative) => LabelPlacement {
            anchor,
            dx: direction * height / 2.0 * cos(angle),
            dy: direction * height / 2.0 * sin(angle),
            rotation: normalize_signed(relative + angle + 90.0),
        },
        None => LabelPlacement {
            anchor,
            dx: direction * width / 2.0 * cos(angle),
            dy: direction * height / 2.0 * sin(angle),
            rotation: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn top_label_sits_above_circle() {
        let placement = fix_point(-90.0, 100.0, 100.0, Radius::Pixels(0.0), None, (20.0, 10.0));
        let center = placement.center();
        assert!(close(center.x, 0.0));
        assert!(close(center.y, -105.0));
    }

    #[test]
    fn right_label_clears_circle_horizontally() {
        let placement = fix_point(0.0, 100.0, 100.0, Radius::Pixels(10.0), None, (20.0, 10.0));
        let center = placement.center();
        assert!(close(center.x - 10.0, 110.0));
        assert!(close(center.y, 0.0));
    }

    #[test]
    fn negative_radius_places_label_inside() {
        let placement = fix_point(0.0, 100.0, 100.0, Radius::Pixels(-15.0), None, (20.0, 10.0));
        let center = placement.center();
        assert!(close(center.x + 10.0, 85.0));
    }

    #[test]
    fn relative_rotation_follows_angle() {
        let placement = fix_point(0.0, 100.0, 100.0, Radius::Pixels(0.0), Some(0.0), (40.0, 10.0));
        assert!(close(placement.rotation, 90.0));
        assert!(close(placement.center().x, 105.0));

        let bottom = fix_point(90.0, 100.0, 100.0, Radius::Pixels(0.0), Some(0.0), (40.0, 10.0));
        assert!(close(bottom.rotation, 180.0));
        let left = fix_point(180.0, 100.0, 100.0, Radius::Pixels(0.0), Some(0.0), (40.0, 10.0));
        assert!(close(left.rotation, -90.0));
    }

    #[test]
    fn estimated_measurer_scales_with_font() {
        let measurer = EstimatedTextMeasurer::default();
        let (w, h) = measurer.measure("abcd", 10.0);
        assert!(close(w, 24.0));
        assert!(close(h, 12.0));
    }
}
