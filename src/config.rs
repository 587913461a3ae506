//! Building cursors and axes from JSON configuration.
//!
//! Documents name the object type in a `type` field and carry its settings
//! in camelCase next to it:
//!
//! ```json
//! { "type": "RadarCursor", "behavior": "zoomXY", "innerRadius": "40%" }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::CircularAxisConfig;
use crate::cursor::{Cursor, CursorConfig, RadialCursorConfig};
use crate::error::ConfigError;
use crate::render::CircularAxisRenderer;

/// A typed object description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectSpec {
    /// Cursor over a rectangular plot area.
    #[serde(rename = "XYCursor")]
    XyCursor(CursorConfig),
    /// Cursor over a circle.
    RadarCursor(RadialCursorConfig),
    /// Circular axis renderer.
    AxisRendererCircular(CircularAxisConfig),
}

/// An object built from an [`ObjectSpec`].
#[derive(Debug, Clone)]
pub enum ChartObject {
    /// A cursor.
    Cursor(Cursor),
    /// A circular axis renderer.
    CircularAxis(CircularAxisRenderer),
}

impl ObjectSpec {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the settings and build the object.
    pub fn build(self) -> Result<ChartObject, ConfigError> {
        match self {
            Self::XyCursor(config) => {
                config.validate()?;
                debug!(behavior = %config.behavior, "building XYCursor");
                Ok(ChartObject::Cursor(Cursor::cartesian(config)))
            }
            Self::RadarCursor(config) => {
                config.validate()?;
                debug!(behavior = %config.cursor.behavior, "building RadarCursor");
                Ok(ChartObject::Cursor(Cursor::radial(config)))
            }
            Self::AxisRendererCircular(config) => {
                config.validate()?;
                debug!(cells = config.cell_count(), "building AxisRendererCircular");
                Ok(ChartObject::CircularAxis(CircularAxisRenderer::new(config)))
            }
        }
    }
}

/// Parse and build an object in one step.
pub fn build_from_json(json: &str) -> Result<ChartObject, ConfigError> {
    ObjectSpec::from_json(json)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{CursorBehavior, CursorKind};

    #[test]
    fn builds_radar_cursor() {
        let object = build_from_json(
            r#"{"type": "RadarCursor", "behavior": "panX", "startAngle": 0, "endAngle": 180}"#,
        )
        .unwrap();
        let ChartObject::Cursor(cursor) = object else {
            panic!("expected a cursor");
        };
        assert_eq!(cursor.config().behavior, CursorBehavior::PanX);
        let CursorKind::Radial(radial) = cursor.kind() else {
            panic!("expected a radial cursor");
        };
        assert_eq!(radial.circle().end_angle, 180.0);
    }

    #[test]
    fn builds_xy_cursor_with_defaults() {
        let object = build_from_json(r#"{"type": "XYCursor"}"#).unwrap();
        assert!(matches!(object, ChartObject::Cursor(ref cursor)
            if matches!(cursor.kind(), CursorKind::Cartesian(_))));
    }

    #[test]
    fn builds_circular_axis() {
        let object =
            build_from_json(r#"{"type": "AxisRendererCircular", "categories": ["a", "b"]}"#)
                .unwrap();
        let ChartObject::CircularAxis(renderer) = object else {
            panic!("expected an axis");
        };
        assert_eq!(renderer.config().cell_count(), 2);
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = build_from_json(r#"{"type": "PieSeries"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            build_from_json(r#"{"type": "XYCursor", "maxPanOut": -1}"#),
            Err(ConfigError::OutOfRange { name: "maxPanOut", .. })
        ));
        assert!(matches!(
            build_from_json(r#"{"type": "RadarCursor", "radius": "big"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
