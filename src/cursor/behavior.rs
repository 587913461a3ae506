//! Cursor drag behaviors.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// What a drag on the cursor does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum CursorBehavior {
    /// Zoom along X.
    #[default]
    ZoomX,
    /// Zoom along Y.
    ZoomY,
    /// Zoom along both axes.
    ZoomXY,
    /// Select along X.
    SelectX,
    /// Select along Y.
    SelectY,
    /// Select along both axes.
    SelectXY,
    /// Pan along X.
    PanX,
    /// Pan along Y.
    PanY,
    /// Pan along both axes.
    PanXY,
    /// Drags do nothing.
    None,
}

/// Family of a [`CursorBehavior`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralBehavior {
    /// Zooming.
    Zoom,
    /// Selecting.
    Select,
    /// Panning.
    Pan,
}

/// Axes a behavior acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorAxes {
    /// Horizontal or angular.
    X,
    /// Vertical or radial.
    Y,
    /// Both.
    XY,
}

impl CursorBehavior {
    /// All behaviors, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::ZoomX,
        Self::ZoomY,
        Self::ZoomXY,
        Self::SelectX,
        Self::SelectY,
        Self::SelectXY,
        Self::PanX,
        Self::PanY,
        Self::PanXY,
        Self::None,
    ];

    /// Family of the behavior, `None` for [`CursorBehavior::None`].
    pub fn general(self) -> Option<GeneralBehavior> {
        match self {
            Self::ZoomX | Self::ZoomY | Self::ZoomXY => Some(GeneralBehavior::Zoom),
            Self::SelectX | Self::SelectY | Self::SelectXY => Some(GeneralBehavior::Select),
            Self::PanX | Self::PanY | Self::PanXY => Some(GeneralBehavior::Pan),
            Self::None => None,
        }
    }

    /// Axes the behavior acts on.
    pub fn axes(self) -> BehaviorAxes {
        match self {
            Self::ZoomX | Self::SelectX | Self::PanX => BehaviorAxes::X,
            Self::ZoomY | Self::SelectY | Self::PanY => BehaviorAxes::Y,
            Self::ZoomXY | Self::SelectXY | Self::PanXY | Self::None => BehaviorAxes::XY,
        }
    }

    /// Whether dragging draws a selection shape.
    pub fn uses_selection(self) -> bool {
        matches!(
            self.general(),
            Some(GeneralBehavior::Zoom | GeneralBehavior::Select)
        )
    }

    /// Configuration name of the behavior.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZoomX => "zoomX",
            Self::ZoomY => "zoomY",
            Self::ZoomXY => "zoomXY",
            Self::SelectX => "selectX",
            Self::SelectY => "selectY",
            Self::SelectXY => "selectXY",
            Self::PanX => "panX",
            Self::PanY => "panY",
            Self::PanXY => "panXY",
            Self::None => "none",
        }
    }

    /// Parse a configuration name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|behavior| behavior.as_str() == name)
    }
}

impl From<String> for CursorBehavior {
    fn from(name: String) -> Self {
        Self::parse(&name).unwrap_or_else(|| {
            warn!(behavior = %name, "unknown cursor behavior, disabling drag behaviors");
            Self::None
        })
    }
}

impl From<CursorBehavior> for &'static str {
    fn from(behavior: CursorBehavior) -> Self {
        behavior.as_str()
    }
}

impl std::fmt::Display for CursorBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
