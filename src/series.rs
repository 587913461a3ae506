//! Series identities and the tooltip state cursors snap to.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::geom::Point;

static SERIES_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(u64);

impl SeriesId {
    /// Allocate a fresh identifier.
    pub fn next() -> Self {
        Self(SERIES_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an identifier chosen by the host.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Where a series currently shows its tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTooltip {
    /// Tooltip anchor in the cursor's local frame, if the series has one.
    pub point: Option<Point>,
    /// Whether the series (and so its tooltip) is hidden.
    pub hidden: bool,
}

impl SeriesTooltip {
    /// Visible tooltip at `point`.
    pub fn at(point: Point) -> Self {
        Self {
            point: Some(point),
            hidden: false,
        }
    }

    /// Hidden series.
    pub fn hidden() -> Self {
        Self {
            point: None,
            hidden: true,
        }
    }

    /// Tooltip point when the series is shown.
    pub fn visible_point(&self) -> Option<Point> {
        if self.hidden { None } else { self.point }
    }
}
