//! Zoom and pan ranges reported by cursors.

use serde::{Deserialize, Serialize};

use crate::geom::round_to;

/// A pair of normalized positions describing a zoom or pan window.
///
/// Unlike a numeric interval the order is preserved as given: ranges produced
/// from gestures are sorted explicitly with [`AxisRange::sorted`], while pan
/// windows are built ordered and may extend below 0 or above 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// First position.
    pub start: f64,
    /// Second position.
    pub end: f64,
}

impl AxisRange {
    /// The full, unzoomed window.
    pub const FULL: Self = Self::new(0.0, 1.0);

    /// Create a range without reordering.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Range with `start <= end`.
    pub fn sorted(self) -> Self {
        if self.start > self.end {
            Self::new(self.end, self.start)
        } else {
            self
        }
    }

    /// Both bounds rounded to `decimals` places.
    pub fn rounded(self, decimals: i32) -> Self {
        Self::new(round_to(self.start, decimals), round_to(self.end, decimals))
    }

    /// The unit window shifted by `delta`.
    pub fn shifted_window(delta: f64) -> Self {
        Self::new(delta, 1.0 + delta)
    }

    /// Distance between the bounds.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_swaps_reversed_bounds() {
        assert_eq!(AxisRange::new(0.75, 0.5).sorted(), AxisRange::new(0.5, 0.75));
        assert_eq!(AxisRange::new(0.1, 0.2).sorted(), AxisRange::new(0.1, 0.2));
    }

    #[test]
    fn shifted_window_keeps_unit_span() {
        let range = AxisRange::shifted_window(-0.05);
        assert_eq!(range.start, -0.05);
        assert!((range.span() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rounded_trims_decimals() {
        let range = AxisRange::new(0.123456789, 0.987654321).rounded(5);
        assert_eq!(range, AxisRange::new(0.12346, 0.98765));
    }
}
