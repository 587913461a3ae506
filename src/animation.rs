//! Eased tweens used to glide cursor lines between snap targets.
//!
//! Hosts advance animations explicitly with a time step; nothing here reads a
//! clock.

use crate::geom::Point;

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease in and out.
    EaseInOut,
    /// Cubic ease out (fast start, slow end).
    #[default]
    CubicOut,
}

impl Easing {
    /// Apply the curve to a normalized time value (0.0 to 1.0).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A value eased from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Total duration in seconds.
    pub duration: f64,
    /// Elapsed time in seconds.
    pub elapsed: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl EasedValue {
    /// Create a new tween.
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::default(),
        }
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        (self.to - self.from).mul_add(self.easing.apply(t), self.from)
    }

    /// Whether the tween reached its end.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
    }
}

/// A point eased along a straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedPoint {
    x: EasedValue,
    y: EasedValue,
}

impl EasedPoint {
    /// Create a tween from `from` to `to`.
    pub fn new(from: Point, to: Point, duration: f64, easing: Easing) -> Self {
        Self {
            x: EasedValue::new(from.x, to.x, duration).with_easing(easing),
            y: EasedValue::new(from.y, to.y, duration).with_easing(easing),
        }
    }

    /// Current point.
    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Final point.
    pub fn target(&self) -> Point {
        Point::new(self.x.to, self.y.to)
    }

    /// Whether the tween reached its end.
    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.x.update(dt);
        self.y.update(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cubic_out_is_ahead_of_linear() {
        assert!(Easing::CubicOut.apply(0.3) > 0.3);
    }

    #[test]
    fn eased_value_completes() {
        let mut value = EasedValue::new(0.0, 10.0, 0.5).with_easing(Easing::Linear);
        value.update(0.25);
        assert!((value.value() - 5.0).abs() < 1e-12);
        assert!(!value.is_complete());
        value.update(1.0);
        assert_eq!(value.value(), 10.0);
        assert!(value.is_complete());
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let value = EasedValue::new(3.0, 7.0, 0.0);
        assert_eq!(value.value(), 7.0);
        assert!(value.is_complete());
    }

    #[test]
    fn eased_point_moves_both_axes() {
        let mut point = EasedPoint::new(
            Point::ORIGIN,
            Point::new(10.0, -20.0),
            1.0,
            Easing::Linear,
        );
        point.update(0.5);
        assert_eq!(point.value(), Point::new(5.0, -10.0));
        assert_eq!(point.target(), Point::new(10.0, -20.0));
    }
}
