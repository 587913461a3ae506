//! Absolute-or-relative radius values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A radius in pixels or as a fraction of a reference length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RadiusRepr", into = "RadiusRepr")]
pub enum Radius {
    /// Absolute pixels.
    Pixels(f64),
    /// Fraction of the reference length (`0.5` is 50%).
    Relative(f64),
}

impl Radius {
    /// Relative radius from a percentage value (`50.0` is 50%).
    pub fn percent(value: f64) -> Self {
        Self::Relative(value / 100.0)
    }

    /// Resolve into pixels against `reference`.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Pixels(value) => value,
            Self::Relative(fraction) => fraction * reference,
        }
    }

    /// Resolve into pixels, treating negative values as an inset from `reference`.
    ///
    /// `Pixels(-20.0)` against `100.0` resolves to `80.0`, `Relative(-0.1)` to `90.0`.
    pub fn resolve_subtracting_negative(self, reference: f64) -> f64 {
        let value = self.resolve(reference);
        if value < 0.0 { reference + value } else { value }
    }

    /// Check whether the stored value is negative.
    pub fn is_negative(&self) -> bool {
        match *self {
            Self::Pixels(value) | Self::Relative(value) => value < 0.0,
        }
    }
}

impl Default for Radius {
    fn default() -> Self {
        Self::Relative(1.0)
    }
}

/// Resolve an optional radius, falling back to `default` pixels when missing.
pub fn relative_to_pixels(value: Option<Radius>, reference: f64, default: f64) -> f64 {
    value.map_or(default, |radius| radius.resolve(reference))
}

impl FromStr for Radius {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ConfigError::InvalidRadius(s.to_string());
        if let Some(percent) = text.strip_suffix('%') {
            let value: f64 = percent.trim().parse().map_err(|_| invalid())?;
            return Ok(Self::percent(value));
        }
        let pixels = text.strip_suffix("px").unwrap_or(text).trim();
        pixels.parse().map(Self::Pixels).map_err(|_| invalid())
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(value) => write!(f, "{value}"),
            Self::Relative(fraction) => write!(f, "{}%", fraction * 100.0),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RadiusRepr {
    Pixels(f64),
    Text(String),
}

impl TryFrom<RadiusRepr> for Radius {
    type Error = ConfigError;

    fn try_from(repr: RadiusRepr) -> Result<Self, Self::Error> {
        match repr {
            RadiusRepr::Pixels(value) => Ok(Self::Pixels(value)),
            RadiusRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Radius> for RadiusRepr {
    fn from(radius: Radius) -> Self {
        match radius {
            Radius::Pixels(value) => Self::Pixels(value),
            Radius::Relative(_) => Self::Text(radius.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_passes_through() {
        assert_eq!(Radius::Pixels(50.0).resolve(200.0), 50.0);
        assert_eq!(Radius::Pixels(50.0).resolve(1000.0), 50.0);
    }

    #[test]
    fn relative_scales_with_reference() {
        let half = Radius::percent(50.0);
        assert_eq!(half.resolve(200.0), 100.0);
        assert_eq!(half.resolve(400.0), 200.0);
    }

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(relative_to_pixels(None, 200.0, 0.0), 0.0);
        assert_eq!(relative_to_pixels(Some(Radius::Relative(0.25)), 200.0, 0.0), 50.0);
    }

    #[test]
    fn negative_values_inset_from_reference() {
        assert_eq!(Radius::Pixels(-20.0).resolve_subtracting_negative(100.0), 80.0);
        assert_eq!(Radius::Relative(-0.1).resolve_subtracting_negative(100.0), 90.0);
        assert_eq!(Radius::Pixels(20.0).resolve_subtracting_negative(100.0), 20.0);
    }

    #[test]
    fn parses_percent_and_pixels() {
        assert_eq!("80%".parse::<Radius>().unwrap(), Radius::Relative(0.8));
        assert_eq!("12px".parse::<Radius>().unwrap(), Radius::Pixels(12.0));
        assert_eq!(" 7 ".parse::<Radius>().unwrap(), Radius::Pixels(7.0));
        assert!("wide".parse::<Radius>().is_err());
    }

    #[test]
    fn json_accepts_numbers_and_strings() {
        let radii: Vec<Radius> = serde_json::from_str(r#"[40, "50%", "-10"]"#).unwrap();
        assert_eq!(
            radii,
            vec![Radius::Pixels(40.0), Radius::Relative(0.5), Radius::Pixels(-10.0)]
        );
        let text = serde_json::to_string(&Radius::Relative(0.5)).unwrap();
        assert_eq!(text, "\"50%\"");
    }

    #[test]
    fn nan_propagates() {
        assert!(Radius::Relative(f64::NAN).resolve(100.0).is_nan());
    }
}
