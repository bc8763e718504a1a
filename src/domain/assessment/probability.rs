//! Stroke probability value object (percent scale).

use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Estimated stroke probability, stored as a percentage in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StrokeProbability(f64);

impl StrokeProbability {
    /// Builds from a classifier output in `0.0..=1.0`, clamping overshoot.
    pub fn from_fraction(fraction: f64) -> Result<Self, ValidationError> {
        Self::from_percent(fraction * 100.0)
    }

    /// Builds from a percentage, clamping to `0.0..=100.0`.
    pub fn from_percent(percent: f64) -> Result<Self, ValidationError> {
        if !percent.is_finite() {
            return Err(ValidationError::invalid_format(
                "probability",
                "classifier returned a non-finite value",
            ));
        }
        Ok(Self(percent.clamp(0.0, 100.0)))
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Percentage rounded to two decimal places, as reported to clients.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl Serialize for StrokeProbability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.rounded())
    }
}

impl fmt::Display for StrokeProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_scaled_to_percent() {
        let p = StrokeProbability::from_fraction(0.1234).unwrap();
        assert!((p.percent() - 12.34).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        assert_eq!(StrokeProbability::from_fraction(1.5).unwrap().percent(), 100.0);
        assert_eq!(StrokeProbability::from_fraction(-0.2).unwrap().percent(), 0.0);
    }

    #[test]
    fn nan_is_rejected() {
        assert!(StrokeProbability::from_fraction(f64::NAN).is_err());
        assert!(StrokeProbability::from_percent(f64::INFINITY).is_err());
    }

    #[test]
    fn rounds_to_two_decimals() {
        let p = StrokeProbability::from_fraction(0.123456).unwrap();
        assert_eq!(p.rounded(), 12.35);
    }

    #[test]
    fn serializes_rounded_percent() {
        let p = StrokeProbability::from_percent(7.891).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "7.89");
    }

    #[test]
    fn displays_with_percent_sign() {
        let p = StrokeProbability::from_percent(5.0).unwrap();
        assert_eq!(p.to_string(), "5.00%");
    }
}
