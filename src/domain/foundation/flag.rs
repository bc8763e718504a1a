//! Yes/no flag value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A boolean risk factor submitted as yes/no (or 1/0).
///
/// Every boolean field goes through the same coercion so that `"yes"` and
/// `"1"` always mean the same thing regardless of which field they arrive on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flag(bool);

impl Flag {
    pub const YES: Self = Self(true);
    pub const NO: Self = Self(false);

    /// Parses a submitted value for the given field.
    pub fn parse_field(field: &str, raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" | "on" => Ok(Self::YES),
            "no" | "n" | "false" | "0" | "off" => Ok(Self::NO),
            "" => Err(ValidationError::empty_field(field)),
            _ => Err(ValidationError::invalid_choice(field, raw.trim(), "yes or no")),
        }
    }

    pub fn is_set(&self) -> bool {
        self.0
    }

    /// Numeric encoding used in feature vectors.
    pub fn encoded(&self) -> f64 {
        if self.0 {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "yes" } else { "no" })
    }
}
