//! Sex value object, as collected by the risk form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Biological sex, encoded the way the classifier was trained (male = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parses a submitted value for the given field.
    pub fn parse_field(field: &str, raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "1" => Ok(Sex::Male),
            "female" | "f" | "0" => Ok(Sex::Female),
            "" => Err(ValidationError::empty_field(field)),
            _ => Err(ValidationError::invalid_choice(field, raw.trim(), "male or female")),
        }
    }

    /// Numeric encoding used in feature vectors.
    pub fn encoded(&self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field("sex", s)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
