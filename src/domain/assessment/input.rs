//! Risk input record coerced from submitted form fields.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::{Flag, Sex, ValidationError};

pub const AGE_RANGE: (f64, f64) = (0.0, 120.0);
pub const BMI_RANGE: (f64, f64) = (10.0, 80.0);
pub const CHOLESTEROL_RANGE: (f64, f64) = (50.0, 600.0);

/// Patient risk factors after coercion and validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskInput {
    pub name: Option<String>,
    pub age: u32,
    pub sex: Sex,
    pub bmi: f64,
    pub smoking: Flag,
    pub diabetes: Flag,
    pub hypertension: Flag,
    pub atrial_fibrillation: Flag,
    pub previous_stroke: Flag,
    pub family_history: Flag,
    /// Total cholesterol in mg/dL; only some feature sets use it.
    pub cholesterol: Option<f64>,
}

impl RiskInput {
    /// Builds a risk input from an unordered map of submitted fields.
    ///
    /// Field order in the submission is irrelevant; the classifier column
    /// order is applied later by [`super::FeatureVector::assemble`].
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let fields = Fields(fields);

        let age = fields.number("age", AGE_RANGE)?;
        if age.fract() != 0.0 {
            return Err(ValidationError::invalid_format("age", "must be a whole number"));
        }

        Ok(Self {
            name: fields.optional("name").map(str::to_string),
            age: age as u32,
            sex: Sex::parse_field("sex", fields.required("sex")?)?,
            bmi: fields.number("bmi", BMI_RANGE)?,
            smoking: fields.flag("smoking")?,
            diabetes: fields.flag("diabetes")?,
            hypertension: fields.flag("hypertension")?,
            atrial_fibrillation: fields.flag("atrial_fibrillation")?,
            previous_stroke: fields.flag("previous_stroke")?,
            family_history: fields.flag("family_history")?,
            cholesterol: match fields.optional("cholesterol") {
                Some(_) => Some(fields.number("cholesterol", CHOLESTEROL_RANGE)?),
                None => None,
            },
        })
    }
}

struct Fields<'a>(&'a HashMap<String, String>);

impl<'a> Fields<'a> {
    fn optional(&self, field: &str) -> Option<&'a str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, field: &str) -> Result<&'a str, ValidationError> {
        let raw = self
            .0
            .get(field)
            .ok_or_else(|| ValidationError::missing_field(field))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        Ok(trimmed)
    }

    fn number(&self, field: &str, (min, max): (f64, f64)) -> Result<f64, ValidationError> {
        let raw = self.required(field)?;
        let value: f64 = raw.parse().map_err(|_| {
            ValidationError::invalid_format(field, format!("'{}' is not a number", raw))
        })?;
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(field, "must be a finite number"));
        }
        if value < min || value > max {
            return Err(ValidationError::out_of_range(field, min, max, value));
        }
        Ok(value)
    }

    fn flag(&self, field: &str) -> Result<Flag, ValidationError> {
        Flag::parse_field(field, self.required(field)?)
    }
}
