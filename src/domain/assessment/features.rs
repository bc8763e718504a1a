//! Feature schema and vector assembly.
//!
//! The classifier consumes a plain `[f64]` whose column order was fixed at
//! training time. A [`FeatureSchema`] names those columns; assembling a
//! [`FeatureVector`] against it is the only place the order is applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::RiskInput;
use crate::domain::foundation::ValidationError;

/// A single model column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Age,
    Sex,
    Bmi,
    Smoking,
    Diabetes,
    Hypertension,
    AtrialFibrillation,
    PreviousStroke,
    FamilyHistory,
    Cholesterol,
    BmiCategory,
    CholesterolCategory,
    AgeGroup,
    AgeXHypertension,
    BmiXDiabetes,
    AgeXSmoking,
}

impl Feature {
    pub const ALL: [Feature; 16] = [
        Feature::Age,
        Feature::Sex,
        Feature::Bmi,
        Feature::Smoking,
        Feature::Diabetes,
        Feature::Hypertension,
        Feature::AtrialFibrillation,
        Feature::PreviousStroke,
        Feature::FamilyHistory,
        Feature::Cholesterol,
        Feature::BmiCategory,
        Feature::CholesterolCategory,
        Feature::AgeGroup,
        Feature::AgeXHypertension,
        Feature::BmiXDiabetes,
        Feature::AgeXSmoking,
    ];

    /// Column name as exported by the training pipeline.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Age => "age",
            Feature::Sex => "sex",
            Feature::Bmi => "bmi",
            Feature::Smoking => "smoking",
            Feature::Diabetes => "diabetes",
            Feature::Hypertension => "hypertension",
            Feature::AtrialFibrillation => "atrial_fibrillation",
            Feature::PreviousStroke => "previous_stroke",
            Feature::FamilyHistory => "family_history",
            Feature::Cholesterol => "cholesterol",
            Feature::BmiCategory => "bmi_category",
            Feature::CholesterolCategory => "cholesterol_category",
            Feature::AgeGroup => "age_group",
            Feature::AgeXHypertension => "age_x_hypertension",
            Feature::BmiXDiabetes => "bmi_x_diabetes",
            Feature::AgeXSmoking => "age_x_smoking",
        }
    }


    /// Extracts this column's value from a risk input.
    pub fn value(&self, input: &RiskInput) -> Result<f64, ValidationError> {
        let age = f64::from(input.age);
        let value = match self {
            Feature::Age => age,
            Feature::Sex => input.sex.encoded(),
            Feature::Bmi => input.bmi,
            Feature::Smoking => input.smoking.encoded(),
            Feature::Diabetes => input.diabetes.encoded(),
            Feature::Hypertension => input.hypertension.encoded(),
            Feature::AtrialFibrillation => input.atrial_fibrillation.encoded(),
            Feature::PreviousStroke => input.previous_stroke.encoded(),
            Feature::FamilyHistory => input.family_history.encoded(),
            Feature::Cholesterol => require_cholesterol(input)?,
            Feature::BmiCategory => bmi_category(input.bmi),
            Feature::CholesterolCategory => cholesterol_category(require_cholesterol(input)?),
            Feature::AgeGroup => age_group(input.age),
            Feature::AgeXHypertension => age * input.hypertension.encoded(),
            Feature::BmiXDiabetes => input.bmi * input.diabetes.encoded(),
            Feature::AgeXSmoking => age * input.smoking.encoded(),
        };
        Ok(value)
    }
}

fn require_cholesterol(input: &RiskInput) -> Result<f64, ValidationError> {
    input
        .cholesterol
        .ok_or_else(|| ValidationError::missing_field("cholesterol"))
}

/// 0 underweight, 1 normal, 2 overweight, 3 obese.
pub fn bmi_category(bmi: f64) -> f64 {
    if bmi < 18.5 {
        0.0
    } else if bmi < 25.0 {
        1.0
    } else if bmi < 30.0 {
        2.0
    } else {
        3.0
    }
}

/// 0 desirable, 1 borderline high, 2 high (mg/dL).
pub fn cholesterol_category(cholesterol: f64) -> f64 {
    if cholesterol < 200.0 {
        0.0
    } else if cholesterol < 240.0 {
        1.0
    } else {
        2.0
    }
}

pub fn age_group(age: u32) -> f64 {
    match age {
        0..=44 => 0.0,
        45..=59 => 1.0,
        60..=74 => 2.0,
        _ => 3.0,
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Feature {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| SchemaError::UnknownFeature(s.to_string()))
    }
}

/// Which family of columns a deployment collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSet {
    /// The nine submitted risk factors.
    #[default]
    Basic,
    /// Basic plus cholesterol and derived buckets/interactions.
    Engineered,
}

impl FeatureSet {
    /// Canonical column order for this feature set.
    pub fn schema(&self) -> FeatureSchema {
        let columns: Vec<Feature> = match self {
            FeatureSet::Basic => Feature::ALL[..9].to_vec(),
            FeatureSet::Engineered => Feature::ALL.to_vec(),
        };
        FeatureSchema { columns }
    }

    pub fn requires_cholesterol(&self) -> bool {
        matches!(self, FeatureSet::Engineered)
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSet::Basic => write!(f, "basic"),
            FeatureSet::Engineered => write!(f, "engineered"),
        }
    }
}

/// Errors raised when a column list cannot serve as a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Unknown feature column '{0}'")]
    UnknownFeature(String),

    #[error("Duplicate feature column '{0}'")]
    DuplicateFeature(String),

    #[error("Feature schema is empty")]
    Empty,
}

/// Ordered, duplicate-free list of model columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<Feature>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<Feature>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(SchemaError::DuplicateFeature(column.name().to_string()));
            }
        }
        Ok(Self { columns })
    }

    /// Parses a schema from exported column names, preserving order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SchemaError> {
        let columns = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Feature>, _>>()?;
        Self::new(columns)
    }

    pub fn columns(&self) -> &[Feature] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.columns.iter().map(Feature::name).collect()
    }

    /// True when `names` lists exactly these columns in the same order.
    pub fn matches<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.len() == self.columns.len()
            && self
                .columns
                .iter()
                .zip(names)
                .all(|(column, name)| column.name() == name.as_ref())
    }

    pub fn requires_cholesterol(&self) -> bool {
        self.columns
            .iter()
            .any(|c| matches!(c, Feature::Cholesterol | Feature::CholesterolCategory))
    }
}

/// Numeric model input in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Lays out `input` according to `schema`.
    pub fn assemble(input: &RiskInput, schema: &FeatureSchema) -> Result<Self, ValidationError> {
        let values = schema
            .columns()
            .iter()
            .map(|column| column.value(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::input::tests::sample_fields;

    fn sample_input() -> RiskInput {
        RiskInput::from_fields(&sample_fields()).unwrap()
    }

    #[test]
    fn basic_schema_follows_training_order() {
        assert_eq!(
            FeatureSet::Basic.schema().names(),
            vec![
                "age",
                "sex",
                "bmi",
                "smoking",
                "diabetes",
                "hypertension",
                "atrial_fibrillation",
                "previous_stroke",
                "family_history",
            ]
        );
    }

    #[test]
    fn engineered_schema_extends_basic() {
        let basic = FeatureSet::Basic.schema();
        let engineered = FeatureSet::Engineered.schema();
        assert_eq!(engineered.len(), 16);
        assert_eq!(&engineered.columns()[..9], basic.columns());
        assert!(engineered.requires_cholesterol());
        assert!(!basic.requires_cholesterol());
    }

    #[test]
    fn assembled_vector_is_in_schema_order() {
        let vector = FeatureVector::assemble(&sample_input(), &FeatureSet::Basic.schema()).unwrap();
        assert_eq!(
            vector.as_slice(),
            &[67.0, 0.0, 27.4, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn custom_order_is_respected() {
        let schema = FeatureSchema::from_names(&["bmi", "age", "sex"]).unwrap();
        let vector = FeatureVector::assemble(&sample_input(), &schema).unwrap();
        assert_eq!(vector.as_slice(), &[27.4, 67.0, 0.0]);
    }

    #[test]
    fn engineered_features_are_derived() {
        let mut input = sample_input();
        input.cholesterol = Some(210.0);
        let vector = FeatureVector::assemble(&input, &FeatureSet::Engineered.schema()).unwrap();
        let values = vector.as_slice();
        assert_eq!(values.len(), 16);
        assert_eq!(values[9], 210.0); // cholesterol
        assert_eq!(values[10], 2.0); // bmi_category: overweight
        assert_eq!(values[11], 1.0); // cholesterol_category: borderline
        assert_eq!(values[12], 2.0); // age_group: 60-74
        assert_eq!(values[13], 67.0); // age_x_hypertension
        assert_eq!(values[14], 0.0); // bmi_x_diabetes
        assert_eq!(values[15], 67.0); // age_x_smoking
    }

    #[test]
    fn engineered_schema_requires_cholesterol() {
        let err = FeatureVector::assemble(&sample_input(), &FeatureSet::Engineered.schema())
            .unwrap_err();
        assert_eq!(err, ValidationError::missing_field("cholesterol"));
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bmi_category(18.49), 0.0);
        assert_eq!(bmi_category(18.5), 1.0);
        assert_eq!(bmi_category(25.0), 2.0);
        assert_eq!(bmi_category(30.0), 3.0);
        assert_eq!(cholesterol_category(199.9), 0.0);
        assert_eq!(cholesterol_category(240.0), 2.0);
        assert_eq!(age_group(44), 0.0);
        assert_eq!(age_group(45), 1.0);
        assert_eq!(age_group(75), 3.0);
    }

    #[test]
    fn schema_rejects_unknown_and_duplicate_columns() {
        assert_eq!(
            FeatureSchema::from_names(&["age", "glucose"]).unwrap_err(),
            SchemaError::UnknownFeature("glucose".into())
        );
        assert_eq!(
            FeatureSchema::from_names(&["age", "age"]).unwrap_err(),
            SchemaError::DuplicateFeature("age".into())
        );
        assert_eq!(
            FeatureSchema::from_names::<&str>(&[]).unwrap_err(),
            SchemaError::Empty
        );
    }

    #[test]
    fn matches_compares_order_and_length() {
        let schema = FeatureSet::Basic.schema();
        let names: Vec<String> = schema.names().iter().map(|s| s.to_string()).collect();
        assert!(schema.matches(&names));

        let mut swapped = names.clone();
        swapped.swap(0, 1);
        assert!(!schema.matches(&swapped));
        assert!(!schema.matches(&names[..8]));
    }

    #[test]
    fn feature_names_round_trip_through_from_str() {
        for feature in Feature::ALL {
            assert_eq!(feature.name().parse::<Feature>().unwrap(), feature);
        }
    }
}
