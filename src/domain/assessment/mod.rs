//! Stroke risk assessment domain.
//!
//! Turns submitted risk factors into a model feature vector, and turns the
//! model's probability back into a tier, diet advice, and explanations.
//!
//! - `input` - Field coercion into a validated [`RiskInput`]
//! - `features` - Column schema and [`FeatureVector`] assembly
//! - `probability` - Percent-scale [`StrokeProbability`]
//! - `thresholds` - Ordered [`RiskThresholdTable`]
//! - `advice` - Diet bands, food catalog, risk-factor reasons

mod advice;
mod features;
pub(crate) mod input;
mod outcome;
mod probability;
mod thresholds;

pub use advice::{
    risk_reasons, AdviceCatalog, DietBand, ELEVATED_AGE, HEALTHY_BMI, HIGH_CHOLESTEROL,
};
pub use features::{
    age_group, bmi_category, cholesterol_category, Feature, FeatureSchema, FeatureSet,
    FeatureVector, SchemaError,
};
pub use input::{RiskInput, AGE_RANGE, BMI_RANGE, CHOLESTEROL_RANGE};
pub use outcome::RiskAssessment;
pub use probability::StrokeProbability;
pub use thresholds::{RiskThresholdTable, RiskTier, ThresholdTableError};
