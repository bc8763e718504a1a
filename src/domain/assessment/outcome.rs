//! Result of a completed risk assessment.

use serde::Serialize;

use super::{
    risk_reasons, AdviceCatalog, DietBand, RiskInput, RiskThresholdTable, StrokeProbability,
};

/// Everything reported back to the patient for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub name: Option<String>,
    pub stroke_percentage: StrokeProbability,
    pub risk_category: String,
    pub advice: String,
    pub diet_band: DietBand,
    pub reasons: Vec<String>,
    pub recommended_foods: Vec<String>,
}

impl RiskAssessment {
    /// Combines a model probability with the static lookup tables.
    pub fn compose(
        input: &RiskInput,
        probability: StrokeProbability,
        table: &RiskThresholdTable,
        catalog: &AdviceCatalog,
    ) -> Self {
        let tier = table.classify(probability);
        let diet_band = DietBand::for_probability(probability);

        Self {
            name: input.name.clone(),
            stroke_percentage: probability,
            risk_category: tier.label.clone(),
            advice: tier.advice.clone(),
            diet_band,
            reasons: risk_reasons(input),
            recommended_foods: catalog.foods(diet_band, input.sex).to_vec(),
        }
    }
}
