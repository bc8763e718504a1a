//! Static advice: diet recommendations and risk-factor explanations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{RiskInput, StrokeProbability};
use crate::domain::foundation::Sex;

/// Coarse band used to select food recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl DietBand {
    /// Low up to 10%, moderate up to 20%, high up to 35%, critical above.
    pub fn for_probability(probability: StrokeProbability) -> Self {
        let value = probability.percent();
        if value <= 10.0 {
            DietBand::Low
        } else if value <= 20.0 {
            DietBand::Moderate
        } else if value <= 35.0 {
            DietBand::High
        } else {
            DietBand::Critical
        }
    }
}

impl fmt::Display for DietBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DietBand::Low => "low",
            DietBand::Moderate => "moderate",
            DietBand::High => "high",
            DietBand::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Recommended foods keyed by diet band and sex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceCatalog {
    foods: HashMap<(DietBand, Sex), Vec<String>>,
}

impl AdviceCatalog {
    pub fn new(foods: HashMap<(DietBand, Sex), Vec<String>>) -> Self {
        Self { foods }
    }

    /// Catalog shipped with the calculator.
    pub fn standard() -> Self {
        let entries: [(DietBand, Sex, [&str; 5]); 8] = [
            (
                DietBand::Low,
                Sex::Male,
                ["Salmon 🐟", "Avocado 🥑", "Almonds 🌰", "Leafy greens 🥬", "Oatmeal 🥣"],
            ),
            (
                DietBand::Low,
                Sex::Female,
                ["Berries 🍓", "Greek yogurt 🥛", "Dark chocolate 🍫", "Walnuts 🌰", "Spinach 🥬"],
            ),
            (
                DietBand::Moderate,
                Sex::Male,
                ["Lean chicken 🍗", "Brown rice 🍚", "Chia seeds 🌱", "Broccoli 🥦", "Olive oil 🫒"],
            ),
            (
                DietBand::Moderate,
                Sex::Female,
                ["Quinoa 🍚", "Lentils 🥣", "Salmon 🐟", "Flaxseeds 🌱", "Carrots 🥕"],
            ),
            (
                DietBand::High,
                Sex::Male,
                ["Tofu 🍢", "Beets 🍠", "Garlic 🧄", "Turmeric 🌿", "Dark chocolate 🍫"],
            ),
            (
                DietBand::High,
                Sex::Female,
                [
                    "Sweet potatoes 🍠",
                    "Soy milk 🥛",
                    "Chia pudding 🍮",
                    "Pumpkin seeds 🌰",
                    "Tomatoes 🍅",
                ],
            ),
            (
                DietBand::Critical,
                Sex::Male,
                [
                    "Boiled vegetables 🥕",
                    "Steamed fish 🐟",
                    "Green tea 🍵",
                    "Whole wheat 🥖",
                    "Berries 🍓",
                ],
            ),
            (
                DietBand::Critical,
                Sex::Female,
                [
                    "Almond milk 🥛",
                    "Cottage cheese 🧀",
                    "Kale 🥬",
                    "Apple cider vinegar 🍏",
                    "Oats 🥣",
                ],
            ),
        ];

        let foods = entries
            .into_iter()
            .map(|(band, sex, items)| {
                ((band, sex), items.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        Self { foods }
    }

    /// Foods for a band and sex; empty when the catalog has no entry.
    pub fn foods(&self, band: DietBand, sex: Sex) -> &[String] {
        self.foods
            .get(&(band, sex))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for AdviceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Age at or above which age is reported as a risk factor.
pub const ELEVATED_AGE: u32 = 60;
/// Healthy BMI range; values outside it are reported.
pub const HEALTHY_BMI: (f64, f64) = (18.5, 24.9);
/// Total cholesterol (mg/dL) at or above which it is reported.
pub const HIGH_CHOLESTEROL: f64 = 240.0;

/// Explains which submitted factors raise stroke risk, in form order.
pub fn risk_reasons(input: &RiskInput) -> Vec<String> {
    let mut reasons = Vec::new();

    if input.age >= ELEVATED_AGE {
        reasons.push("🔸 **Age is 60 or above**, which increases stroke risk.".to_string());
    }
    if input.bmi < HEALTHY_BMI.0 || input.bmi > HEALTHY_BMI.1 {
        reasons.push("🔸 **Unhealthy BMI** (underweight or overweight).".to_string());
    }
    if input.smoking.is_set() {
        reasons.push("🔸 **Smoking** damages blood vessels, increasing stroke risk.".to_string());
    }
    if input.diabetes.is_set() {
        reasons.push(
            "🔸 **Diabetes** increases the risk of stroke by damaging blood vessels.".to_string(),
        );
    }
    if input.hypertension.is_set() {
        reasons.push("🔸 **Hypertension** (high blood pressure) detected.".to_string());
    }
    if input.atrial_fibrillation.is_set() {
        reasons.push("🔸 **Atrial fibrillation** detected, increasing risk.".to_string());
    }
    if input.previous_stroke.is_set() {
        reasons.push(
            "🔸 **Previous stroke** significantly increases the risk of another stroke."
                .to_string(),
        );
    }
    if input.family_history.is_set() {
        reasons.push(
            "🔸 **Family history of stroke** may indicate a genetic predisposition.".to_string(),
        );
    }
    if input.cholesterol.is_some_and(|c| c >= HIGH_CHOLESTEROL) {
        reasons.push(
            "🔸 **High cholesterol** contributes to plaque build-up in arteries.".to_string(),
        );
    }

    reasons
}
