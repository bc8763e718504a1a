//! Ordered probability thresholds mapping a stroke probability to a risk tier.

use serde::Serialize;
use thiserror::Error;

use super::StrokeProbability;

/// One row of the threshold table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskTier {
    /// Inclusive upper bound, in percent.
    pub upper_bound: f64,
    pub label: String,
    pub advice: String,
}

impl RiskTier {
    pub fn new(upper_bound: f64, label: impl Into<String>, advice: impl Into<String>) -> Self {
        Self {
            upper_bound,
            label: label.into(),
            advice: advice.into(),
        }
    }
}

/// Errors raised when a threshold table cannot cover every probability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdTableError {
    #[error("Threshold table has no tiers")]
    Empty,

    #[error("Threshold bound {bound} at position {index} is not a finite number")]
    NonFiniteBound { index: usize, bound: f64 },

    #[error("Threshold bounds must be strictly increasing ({previous} then {bound} at position {index})")]
    NotIncreasing {
        index: usize,
        previous: f64,
        bound: f64,
    },

    #[error("Last threshold bound must be at least 100, got {0}")]
    Unbounded(f64),
}

/// Ordered tiers; lookup picks the first tier whose bound is `>=` the value.
///
/// Construction guarantees bounds strictly increase and the last bound
/// reaches 100, so [`RiskThresholdTable::classify`] always finds a tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RiskThresholdTable {
    tiers: Vec<RiskTier>,
}

impl RiskThresholdTable {
    pub fn new(tiers: Vec<RiskTier>) -> Result<Self, ThresholdTableError> {
        let last = tiers.last().ok_or(ThresholdTableError::Empty)?;
        for (index, tier) in tiers.iter().enumerate() {
            if !tier.upper_bound.is_finite() {
                return Err(ThresholdTableError::NonFiniteBound {
                    index,
                    bound: tier.upper_bound,
                });
            }
            if index > 0 {
                let previous = tiers[index - 1].upper_bound;
                if tier.upper_bound <= previous {
                    return Err(ThresholdTableError::NotIncreasing {
                        index,
                        previous,
                        bound: tier.upper_bound,
                    });
                }
            }
        }
        if last.upper_bound < 100.0 {
            return Err(ThresholdTableError::Unbounded(last.upper_bound));
        }
        Ok(Self { tiers })
    }

    /// The ten-tier table used by the public risk calculator.
    ///
    /// | Up to | Tier |
    /// |-------|------|
    /// | 5% | Very Low |
    /// | 10% | Low |
    /// | 15% | Slight |
    /// | 20% | Moderate |
    /// | 25% | Elevated |
    /// | 30% | Concerning |
    /// | 35% | High |
    /// | 40% | Serious |
    /// | 50% | Critical |
    /// | 100% | Very High |
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RiskTier::new(5.0, "🟢 Very Low Risk", "Maintain a healthy lifestyle."),
                RiskTier::new(10.0, "🟢 Low Risk", "Keep up good habits like regular exercise."),
                RiskTier::new(15.0, "🟡 Slight Risk", "Monitor diet and cholesterol."),
                RiskTier::new(
                    20.0,
                    "🟡 Moderate Risk",
                    "Regular check-ups and a balanced diet recommended.",
                ),
                RiskTier::new(
                    25.0,
                    "🟠 Elevated Risk",
                    "Manage cholesterol, blood pressure, and lifestyle.",
                ),
                RiskTier::new(
                    30.0,
                    "🟠 Concerning Risk",
                    "Consult a doctor for risk management strategies.",
                ),
                RiskTier::new(
                    35.0,
                    "🔴 High Risk",
                    "Immediate lifestyle changes and medical consultation needed.",
                ),
                RiskTier::new(
                    40.0,
                    "🔴 Serious Risk",
                    "Strictly monitor blood sugar, cholesterol, and blood pressure.",
                ),
                RiskTier::new(
                    50.0,
                    "🔴 Critical Risk",
                    "Consult a doctor and follow strict health guidelines.",
                ),
                RiskTier::new(100.0, "🚨 Very High Risk", "Urgent medical intervention recommended."),
            ],
        }
    }

    pub fn tiers(&self) -> &[RiskTier] {
        &self.tiers
    }

    /// Returns the first tier whose upper bound is `>=` the probability.
    pub fn classify(&self, probability: StrokeProbability) -> &RiskTier {
        let value = probability.percent();
        self.tiers
            .iter()
            .find(|tier| value <= tier.upper_bound)
            // StrokeProbability never exceeds 100 and the last bound is >= 100.
            .unwrap_or_else(|| &self.tiers[self.tiers.len() - 1])
    }
}

impl Default for RiskThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}
