//! Risk assessment command handlers.

mod assess_risk;

pub use assess_risk::{AssessRiskCommand, AssessRiskHandler, AssessmentError};
