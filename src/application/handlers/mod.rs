//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod assessment;

pub use assessment::{AssessRiskCommand, AssessRiskHandler, AssessmentError};
