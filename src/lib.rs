//! Stroke Risk - Stroke probability estimation service
//!
//! This crate marshals patient risk factors into the feature vector of a
//! pre-trained classifier, and translates the resulting probability into a
//! risk tier with diet advice and risk-factor explanations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
