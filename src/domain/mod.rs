//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `assessment` - Risk input, feature schema, thresholds, and advice

pub mod assessment;
pub mod foundation;
