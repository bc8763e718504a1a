//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the risk assessment domain.

mod errors;
mod flag;
mod sex;

pub use errors::{ErrorCode, ValidationError};
pub use flag::Flag;
pub use sex::Sex;
