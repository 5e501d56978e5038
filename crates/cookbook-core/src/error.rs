//! Field-level error types
//!
//! Every variant echoes the offending input line verbatim so diagnostics
//! can point at the exact text that failed.

use thiserror::Error;

/// Errors raised while parsing one ingredient line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngredientError {
    /// The line does not match the ingredient pattern at all
    #[error("invalid ingredient definition: {0}")]
    Invalid(String),

    /// The leading label has a period but no letters
    #[error("missing ingredient id: {0}")]
    MissingId(String),

    /// No non-empty parenthesized quantity present
    #[error("missing ingredient quantity: {0}")]
    MissingQuantity(String),

    /// The name segment is empty
    #[error("missing ingredient name: {0}")]
    MissingName(String),
}

/// Errors raised while parsing one step line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The line does not match the step pattern at all
    #[error("invalid step definition: {0}")]
    Invalid(String),

    /// No leading numeric label
    #[error("missing step id: {0}")]
    MissingId(String),

    /// The action segment is empty
    #[error("missing step action: {0}")]
    MissingAction(String),
}
