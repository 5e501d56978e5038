//! Parser error types

use cookbook_core::{IngredientError, StepError};
use thiserror::Error;

/// Document construction error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML decoding error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An ingredient line failed the field grammar
    #[error(transparent)]
    Ingredient(#[from] IngredientError),

    /// A step line failed the field grammar
    #[error(transparent)]
    Step(#[from] StepError),

    #[error("a recipe must have a title")]
    MissingTitle,

    #[error("a recipe must have one or more ingredients")]
    NoIngredients,

    #[error("a recipe must have one or more steps")]
    NoSteps,

    /// Missing required manifest field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A field is present but holds the wrong kind of value
    #[error("invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
