//! Ingredient model

use crate::error::IngredientError;
use crate::grammar::LineGrammar;
use serde::Serialize;
use std::fmt;

/// One ingredient of a recipe
///
/// Parsed from the line format `id. (quantity) name; details`. All three
/// leading fields are required; construction is atomic, so no
/// partially-filled ingredient exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// Uppercase letter-group label, unique within a recipe (e.g. "A"),
    /// stored without the trailing period
    pub id: String,
    /// Free-text quantity (e.g. "1 cup")
    pub quantity: String,
    /// Ingredient name
    pub name: String,
    /// Optional free-text details
    pub details: Option<String>,
}

impl Ingredient {
    /// Parse an ingredient line, e.g. `A. (1 cup) water; cold`.
    pub fn parse(line: &str) -> Result<Self, IngredientError> {
        LineGrammar::parse_ingredient(line)
    }
}

impl fmt::Display for Ingredient {
    /// Reconstructs the canonical line format, the exact inverse of parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. ({}) {}", self.id, self.quantity, self.name)?;
        if let Some(details) = &self.details {
            write!(f, "; {}", details)?;
        }
        Ok(())
    }
}
