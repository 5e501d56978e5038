//! Step model

use crate::error::StepError;
use crate::grammar::LineGrammar;
use serde::Serialize;
use std::fmt;

/// One preparation step of a recipe
///
/// Parsed from the line format `id. (quantity list) action; details`. The
/// quantity list references ingredient quantities and is carried as one
/// opaque string, never split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Numeric label, stored without the trailing period
    pub id: String,
    /// Optional reference list to ingredient quantities, verbatim
    pub quantities: Option<String>,
    /// What to do in this step
    pub action: String,
    /// Optional free-text details
    pub details: Option<String>,
}

impl Step {
    /// Parse a step line, e.g. `1. (A, B) mix well`.
    pub fn parse(line: &str) -> Result<Self, StepError> {
        LineGrammar::parse_step(line)
    }
}

impl fmt::Display for Step {
    /// Reconstructs the canonical line format, the exact inverse of parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. ", self.id)?;
        if let Some(quantities) = &self.quantities {
            write!(f, "({}) ", quantities)?;
        }
        write!(f, "{}", self.action)?;
        if let Some(details) = &self.details {
            write!(f, "; {}", details)?;
        }
        Ok(())
    }
}
