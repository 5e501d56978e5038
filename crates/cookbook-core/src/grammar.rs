//! Field line grammar
//!
//! Parses the free-text micro-syntax used inside recipe files:
//! - Ingredient lines: `A. (1 cup) water; cold`
//! - Step lines: `1. (A, B) mix well; do not overwork`
//!
//! Both patterns share the same shape: a leading label terminated by a
//! period, an optional parenthesized group, a freeform middle segment and
//! an optional semicolon-delimited tail. Parsing is a single structural
//! pass; the first match wins.

use crate::error::{IngredientError, StepError};
use crate::model::{Ingredient, Step};

/// Line grammar for ingredient and step definitions
pub struct LineGrammar;

impl LineGrammar {
    /// Parse an ingredient line of the form `id. (quantity) name; details`.
    ///
    /// The quantity looks optional syntactically but is semantically
    /// required: a missing or empty parenthesized group is a validation
    /// failure, not an omitted field.
    pub fn parse_ingredient(line: &str) -> Result<Ingredient, IngredientError> {
        let (id, rest) = Self::leading_label(line, |c| c.is_ascii_uppercase())
            .ok_or_else(|| IngredientError::Invalid(line.to_string()))?;
        if id.is_empty() {
            return Err(IngredientError::MissingId(line.to_string()));
        }

        let (quantity, rest) = Self::paren_group(rest);
        let quantity =
            quantity.ok_or_else(|| IngredientError::MissingQuantity(line.to_string()))?;

        let (name, details) = Self::split_tail(rest);
        if name.is_empty() {
            return Err(IngredientError::MissingName(line.to_string()));
        }

        Ok(Ingredient {
            id: id.to_string(),
            quantity: quantity.to_string(),
            name: name.to_string(),
            details: details.map(str::to_string),
        })
    }

    /// Parse a step line of the form `id. (quantity list) action; details`.
    ///
    /// The parenthesized quantity list is genuinely optional and is carried
    /// as one opaque string; callers that need discrete references must
    /// split it themselves.
    pub fn parse_step(line: &str) -> Result<Step, StepError> {
        let (id, rest) = Self::leading_label(line, |c| c.is_ascii_digit())
            .ok_or_else(|| StepError::MissingId(line.to_string()))?;
        if id.is_empty() {
            return Err(StepError::MissingId(line.to_string()));
        }

        let (quantities, rest) = Self::paren_group(rest);

        let (action, details) = Self::split_tail(rest);
        if action.is_empty() {
            return Err(StepError::MissingAction(line.to_string()));
        }

        Ok(Step {
            id: id.to_string(),
            quantities: quantities.map(str::to_string),
            action: action.to_string(),
            details: details.map(str::to_string),
        })
    }

    /// Scan the leading label: one or more characters matching `pred`,
    /// terminated by a period. Returns the label (possibly empty) and the
    /// remainder after the period, or None when no period terminates the
    /// leading run.
    fn leading_label(line: &str, pred: fn(char) -> bool) -> Option<(&str, &str)> {
        let end = line.find(|c: char| !pred(c)).unwrap_or(line.len());
        let rest = line[end..].strip_prefix('.')?;
        Some((&line[..end], rest))
    }

    /// Take a parenthesized group after optional spaces. The group is only
    /// accepted when the closing paren exists and the inner text is
    /// non-empty; otherwise the text falls through to the middle segment.
    fn paren_group(rest: &str) -> (Option<&str>, &str) {
        let trimmed = rest.trim_start_matches(' ');
        if let Some(after_open) = trimmed.strip_prefix('(') {
            if let Some(close) = after_open.find(')') {
                let inner = &after_open[..close];
                if !inner.is_empty() {
                    return (Some(inner), &after_open[close + 1..]);
                }
            }
        }
        (None, rest)
    }

    /// Split the middle segment from the optional `; details` tail. Both
    /// sides are trimmed; an empty tail counts as absent.
    fn split_tail(rest: &str) -> (&str, Option<&str>) {
        match rest.split_once(';') {
            Some((middle, tail)) => {
                let tail = tail.trim();
                (middle.trim(), (!tail.is_empty()).then_some(tail))
            }
            None => (rest.trim(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_full_line() {
        let ingredient = LineGrammar::parse_ingredient("A. (1 cup) water; cold").unwrap();
        assert_eq!(ingredient.id, "A");
        assert_eq!(ingredient.quantity, "1 cup");
        assert_eq!(ingredient.name, "water");
        assert_eq!(ingredient.details.as_deref(), Some("cold"));
    }

    #[test]
    fn test_ingredient_without_details() {
        let ingredient = LineGrammar::parse_ingredient("AB. (2 tbsp) olive oil").unwrap();
        assert_eq!(ingredient.id, "AB");
        assert_eq!(ingredient.quantity, "2 tbsp");
        assert_eq!(ingredient.name, "olive oil");
        assert_eq!(ingredient.details, None);
    }

    #[test]
    fn test_ingredient_empty_details_is_absent() {
        let ingredient = LineGrammar::parse_ingredient("A. (1) salt;").unwrap();
        assert_eq!(ingredient.details, None);
    }

    #[test]
    fn test_ingredient_missing_quantity() {
        let err = LineGrammar::parse_ingredient("A. water").unwrap_err();
        assert_eq!(err, IngredientError::MissingQuantity("A. water".to_string()));
    }

    #[test]
    fn test_ingredient_empty_parens_is_missing_quantity() {
        let err = LineGrammar::parse_ingredient("A. () water").unwrap_err();
        assert!(matches!(err, IngredientError::MissingQuantity(_)));
    }

    #[test]
    fn test_ingredient_missing_name() {
        let err = LineGrammar::parse_ingredient("A. (1 cup)").unwrap_err();
        assert!(matches!(err, IngredientError::MissingName(_)));

        let err = LineGrammar::parse_ingredient("A. (1 cup) ; details").unwrap_err();
        assert!(matches!(err, IngredientError::MissingName(_)));
    }

    #[test]
    fn test_ingredient_missing_id() {
        let err = LineGrammar::parse_ingredient(". (1 cup) water").unwrap_err();
        assert!(matches!(err, IngredientError::MissingId(_)));
    }

    #[test]
    fn test_ingredient_invalid_definition() {
        let err = LineGrammar::parse_ingredient("water").unwrap_err();
        assert_eq!(err, IngredientError::Invalid("water".to_string()));

        // lowercase labels do not match the pattern
        let err = LineGrammar::parse_ingredient("a. (1 cup) water").unwrap_err();
        assert!(matches!(err, IngredientError::Invalid(_)));
    }

    #[test]
    fn test_ingredient_unclosed_paren_falls_through_to_name() {
        // without a closing paren the text is part of the name segment,
        // so the required quantity is reported missing
        let err = LineGrammar::parse_ingredient("A. (1 cup water").unwrap_err();
        assert!(matches!(err, IngredientError::MissingQuantity(_)));
    }

    #[test]
    fn test_step_full_line() {
        let step = LineGrammar::parse_step("1. (A, B) mix well; do not overwork").unwrap();
        assert_eq!(step.id, "1");
        assert_eq!(step.quantities.as_deref(), Some("A, B"));
        assert_eq!(step.action, "mix well");
        assert_eq!(step.details.as_deref(), Some("do not overwork"));
    }

    #[test]
    fn test_step_without_quantities() {
        let step = LineGrammar::parse_step("12. boil").unwrap();
        assert_eq!(step.id, "12");
        assert_eq!(step.quantities, None);
        assert_eq!(step.action, "boil");
        assert_eq!(step.details, None);
    }

    #[test]
    fn test_step_quantities_kept_opaque() {
        let step = LineGrammar::parse_step("2. (A, half of B) simmer").unwrap();
        assert_eq!(step.quantities.as_deref(), Some("A, half of B"));
    }

    #[test]
    fn test_step_missing_id() {
        let err = LineGrammar::parse_step("boil the water").unwrap_err();
        assert!(matches!(err, StepError::MissingId(_)));

        let err = LineGrammar::parse_step("A. (1) mix").unwrap_err();
        assert!(matches!(err, StepError::MissingId(_)));
    }

    #[test]
    fn test_step_missing_action() {
        let err = LineGrammar::parse_step("1. (A, B)").unwrap_err();
        assert_eq!(err, StepError::MissingAction("1. (A, B)".to_string()));
    }
}
