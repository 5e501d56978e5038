//! Unit tests for the document model types and the field grammar
//!
//! Exercises the public surface of cookbook-core the way downstream
//! crates use it.

use cookbook_core::{Group, Ingredient, IngredientError, Step, StepError};

// =============================================================================
// Ingredient Tests
// =============================================================================

#[test]
fn test_ingredient_parse_fields() {
    let ingredient = Ingredient::parse("A. (1 cup) water").unwrap();
    assert_eq!(ingredient.id, "A");
    assert_eq!(ingredient.quantity, "1 cup");
    assert_eq!(ingredient.name, "water");
    assert!(ingredient.details.is_none());
}

#[test]
fn test_ingredient_multi_letter_id() {
    let ingredient = Ingredient::parse("AB. (3) eggs; beaten").unwrap();
    assert_eq!(ingredient.id, "AB");
    assert_eq!(ingredient.details.as_deref(), Some("beaten"));
}

#[test]
fn test_ingredient_name_keeps_inner_spaces() {
    let ingredient = Ingredient::parse("C. (200 g) dark chocolate chips").unwrap();
    assert_eq!(ingredient.name, "dark chocolate chips");
}

#[test]
fn test_ingredient_round_trip_exact() {
    for line in [
        "A. (1 cup) water; cold",
        "B. (2 tbsp) olive oil",
        "XYZ. (a pinch) salt",
    ] {
        assert_eq!(Ingredient::parse(line).unwrap().to_string(), line);
    }
}

#[test]
fn test_ingredient_error_echoes_line() {
    let err = Ingredient::parse("A. water").unwrap_err();
    assert_eq!(err.to_string(), "missing ingredient quantity: A. water");

    let err = Ingredient::parse("no label here").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid ingredient definition: no label here"
    );
    assert!(matches!(err, IngredientError::Invalid(_)));
}

// =============================================================================
// Step Tests
// =============================================================================

#[test]
fn test_step_parse_fields() {
    let step = Step::parse("1. (A) boil the water; rolling boil").unwrap();
    assert_eq!(step.id, "1");
    assert_eq!(step.quantities.as_deref(), Some("A"));
    assert_eq!(step.action, "boil the water");
    assert_eq!(step.details.as_deref(), Some("rolling boil"));
}

#[test]
fn test_step_quantities_absent() {
    let step = Step::parse("3. serve").unwrap();
    assert!(step.quantities.is_none());
}

#[test]
fn test_step_quantities_not_split() {
    let step = Step::parse("2. (A, B, C) combine").unwrap();
    assert_eq!(step.quantities.as_deref(), Some("A, B, C"));
}

#[test]
fn test_step_round_trip_exact() {
    for line in ["1. boil", "2. (A, B) mix well", "10. (C) rest; covered"] {
        assert_eq!(Step::parse(line).unwrap().to_string(), line);
    }
}

#[test]
fn test_step_error_echoes_line() {
    let err = Step::parse("mix everything").unwrap_err();
    assert_eq!(err.to_string(), "missing step id: mix everything");
    assert!(matches!(err, StepError::MissingId(_)));
}

// =============================================================================
// Group Tests
// =============================================================================

#[test]
fn test_group_membership() {
    let mut group = Group::new("desserts");
    assert!(group.is_empty());

    group.recipe_ids.push("cake".to_string());
    assert!(!group.is_empty());
    assert_eq!(group.label, "desserts");
    assert_eq!(group.recipe_ids, vec!["cake".to_string()]);
}
