//! Recipe parser
//!
//! Builds a validated Recipe from a decoded YAML mapping.

use crate::error::{ParseError, Result};
use crate::yaml::YamlParser;
use cookbook_core::{Ingredient, Recipe, Step};
use serde_yaml::Value as YamlValue;
use uuid::Uuid;

/// Recipe parser
pub struct RecipeParser;

impl RecipeParser {
    /// Parse a recipe from a YAML string.
    pub fn parse(yaml_str: &str) -> Result<Recipe> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Build a Recipe from a decoded YAML document.
    ///
    /// Construction is ordered and fail-fast: identity, title,
    /// ingredients, steps, then the optional fields. No partial Recipe
    /// survives a failure. The companion image is resolved later by the
    /// loader, which knows the source location.
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<Recipe> {
        let id = YamlParser::get_optional_string(yaml, "id")
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

        let title = YamlParser::get_optional_string(yaml, "title")
            .filter(|t| !t.is_empty())
            .ok_or(ParseError::MissingTitle)?;

        let ingredients = Self::parse_ingredients(yaml)?;
        if ingredients.is_empty() {
            return Err(ParseError::NoIngredients);
        }

        let steps = Self::parse_steps(yaml)?;
        if steps.is_empty() {
            return Err(ParseError::NoSteps);
        }

        Ok(Recipe {
            id,
            title,
            ingredients,
            steps,
            sources: YamlParser::get_optional_string_list(yaml, "sources"),
            tags: YamlParser::get_optional_string_list(yaml, "tags"),
            groups: YamlParser::get_optional_string_list(yaml, "groups"),
            img: None,
        })
    }

    /// Map every entry of the `ingredients` list through the field
    /// grammar. The first failing entry propagates immediately.
    fn parse_ingredients(yaml: &YamlValue) -> Result<Vec<Ingredient>> {
        let Some(entries) = YamlParser::get_optional_sequence(yaml, "ingredients") else {
            return Ok(Vec::new());
        };
        entries
            .iter()
            .map(|entry| {
                let line = Self::as_line(entry, "ingredients")?;
                Ok(Ingredient::parse(line)?)
            })
            .collect()
    }

    /// Same contract as `parse_ingredients`, with step errors.
    fn parse_steps(yaml: &YamlValue) -> Result<Vec<Step>> {
        let Some(entries) = YamlParser::get_optional_sequence(yaml, "steps") else {
            return Ok(Vec::new());
        };
        entries
            .iter()
            .map(|entry| {
                let line = Self::as_line(entry, "steps")?;
                Ok(Step::parse(line)?)
            })
            .collect()
    }

    fn as_line<'a>(entry: &'a YamlValue, field: &str) -> Result<&'a str> {
        entry.as_str().ok_or_else(|| ParseError::InvalidValue {
            field: field.to_string(),
            message: "expected a string entry".to_string(),
        })
    }
}
