//! YAML navigation helpers
//!
//! Thin utilities over `serde_yaml::Value`. Documents are navigated field
//! by field instead of deserialized blindly so that validation order and
//! error messages stay under parser control.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML field access utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse a YAML string into a YAML value.
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Get a required string field.
    pub fn get_string(obj: &YamlValue, field: &str) -> Result<String> {
        match obj.get(field) {
            None => Err(ParseError::MissingField {
                field: field.to_string(),
            }),
            Some(value) => value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: field.to_string(),
                    message: "expected a string".to_string(),
                }),
        }
    }

    /// Get an optional string field.
    pub fn get_optional_string(obj: &YamlValue, field: &str) -> Option<String> {
        obj.get(field).and_then(|v| v.as_str()).map(str::to_string)
    }

    /// Get a required list-of-strings field.
    pub fn get_string_list(obj: &YamlValue, field: &str) -> Result<Vec<String>> {
        let entries = obj
            .get(field)
            .ok_or_else(|| ParseError::MissingField {
                field: field.to_string(),
            })?
            .as_sequence()
            .ok_or_else(|| ParseError::InvalidValue {
                field: field.to_string(),
                message: "expected a list of strings".to_string(),
            })?;

        entries
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ParseError::InvalidValue {
                        field: field.to_string(),
                        message: "expected a list of strings".to_string(),
                    })
            })
            .collect()
    }

    /// Get an optional list-of-strings field, opportunistically: an absent
    /// or malformed field yields an empty list, non-string entries are
    /// skipped.
    pub fn get_optional_string_list(obj: &YamlValue, field: &str) -> Vec<String> {
        obj.get(field)
            .and_then(|v| v.as_sequence())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|e| e.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get an optional sequence field.
    pub fn get_optional_sequence<'a>(
        obj: &'a YamlValue,
        field: &str,
    ) -> Option<&'a Vec<YamlValue>> {
        obj.get(field).and_then(|v| v.as_sequence())
    }
}
