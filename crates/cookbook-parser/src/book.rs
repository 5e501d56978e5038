//! Book manifest parser

use crate::error::Result;
use crate::yaml::YamlParser;
use cookbook_core::Book;
use serde_yaml::Value as YamlValue;

/// Book manifest parser
pub struct BookParser;

impl BookParser {
    /// Parse a book manifest from a YAML string.
    pub fn parse(yaml_str: &str) -> Result<Book> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Build a Book from a decoded manifest document.
    ///
    /// All five metadata fields are required with no defaulting; the
    /// absence of any key is a hard failure. The `groups` key declares the
    /// known group labels for the run and is optional.
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<Book> {
        Ok(Book {
            title: YamlParser::get_string(yaml, "title")?,
            descriptions: YamlParser::get_string_list(yaml, "descriptions")?,
            authors: YamlParser::get_string_list(yaml, "authors")?,
            revision: YamlParser::get_string(yaml, "revision")?,
            renderer: YamlParser::get_string(yaml, "renderer")?,
            groups: YamlParser::get_optional_string_list(yaml, "groups"),
        })
    }
}
