//! Recipe model

use crate::model::{Ingredient, Step};
use serde::Serialize;

/// A validated recipe document
///
/// A recipe must have a title, one or more ingredients and one or more
/// steps. Everything else is optional. Recipes are created once per source
/// file at load time and are immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    /// Stable identifier: externally supplied or a generated unique token
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Ingredients in appearance order
    pub ingredients: Vec<Ingredient>,
    /// Steps in appearance order
    pub steps: Vec<Step>,
    /// Attribution strings
    pub sources: Vec<String>,
    /// Free-form labels
    pub tags: Vec<String>,
    /// Labels of the groups this recipe declares membership in
    pub groups: Vec<String>,
    /// File name of the companion image, when one was discovered next to
    /// the source file
    pub img: Option<String>,
}
