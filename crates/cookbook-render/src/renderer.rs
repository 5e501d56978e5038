//! Renderer contract

use crate::error::RenderResult;
use cookbook_core::{Book, Group, Recipe};
use std::collections::BTreeMap;
use std::path::Path;

/// Everything a renderer receives for one run: the validated model plus
/// the output location
pub struct RenderContext<'a> {
    pub book: &'a Book,
    pub recipes: &'a [Recipe],
    pub groups: &'a BTreeMap<String, Group>,
    pub output: &'a Path,
}

impl RenderContext<'_> {
    /// Resolve a group member back to its recipe.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Groups with at least one member, in label order.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values().filter(|g| !g.is_empty())
    }
}

/// A pluggable output backend
///
/// Implementations own their artifact tree layout and failure handling;
/// the registry selects them by name at runtime.
pub trait Renderer {
    /// Registry name of this renderer
    fn name(&self) -> &'static str;

    /// Produce the artifact tree for one render run.
    fn render(&self, ctx: &RenderContext<'_>) -> RenderResult<()>;
}
