//! The loaded snapshot of one run

use cookbook_core::{Book, Group, Recipe};
use std::collections::BTreeMap;

/// Everything one load pass produced: the optional book manifest, the
/// recipe collection and the group membership map.
///
/// The library is caller-owned and immutable after the load pass; groups
/// hold recipe ids, not recipes.
#[derive(Debug, Default)]
pub struct Library {
    /// The book manifest, when one was found among the inputs
    pub book: Option<Book>,
    /// Successfully constructed recipes, in traversal order
    pub recipes: Vec<Recipe>,
    /// Group label to membership, seeded from the manifest declarations
    pub groups: BTreeMap<String, Group>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups that ended up with at least one member.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values().filter(|g| !g.is_empty())
    }

    /// Look up a recipe by id.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}
