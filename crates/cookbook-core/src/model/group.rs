//! Group model

use serde::Serialize;

/// A named collection of recipes
///
/// Membership is back-populated during the load pass from the `groups`
/// declarations on individual recipes; the group itself never enumerates
/// members in source form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Group {
    /// Group label recipes refer to
    pub label: String,
    /// Ids of member recipes, in load order. Non-owning: the recipes live
    /// in the library collection of the same load pass.
    pub recipe_ids: Vec<String>,
}

impl Group {
    /// Create an empty group for a label.
    pub fn new(label: impl Into<String>) -> Self {
        Group {
            label: label.into(),
            recipe_ids: Vec::new(),
        }
    }

    /// True when no recipe declared membership.
    pub fn is_empty(&self) -> bool {
        self.recipe_ids.is_empty()
    }
}
