//! Load pass configuration

/// Policy for group labels that do not resolve to a known group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupPolicy {
    /// Fail the load pass
    #[default]
    Deny,
    /// Skip the label with a debug diagnostic
    Ignore,
}

/// Options controlling a load pass
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// What to do when a recipe references an undeclared group
    pub unknown_groups: GroupPolicy,
    /// Companion image extensions, probed in priority order
    pub image_extensions: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            unknown_groups: GroupPolicy::default(),
            image_extensions: vec!["png".to_string(), "jpeg".to_string()],
        }
    }
}
