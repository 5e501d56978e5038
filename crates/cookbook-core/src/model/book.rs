//! Book manifest model

use serde::Serialize;

/// The book manifest: collection-level metadata plus renderer selection
///
/// Produced from at most one manifest file per run. The five metadata
/// fields are required with no defaulting.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub title: String,
    pub descriptions: Vec<String>,
    pub authors: Vec<String>,
    pub revision: String,
    /// Name of the renderer backend, overridable per run
    pub renderer: String,
    /// Known group labels recipes may declare membership in
    pub groups: Vec<String>,
}
