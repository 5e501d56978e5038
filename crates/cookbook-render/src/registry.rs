//! Renderer registry
//!
//! Centralized name to renderer mapping, populated at startup. Lookup by
//! name keeps renderer selection late-bound without any runtime module
//! resolution.

use crate::error::RenderError;
use crate::markdown::MarkdownRenderer;
use crate::renderer::Renderer;
use crate::sphinx::SphinxRenderer;
use std::collections::HashMap;

/// Registry of output backends
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in renderers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(MarkdownRenderer);
        registry.register(SphinxRenderer);
        registry
    }

    /// Register a renderer. A renderer already registered under the same
    /// name is replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name.
    pub fn get(&self, name: &str) -> Result<&dyn Renderer, RenderError> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| RenderError::UnknownRenderer(name.to_string()))
    }

    /// Check whether a renderer exists.
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// List all registered renderer names (sorted).
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
