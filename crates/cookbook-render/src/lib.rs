//! Cookbook Render - renderer contract, registry and built-in backends
//!
//! Renderers turn the validated Book/Recipe model into on-disk artifacts.
//! Selection is late-bound by name through an explicit registry populated
//! at startup; the document model is the sole input contract a renderer
//! may rely on.

pub mod error;
pub mod markdown;
pub mod registry;
pub mod renderer;
pub mod sphinx;

pub use error::{RenderError, RenderResult};
pub use markdown::MarkdownRenderer;
pub use registry::RendererRegistry;
pub use renderer::{RenderContext, Renderer};
pub use sphinx::SphinxRenderer;
