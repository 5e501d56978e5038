//! Cookbook Loader - source discovery and loading
//!
//! This crate walks input paths, decodes recipe files and builds the
//! in-memory library for one run. Failures from decoding or document
//! construction never leak raw: they are rethrown as source-located
//! errors naming the offending file.

pub mod error;
pub mod library;
pub mod loader;
pub mod options;

pub use error::{LoadError, LoadResult};
pub use library::Library;
pub use loader::{SourceLoader, BOOK_FILE};
pub use options::{GroupPolicy, LoadOptions};
