//! Source loader
//!
//! Walks input paths, decodes recipe files and builds the library for a
//! run. The reserved manifest name `book.yaml` is consumed separately as
//! the Book source and never counted as a recipe. The whole pass is
//! fail-fast: the first error anywhere aborts the batch.

use crate::error::{LoadError, LoadResult};
use crate::library::Library;
use crate::options::{GroupPolicy, LoadOptions};
use cookbook_core::{Book, Group, Recipe};
use cookbook_parser::{BookParser, ParseError, RecipeParser};
use log::{debug, info, warn};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reserved manifest file name
pub const BOOK_FILE: &str = "book.yaml";

/// Recognized recipe file extension
const RECIPE_EXT: &str = "yaml";

/// Drives document construction for every file under the input paths
pub struct SourceLoader {
    options: LoadOptions,
}

impl SourceLoader {
    /// Create a loader with default options.
    pub fn new() -> Self {
        Self::with_options(LoadOptions::default())
    }

    /// Create a loader with explicit options.
    pub fn with_options(options: LoadOptions) -> Self {
        SourceLoader { options }
    }

    /// Run one load pass over the given inputs.
    pub fn load(&self, inputs: &[PathBuf]) -> LoadResult<Library> {
        let mut library = Library::new();
        if let Some(book) = self.load_book(inputs)? {
            for label in &book.groups {
                library
                    .groups
                    .insert(label.clone(), Group::new(label.clone()));
            }
            library.book = Some(book);
        }
        self.load_recipes(inputs, &mut library)?;
        Ok(library)
    }

    /// Locate and parse the book manifest.
    ///
    /// Each input is checked in order: a directory is searched for the
    /// reserved file name directly inside it, a file matches when its own
    /// name is the reserved name. The first match wins; manifests are
    /// never merged.
    pub fn load_book(&self, inputs: &[PathBuf]) -> LoadResult<Option<Book>> {
        for input in inputs {
            let candidate = if input.is_dir() {
                input.join(BOOK_FILE)
            } else if input.file_name().is_some_and(|n| n == BOOK_FILE) {
                input.clone()
            } else {
                continue;
            };
            if candidate.is_file() {
                let text = read_source(&candidate)?;
                let book = BookParser::parse(&text).map_err(|source| LoadError::Source {
                    path: candidate.clone(),
                    source,
                })?;
                info!("loaded book manifest: {}", candidate.display());
                return Ok(Some(book));
            }
        }
        Ok(None)
    }

    /// Collect recipes from every input path into the library.
    pub fn load_recipes(&self, inputs: &[PathBuf], library: &mut Library) -> LoadResult<()> {
        for input in inputs {
            if input.is_dir() {
                self.process_dir(input, library)?;
            } else if input.file_name().is_some_and(|n| n == BOOK_FILE) {
                continue;
            } else {
                self.process_file(input, library)?;
            }
        }
        Ok(())
    }

    /// Walk a directory recursively, processing every recipe candidate.
    fn process_dir(&self, dir: &Path, library: &mut Library) -> LoadResult<()> {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                LoadError::Unexpected {
                    path,
                    source: e.into(),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.file_name().is_some_and(|n| n == BOOK_FILE) {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(RECIPE_EXT) {
                continue;
            }
            self.process_file(path, library)?;
        }
        Ok(())
    }

    /// Decode one recipe file and add it to the library.
    ///
    /// An empty or null document is skipped with a diagnostic and
    /// contributes no recipe.
    fn process_file(&self, path: &Path, library: &mut Library) -> LoadResult<()> {
        info!("processing file: {}", path.display());
        let text = read_source(path)?;
        if text.trim().is_empty() {
            warn!("empty file found: {}", path.display());
            return Ok(());
        }

        let located = |source: ParseError| LoadError::Source {
            path: path.to_path_buf(),
            source,
        };

        let data: YamlValue = serde_yaml::from_str(&text).map_err(|e| located(e.into()))?;
        if data.is_null() {
            warn!("empty file found: {}", path.display());
            return Ok(());
        }

        let mut recipe = RecipeParser::parse_from_yaml(&data).map_err(located)?;
        recipe.img = self.find_image(path);
        self.link_groups(path, &recipe, library)?;
        library.recipes.push(recipe);
        Ok(())
    }

    /// Probe sibling files for a companion image sharing the recipe's
    /// base name; the first extension in priority order wins. Finding
    /// none is not an error.
    fn find_image(&self, path: &Path) -> Option<String> {
        for ext in &self.options.image_extensions {
            let candidate = path.with_extension(ext);
            if candidate.is_file() {
                return candidate
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(String::from);
            }
        }
        None
    }

    /// Append the recipe to every group it declares membership in.
    fn link_groups(&self, path: &Path, recipe: &Recipe, library: &mut Library) -> LoadResult<()> {
        for label in &recipe.groups {
            match library.groups.get_mut(label) {
                Some(group) => group.recipe_ids.push(recipe.id.clone()),
                None => match self.options.unknown_groups {
                    GroupPolicy::Deny => {
                        return Err(LoadError::UnknownGroup {
                            path: path.to_path_buf(),
                            label: label.clone(),
                        });
                    }
                    GroupPolicy::Ignore => {
                        debug!(
                            "ignoring unknown group label '{}' in {}",
                            label,
                            path.display()
                        );
                    }
                },
            }
        }
        Ok(())
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_source(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Unexpected {
        path: path.to_path_buf(),
        source,
    })
}
