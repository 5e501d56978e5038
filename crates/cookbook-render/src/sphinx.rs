//! Sphinx renderer backend
//!
//! Writes a reStructuredText artifact tree: `index.rst` with a toctree
//! over all recipes, one `.rst` page per recipe and one page per
//! non-empty group under `groups/`.

use crate::error::RenderResult;
use crate::renderer::{RenderContext, Renderer};
use cookbook_core::{Group, Recipe};
use log::info;
use std::fmt::Write as _;
use std::fs;

/// Built-in Sphinx (reStructuredText) backend
pub struct SphinxRenderer;

impl Renderer for SphinxRenderer {
    fn name(&self) -> &'static str {
        "sphinx"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        fs::create_dir_all(ctx.output)?;
        fs::write(ctx.output.join("index.rst"), index_page(ctx))?;

        for recipe in ctx.recipes {
            let path = ctx.output.join(format!("{}.rst", recipe.id));
            info!("writing {}", path.display());
            fs::write(path, recipe_page(recipe))?;
        }

        let mut groups = ctx.non_empty_groups().peekable();
        if groups.peek().is_some() {
            let groups_dir = ctx.output.join("groups");
            fs::create_dir_all(&groups_dir)?;
            for group in groups {
                fs::write(
                    groups_dir.join(format!("{}.rst", group.label)),
                    group_page(group, ctx),
                )?;
            }
        }
        Ok(())
    }
}

fn heading(text: &str, underline: char) -> String {
    format!("{}\n{}\n", text, underline.to_string().repeat(text.chars().count()))
}

fn index_page(ctx: &RenderContext<'_>) -> String {
    let book = ctx.book;
    let mut out = String::new();
    out.push_str(&heading(&book.title, '='));
    out.push('\n');
    for description in &book.descriptions {
        let _ = writeln!(out, "{}\n", description);
    }
    let _ = writeln!(out, ":Authors: {}", book.authors.join(", "));
    let _ = writeln!(out, ":Revision: {}\n", book.revision);
    let _ = writeln!(out, ".. toctree::\n   :maxdepth: 1\n");
    for recipe in ctx.recipes {
        let _ = writeln!(out, "   {}", recipe.id);
    }
    out
}

fn recipe_page(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&heading(&recipe.title, '='));
    out.push('\n');
    if let Some(img) = &recipe.img {
        let _ = writeln!(out, ".. image:: {}\n", img);
    }
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, ":Tags: {}\n", recipe.tags.join(", "));
    }
    out.push_str(&heading("Ingredients", '-'));
    out.push('\n');
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "- {}", ingredient);
    }
    out.push('\n');
    out.push_str(&heading("Steps", '-'));
    out.push('\n');
    for step in &recipe.steps {
        let _ = writeln!(out, "- {}", step);
    }
    if !recipe.sources.is_empty() {
        out.push('\n');
        out.push_str(&heading("Sources", '-'));
        out.push('\n');
        for source in &recipe.sources {
            let _ = writeln!(out, "- {}", source);
        }
    }
    out
}

fn group_page(group: &Group, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    out.push_str(&heading(&group.label, '='));
    out.push('\n');
    for id in &group.recipe_ids {
        if let Some(recipe) = ctx.recipe(id) {
            let _ = writeln!(out, "- :doc:`{} <../{}>`", recipe.title, recipe.id);
        }
    }
    out
}
