//! Markdown renderer backend
//!
//! Writes one `index.md` for the book, one page per recipe named after
//! the recipe id, and one page per non-empty group under `groups/`.

use crate::error::RenderResult;
use crate::renderer::{RenderContext, Renderer};
use cookbook_core::{Group, Recipe};
use log::info;
use std::fmt::Write as _;
use std::fs;

/// Built-in Markdown backend
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        fs::create_dir_all(ctx.output)?;
        fs::write(ctx.output.join("index.md"), index_page(ctx))?;

        for recipe in ctx.recipes {
            let path = ctx.output.join(format!("{}.md", recipe.id));
            info!("writing {}", path.display());
            fs::write(path, recipe_page(recipe))?;
        }

        let mut groups = ctx.non_empty_groups().peekable();
        if groups.peek().is_some() {
            let groups_dir = ctx.output.join("groups");
            fs::create_dir_all(&groups_dir)?;
            for group in groups {
                fs::write(
                    groups_dir.join(format!("{}.md", group.label)),
                    group_page(group, ctx),
                )?;
            }
        }
        Ok(())
    }
}

fn index_page(ctx: &RenderContext<'_>) -> String {
    let book = ctx.book;
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", book.title);
    for description in &book.descriptions {
        let _ = writeln!(out, "{}\n", description);
    }
    let _ = writeln!(out, "*{}*, revision {}\n", book.authors.join(", "), book.revision);
    let _ = writeln!(out, "## Recipes\n");
    for recipe in ctx.recipes {
        let _ = writeln!(out, "- [{}]({}.md)", recipe.title, recipe.id);
    }
    out
}

fn recipe_page(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", recipe.title);
    if let Some(img) = &recipe.img {
        let _ = writeln!(out, "![{}]({})\n", recipe.title, img);
    }
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}\n", recipe.tags.join(", "));
    }
    let _ = writeln!(out, "## Ingredients\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "- {}", ingredient);
    }
    let _ = writeln!(out, "\n## Steps\n");
    for step in &recipe.steps {
        let _ = writeln!(out, "- {}", step);
    }
    if !recipe.sources.is_empty() {
        let _ = writeln!(out, "\n## Sources\n");
        for source in &recipe.sources {
            let _ = writeln!(out, "- {}", source);
        }
    }
    out
}

fn group_page(group: &Group, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", group.label);
    for id in &group.recipe_ids {
        if let Some(recipe) = ctx.recipe(id) {
            let _ = writeln!(out, "- [{}](../{}.md)", recipe.title, recipe.id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "tea".to_string(),
            title: "Tea".to_string(),
            ingredients: vec![cookbook_core::Ingredient::parse("A. (1 cup) water").unwrap()],
            steps: vec![cookbook_core::Step::parse("1. boil").unwrap()],
            sources: vec![],
            tags: vec!["drink".to_string()],
            groups: vec![],
            img: None,
        }
    }

    #[test]
    fn test_recipe_page_contains_grammar_lines() {
        let page = recipe_page(&sample_recipe());
        assert!(page.contains("# Tea"));
        assert!(page.contains("- A. (1 cup) water"));
        assert!(page.contains("- 1. boil"));
        assert!(page.contains("Tags: drink"));
    }

    #[test]
    fn test_recipe_page_with_image() {
        let mut recipe = sample_recipe();
        recipe.img = Some("tea.png".to_string());
        assert!(recipe_page(&recipe).contains("![Tea](tea.png)"));
    }
}
