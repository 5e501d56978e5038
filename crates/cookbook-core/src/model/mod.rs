//! Document model definitions for the cookbook
//!
//! This module contains the validated in-memory model:
//! - Ingredients and Steps (parsed from the field grammar)
//! - Recipes (one per source file)
//! - The Book manifest
//! - Groups (label-matched recipe collections)

pub mod book;
pub mod group;
pub mod ingredient;
pub mod recipe;
pub mod step;

pub use book::Book;
pub use group::Group;
pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use step::Step;
