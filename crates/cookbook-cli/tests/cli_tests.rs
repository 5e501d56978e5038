//! End-to-end tests for the cookbook binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = "\
title: Family Recipes
descriptions:
  - Recipes collected over the years
authors:
  - The Family
revision: \"1.0\"
renderer: markdown
";

fn cookbook() -> Command {
    Command::cargo_bin("cookbook").unwrap()
}

fn write_recipe(dir: &Path, name: &str, title: &str) {
    fs::write(
        dir.join(name),
        format!(
            "id: {}\ntitle: {}\ningredients:\n  - A. (1 cup) water\nsteps:\n  - 1. boil\n",
            title.to_lowercase(),
            title
        ),
    )
    .unwrap();
}

#[test]
fn test_no_inputs_exits_zero() {
    cookbook().assert().success();
}

#[test]
fn test_validate_only_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_recipe(tmp.path(), "tea.yaml", "Tea");

    cookbook()
        .current_dir(tmp.path())
        .arg("tea.yaml")
        .assert()
        .success();

    // validation only: the input file is still the only entry
    let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_malformed_recipe_exits_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("bad.yaml"),
        "title: Bad\ningredients:\n  - A. water\nsteps:\n  - 1. boil\n",
    )
    .unwrap();

    cookbook()
        .current_dir(tmp.path())
        .arg("bad.yaml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[!]: "))
        .stderr(predicate::str::contains("bad.yaml"))
        .stderr(predicate::str::contains("missing ingredient quantity"));
}

#[test]
fn test_verbose_prints_cause_chain() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("bad.yaml"),
        "title: Bad\ningredients:\n  - A. water\nsteps:\n  - 1. boil\n",
    )
    .unwrap();

    cookbook()
        .current_dir(tmp.path())
        .args(["--verbose", "bad.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("caused by: "));
}

#[test]
fn test_render_produces_artifacts() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("book.yaml"), MANIFEST).unwrap();
    write_recipe(tmp.path(), "tea.yaml", "Tea");

    cookbook()
        .current_dir(tmp.path())
        .args([".", "-o", "out"])
        .assert()
        .success();

    assert!(tmp.path().join("out/index.md").is_file());
    assert!(tmp.path().join("out/tea.md").is_file());
}

#[test]
fn test_renderer_override() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("book.yaml"), MANIFEST).unwrap();
    write_recipe(tmp.path(), "tea.yaml", "Tea");

    cookbook()
        .current_dir(tmp.path())
        .args([".", "-o", "out", "-r", "sphinx"])
        .assert()
        .success();

    assert!(tmp.path().join("out/index.rst").is_file());
    assert!(!tmp.path().join("out/index.md").exists());
}

#[test]
fn test_output_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    write_recipe(tmp.path(), "tea.yaml", "Tea");

    cookbook()
        .current_dir(tmp.path())
        .args(["tea.yaml", "-o", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no book manifest"));
}

#[test]
fn test_unknown_renderer_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("book.yaml"),
        MANIFEST.replace("renderer: markdown", "renderer: html"),
    )
    .unwrap();
    write_recipe(tmp.path(), "tea.yaml", "Tea");

    cookbook()
        .current_dir(tmp.path())
        .args([".", "-o", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown renderer: html"));
}
