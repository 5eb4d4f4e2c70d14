//! Previews render planned output without touching the filesystem.

use std::fs;

use ai_docs::{Registry, compiler};
use pretty_assertions::assert_eq as pretty_assert_eq;

use crate::{files_under, project};

#[test]
fn test_preview_matches_plan_and_writes_nothing() {
    let input = project(
        &[("a.md", "## Cline [cline]\ncline text\n"), ("b.md", "shared\n")],
        Some("node_modules/\n"),
    );
    let out = tempfile::tempdir().unwrap();
    let input_root = input.path().join("ai-docs");
    let registry = Registry::default();

    let mut rendered = Vec::new();
    compiler::preview(&registry, &input_root, out.path(), &mut rendered).unwrap();
    let rendered = String::from_utf8(rendered).unwrap();

    let outputs = compiler::plan(&registry, &input_root, out.path()).unwrap();
    let mut expected = Vec::new();
    compiler::render(&outputs, &mut expected).unwrap();
    pretty_assert_eq!(rendered, String::from_utf8(expected).unwrap());

    for header in [
        "=== COPILOT PREVIEW ===",
        "=== CLINE PREVIEW ===",
        "=== CURSOR PREVIEW ===",
        "=== CLINE IGNORE PREVIEW ===",
    ] {
        assert!(rendered.contains(header), "missing {header} in:\n{rendered}");
    }
    assert!(rendered.contains("## Cline\ncline text\n"));
    assert!(files_under(out.path()).is_empty());
}

#[test]
fn test_preview_ignores_legacy_files() {
    let input = project(&[("a.md", "shared\n")], None);
    let out = tempfile::tempdir().unwrap();
    fs::write(out.path().join(".clinerules"), "old merged rules").unwrap();

    let mut rendered = Vec::new();
    compiler::preview(
        &Registry::default(),
        &input.path().join("ai-docs"),
        out.path(),
        &mut rendered,
    )
    .unwrap();

    assert!(!rendered.is_empty());
    pretty_assert_eq!(files_under(out.path()), vec![".clinerules"]);
}
