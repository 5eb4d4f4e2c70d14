//! CLI Subcommand Smoke Tests

use std::fs;

use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

use crate::{files_under, project, run_ai_docs};

#[test]
fn test_init_then_compile() {
    let root = tempfile::tempdir().unwrap();

    let (exit_code, stdout, _stderr) = run_ai_docs(root.path(), &["init"]);
    pretty_assert_eq!(exit_code, 0, "init should exit 0");
    assert!(
        stdout.contains("initialization complete"),
        "init should report completion, got: {stdout}"
    );

    let (exit_code, stdout, stderr) = run_ai_docs(root.path(), &["compile"]);
    pretty_assert_eq!(exit_code, 0, "compile should exit 0, stderr: {stderr}");
    assert!(
        stdout.contains("copilot-instructions.md"),
        "compile should list generated files, got: {stdout}"
    );

    for path in [
        ".github/copilot-instructions.md",
        ".clinerules/01-general.md",
        ".cursor/rules/01-general.mdc",
        ".copilotignore",
        ".clineignore",
        ".cursor/ignore",
    ] {
        assert!(root.path().join(path).is_file(), "expected {path} to exist");
    }
}

#[test_case("compile"; "compile")]
#[test_case("sync"; "sync alias")]
#[test_case("preview"; "preview")]
#[test]
fn test_missing_input_directory(command: &str) {
    let root = tempfile::tempdir().unwrap();

    let (exit_code, _stdout, stderr) = run_ai_docs(root.path(), &[command]);
    pretty_assert_eq!(exit_code, 1, "{command} should fail without ai-docs/");
    assert!(
        stderr.contains("input directory not found"),
        "{command} should report the missing directory, got: {stderr}"
    );
    assert!(files_under(root.path()).is_empty());
}

#[test]
fn test_rules_path_is_file() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("ai-docs")).unwrap();
    fs::write(root.path().join("ai-docs/rules"), "not a directory").unwrap();
    fs::write(root.path().join("ai-docs/ignore"), "target/\n").unwrap();

    let (exit_code, _stdout, stderr) = run_ai_docs(root.path(), &["compile"]);
    pretty_assert_eq!(exit_code, 1);
    assert!(
        stderr.contains("input directory not found"),
        "compile should reject a rules file, got: {stderr}"
    );
    pretty_assert_eq!(files_under(root.path()), vec!["ai-docs/ignore", "ai-docs/rules"]);
}

#[test]
fn test_legacy_file_fails_without_writing() {
    let root = project(&[("a.md", "shared\n")], Some("target/\n"));
    fs::write(root.path().join(".clinerules"), "old merged rules").unwrap();
    let before = files_under(root.path());

    let (exit_code, _stdout, stderr) = run_ai_docs(root.path(), &["compile"]);
    pretty_assert_eq!(exit_code, 1, "compile should fail on a legacy file");
    assert!(
        stderr.contains(".clinerules"),
        "compile should name the legacy file, got: {stderr}"
    );
    pretty_assert_eq!(files_under(root.path()), before);
}

#[test_case(&["preview"]; "preview")]
#[test_case(&["plan"]; "plan alias")]
#[test_case(&["compile", "--plan"]; "compile with plan flag")]
#[test_case(&["sync", "--plan"]; "sync with plan flag")]
#[test]
fn test_preview_writes_nothing(args: &[&str]) {
    let root = project(
        &[("a.md", "## Cursor [cursor]\ncursor text\n")],
        Some("target/\n"),
    );
    let before = files_under(root.path());

    let (exit_code, stdout, stderr) = run_ai_docs(root.path(), args);
    pretty_assert_eq!(exit_code, 0, "preview should exit 0, stderr: {stderr}");
    assert!(
        stdout.contains("=== CURSOR PREVIEW ===") && stdout.contains("description: a"),
        "preview should render cursor output, got: {stdout}"
    );
    pretty_assert_eq!(files_under(root.path()), before);
}

#[test]
fn test_custom_directories() {
    let root = project(&[("a.md", "shared\n")], None);
    let (exit_code, stdout, stderr) = run_ai_docs(
        root.path(),
        &["compile", "--input", "ai-docs", "--output", "generated"],
    );
    pretty_assert_eq!(exit_code, 0, "compile should exit 0, stderr: {stderr}");
    assert!(
        stdout.contains("Using output directory: generated"),
        "compile should mention the output override, got: {stdout}"
    );
    pretty_assert_eq!(
        fs::read_to_string(root.path().join("generated/.clinerules/a.md")).unwrap(),
        "shared\n"
    );
}
