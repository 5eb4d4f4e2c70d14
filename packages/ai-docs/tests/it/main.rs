//! Integration tests for ai-docs.
//!
//! These tests build scratch projects in temporary directories and verify:
//! - Compiling writes the expected files for every assistant
//! - Legacy output files abort a run before anything is written
//! - Previews render the same output without touching the filesystem

mod cli;
mod preview;

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tempfile::TempDir;
use walkdir::WalkDir;
use xshell::{Shell, cmd};

/// Create a scratch project with `ai-docs/rules/<name>` for each rule, plus an
/// optional `ai-docs/ignore`.
pub fn project(rules: &[(&str, &str)], ignore: Option<&str>) -> TempDir {
    let root = tempfile::tempdir().expect("create temporary project");
    let rules_dir = root.path().join("ai-docs").join("rules");
    fs::create_dir_all(&rules_dir).expect("create rules directory");
    for (name, content) in rules {
        fs::write(rules_dir.join(name), content).expect("write rule document");
    }
    if let Some(ignore) = ignore {
        fs::write(root.path().join("ai-docs").join("ignore"), ignore).expect("write ignore file");
    }
    root
}

/// Every file under `root`, relative to it, sorted.
pub fn files_under(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.expect("walk directory"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .expect("path under root")
                .display()
                .to_string()
        })
        .sorted()
        .collect()
}

/// Run ai-docs in `dir` and return (exit_code, stdout, stderr).
pub fn run_ai_docs(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let sh = Shell::new().expect("create shell");
    sh.change_dir(dir);
    let bin = env!("CARGO_BIN_EXE_ai-docs");

    let output = cmd!(sh, "{bin} {args...}")
        .env_remove("AI_DOCS_INPUT")
        .env_remove("AI_DOCS_OUTPUT")
        .ignore_status()
        .output()
        .expect("failed to run ai-docs");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (exit_code, stdout, stderr)
}
