//! Create the `ai-docs/` layout for a new project.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};
use indoc::indoc;

use crate::{AI_DOCS_DIR, IGNORE_FILE, RULES_DIR};

/// Content of a freshly created ignore file.
pub const DEFAULT_IGNORE: &str = "# Ignore patterns for AI assistants\n";

/// Starter rule documents written into `ai-docs/rules/`.
pub const TEMPLATES: &[(&str, &str)] = &[
    (
        "01-general.md",
        indoc! {"
            # General guidelines

            Describe the project, its conventions, and anything an assistant
            should always keep in mind.

            ## Code style

            - Prefer small, focused changes.
            - Follow the existing naming conventions in each module.
        "},
    ),
    (
        "02-assistants.md",
        indoc! {"
            # Assistant-specific guidance

            Headings tagged with an assistant name only appear in that
            assistant's output. Untagged headings are shared.

            ## Copilot [copilot]

            Copilot-only instructions go here.

            ## Cline [cline]

            Cline-only instructions go here.

            ## Cursor [cursor]

            Cursor-only instructions go here.
        "},
    ),
];

/// What [`init`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Directories that did not exist and were created.
    pub created_dirs: Vec<PathBuf>,

    /// Files that did not exist and were written.
    pub created_files: Vec<PathBuf>,

    /// Files that already existed and were left alone.
    pub skipped_files: Vec<PathBuf>,
}

/// Create `<root>/ai-docs/rules/` with the starter templates and an ignore file.
///
/// Existing files are never overwritten, so running this again is harmless.
#[tracing::instrument]
pub fn init(root: &Path) -> Result<Report> {
    let mut report = Report::default();

    let ai_docs_dir = root.join(AI_DOCS_DIR);
    let rules_dir = ai_docs_dir.join(RULES_DIR);
    ensure_dir(&ai_docs_dir, &mut report)?;
    ensure_dir(&rules_dir, &mut report)?;

    for (name, content) in TEMPLATES {
        write_if_missing(&rules_dir.join(name), content, &mut report)?;
    }
    write_if_missing(&ai_docs_dir.join(IGNORE_FILE), DEFAULT_IGNORE, &mut report)?;

    Ok(report)
}

fn ensure_dir(dir: &Path, report: &mut Report) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).with_context(|| format!("create directory: {dir:?}"))?;
    tracing::info!(?dir, "created directory");
    report.created_dirs.push(dir.to_path_buf());
    Ok(())
}

fn write_if_missing(path: &Path, content: &str, report: &mut Report) -> Result<()> {
    if path.exists() {
        tracing::debug!(?path, "file already exists, skipping");
        report.skipped_files.push(path.to_path_buf());
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("write file: {path:?}"))?;
    tracing::info!(?path, "created file");
    report.created_files.push(path.to_path_buf());
    Ok(())
}
