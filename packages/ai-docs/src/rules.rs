//! Rule documents and loading operations.

use std::fs::read_to_string;
use std::path::Path;

use color_eyre::eyre::{Context, Result, bail};
use walkdir::WalkDir;

use crate::{Error, Target, filter};

/// A single author-maintained rule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    /// File name of the document, e.g. `01-general.md`.
    pub filename: String,

    /// Unfiltered content of the document.
    pub content: String,
}

impl RuleDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// The content of this document that applies to `target`, or `None` if
    /// nothing but whitespace remains after filtering.
    pub fn filtered(&self, target: Target) -> Option<String> {
        let content = filter::for_target(&self.content, target);
        if content.trim().is_empty() {
            None
        } else {
            Some(content)
        }
    }
}

/// Load every `*.md` document directly inside `dir`, sorted by file name.
///
/// Fails with [`Error::MissingInputDirectory`] if `dir` is not a directory.
/// An existing directory without any documents only produces a warning.
#[tracing::instrument]
pub fn load(dir: &Path) -> Result<Vec<RuleDocument>> {
    if !dir.is_dir() {
        bail!(Error::MissingInputDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut documents = vec![];
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("list rules directory: {dir:?}"))?;
        let Some(filename) = entry.file_name().to_str() else {
            tracing::warn!(path = ?entry.path(), "skipping rule with non-UTF-8 file name");
            continue;
        };
        if !entry.file_type().is_file() || !filename.ends_with(".md") {
            tracing::debug!(?filename, "skipping non-markdown entry");
            continue;
        }

        let content = read_to_string(entry.path())
            .with_context(|| format!("read rule document: {:?}", entry.path()))?;
        documents.push(RuleDocument::new(filename, content));
    }

    if documents.is_empty() {
        tracing::warn!(?dir, "no rule files found");
    }

    Ok(documents)
}
