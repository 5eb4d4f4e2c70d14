//! Concatenate every document into one file.

use std::path::{Path, PathBuf};

use bon::Builder;
use itertools::Itertools;

use super::{GeneratedFile, Generator, filtered};
use crate::{LegacyFile, RuleDocument, Target};

/// Writes the filtered documents, separated by blank lines, to a single file.
///
/// This layout never changed, so there are no legacy files to guard.
#[derive(Debug, Clone, Builder)]
pub struct Merged {
    target: Target,

    /// Output file, relative to the output root.
    #[builder(into)]
    path: PathBuf,

    /// Ignore file, relative to the output root.
    #[builder(into)]
    ignore_path: PathBuf,
}

impl Merged {
    /// GitHub Copilot's repository instructions.
    pub fn copilot() -> Self {
        Self::builder()
            .target(Target::Copilot)
            .path(Path::new(".github").join("copilot-instructions.md"))
            .ignore_path(".copilotignore")
            .build()
    }
}

impl Generator for Merged {
    fn target(&self) -> Target {
        self.target
    }

    fn generate(&self, documents: &[RuleDocument], output_root: &Path) -> Vec<GeneratedFile> {
        let contents = filtered(documents, self.target)
            .map(|(_, content)| content)
            .collect_vec();
        if contents.is_empty() {
            return vec![];
        }

        let merged = contents.join("\n\n");
        vec![GeneratedFile::new(
            self.output_path(output_root),
            merged + "\n",
        )]
    }

    fn output_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.path)
    }

    fn ignore_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.ignore_path)
    }

    fn legacy_files(&self, _output_root: &Path) -> Vec<LegacyFile> {
        vec![]
    }
}
