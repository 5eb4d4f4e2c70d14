//! Copy each document into a directory of its own.

use std::path::{Path, PathBuf};

use bon::Builder;

use super::{GeneratedFile, Generator, filtered};
use crate::{LegacyFile, RuleDocument, Target};

/// Writes each filtered document to `<dir>/<filename>`.
///
/// Older versions wrote a single merged file at the directory's own path,
/// which is reported as a legacy file.
#[derive(Debug, Clone, Builder)]
pub struct PerFile {
    target: Target,

    /// Output directory, relative to the output root.
    #[builder(into)]
    dir: PathBuf,

    /// Ignore file, relative to the output root.
    #[builder(into)]
    ignore_path: PathBuf,
}

impl PerFile {
    /// Cline's `.clinerules/` directory.
    pub fn cline() -> Self {
        Self::builder()
            .target(Target::Cline)
            .dir(".clinerules")
            .ignore_path(".clineignore")
            .build()
    }
}

impl Generator for PerFile {
    fn target(&self) -> Target {
        self.target
    }

    fn generate(&self, documents: &[RuleDocument], output_root: &Path) -> Vec<GeneratedFile> {
        let dir = self.output_path(output_root);
        filtered(documents, self.target)
            .map(|(document, content)| {
                GeneratedFile::new(dir.join(&document.filename), content + "\n")
            })
            .collect()
    }

    fn output_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.dir)
    }

    fn ignore_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.ignore_path)
    }

    fn legacy_files(&self, output_root: &Path) -> Vec<LegacyFile> {
        vec![LegacyFile::new(
            self.output_path(output_root),
            self.dir.display().to_string(),
        )]
    }
}
