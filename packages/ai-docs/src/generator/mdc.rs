//! Reformat each document as an MDC rule file.

use std::path::{Path, PathBuf};

use bon::Builder;
use indoc::formatdoc;

use super::{GeneratedFile, Generator, filtered};
use crate::{LegacyFile, RuleDocument, Target};

/// Writes each filtered document to `<dir>/<stem>.mdc`, prefixed with a front
/// matter block describing the rule.
#[derive(Debug, Clone, Builder)]
pub struct Mdc {
    target: Target,

    /// Output directory, relative to the output root.
    #[builder(into)]
    dir: PathBuf,

    /// Ignore file, relative to the output root.
    #[builder(into)]
    ignore_path: PathBuf,

    /// Single-file layouts used by older versions, relative to the output root.
    #[builder(default)]
    legacy: Vec<PathBuf>,
}

impl Mdc {
    /// Cursor's `.cursor/rules/` directory.
    pub fn cursor() -> Self {
        Self::builder()
            .target(Target::Cursor)
            .dir(Path::new(".cursor").join("rules"))
            .ignore_path(Path::new(".cursor").join("ignore"))
            .legacy(vec![
                PathBuf::from(".cursorrules"),
                PathBuf::from(".cursorignore"),
            ])
            .build()
    }
}

/// Prefix `content` with the MDC front matter for the document `filename`.
///
/// The description is the file name without its extension; `globs` and
/// `alwaysApply` are left for the author to fill in.
pub fn to_mdc(content: &str, filename: &str) -> String {
    let description = Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    formatdoc! {"
        ---
        description: {description}
        globs:
        alwaysApply: false
        ---

        {content}"
    }
}

impl Generator for Mdc {
    fn target(&self) -> Target {
        self.target
    }

    fn generate(&self, documents: &[RuleDocument], output_root: &Path) -> Vec<GeneratedFile> {
        let dir = self.output_path(output_root);
        filtered(documents, self.target)
            .map(|(document, content)| {
                let filename = Path::new(&document.filename).with_extension("mdc");
                GeneratedFile::new(dir.join(filename), to_mdc(&content, &document.filename))
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
        self.legacy
            .iter()
            .map(|path| LegacyFile::new(output_root.join(path), path.display().to_string()))
            .collect()
    }
}
