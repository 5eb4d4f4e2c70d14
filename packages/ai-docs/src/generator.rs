//! Turn filtered rule documents into target-specific output files.
//!
//! Each [`Target`] is served by one [`Generator`], looked up through a
//! [`Registry`]. Three strategies cover the built-in targets:
//! - [`Merged`]: every document concatenated into a single file.
//! - [`PerFile`]: one file per document, copied as-is.
//! - [`Mdc`]: one file per document, with a front matter header.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail};

use crate::{Error, LegacyFile, RuleDocument, Target};

pub use mdc::{Mdc, to_mdc};
pub use merged::Merged;
pub use per_file::PerFile;

mod mdc;
mod merged;
mod per_file;

/// A file produced by a generator, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Produces the output files for one target.
///
/// Implementations are pure: they compute paths and content, and leave
/// writing to the [`compiler`](crate::compiler).
pub trait Generator: Debug {
    /// The target whose sections this generator keeps.
    fn target(&self) -> Target;

    /// Produce output files from the full, ordered set of documents.
    ///
    /// Documents with no content left after filtering for [`Generator::target`]
    /// are skipped; the result may be empty.
    fn generate(&self, documents: &[RuleDocument], output_root: &Path) -> Vec<GeneratedFile>;

    /// The primary output location: a single file or a directory of files.
    fn output_path(&self, output_root: &Path) -> PathBuf;

    /// Where this target reads ignore patterns from.
    fn ignore_path(&self, output_root: &Path) -> PathBuf;

    /// Paths that an older version wrote as files where this one expects directories.
    fn legacy_files(&self, output_root: &Path) -> Vec<LegacyFile>;

    /// Map the shared ignore patterns to this target's ignore file.
    ///
    /// Returns `None` for targets without an ignore file.
    fn generate_ignore(&self, ignore: &str, output_root: &Path) -> Option<GeneratedFile> {
        Some(GeneratedFile::new(self.ignore_path(output_root), ignore))
    }
}

/// Maps each target to the generator that serves it.
///
/// [`Registry::default`] serves every built-in target; use
/// [`Registry::empty`] and [`Registry::register`] to assemble a custom set.
#[derive(Debug)]
pub struct Registry {
    generators: BTreeMap<Target, Box<dyn Generator>>,
}

impl Registry {
    /// A registry without any generators.
    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Register `generator` for its target, returning any generator it replaced.
    pub fn register(&mut self, generator: impl Generator + 'static) -> Option<Box<dyn Generator>> {
        let target = generator.target();
        tracing::debug!(%target, ?generator, "register generator");
        self.generators.insert(target, Box::new(generator))
    }

    /// Look up the generator for `target`.
    pub fn get(&self, target: Target) -> Result<&dyn Generator> {
        match self.generators.get(&target) {
            Some(generator) => Ok(generator.as_ref()),
            None => bail!(Error::UnregisteredTarget { target }),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Merged::copilot());
        registry.register(PerFile::cline());
        registry.register(Mdc::cursor());
        registry
    }
}

/// Filter every document for `target`, keeping the ones with content left.
///
/// Yields the original document alongside its filtered content.
fn filtered(
    documents: &[RuleDocument],
    target: Target,
) -> impl Iterator<Item = (&RuleDocument, String)> {
    documents
        .iter()
        .filter_map(move |document| document.filtered(target).map(|content| (document, content)))
}
