//! Guard against output shapes written by earlier versions.
//!
//! Older releases wrote single merged files (`.clinerules`, `.cursorrules`)
//! where the current release writes directories. Writing into such a path
//! would either fail halfway through a run or clobber content the author may
//! still need, so the check runs once over every generator before anything
//! is written.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use color_eyre::{
    Section,
    eyre::{Context, Result},
};

use crate::Error;

/// A path that an older version may have created as a plain file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyFile {
    /// Where the legacy file would be.
    pub path: PathBuf,

    /// Display name of the legacy file, e.g. `.clinerules`.
    pub name: String,
}

impl LegacyFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Fail with [`Error::LegacyConflict`] if any of `files` exists as a plain file.
///
/// Paths that don't exist, or that exist as directories, are fine.
#[tracing::instrument]
pub fn check(files: &[LegacyFile]) -> Result<()> {
    for LegacyFile { path, name } in files {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e).with_context(|| format!("inspect legacy path: {path:?}")),
        };

        if metadata.is_file() {
            tracing::debug!(?path, "legacy file in the way");
            return Err(Error::LegacyConflict {
                path: path.clone(),
                name: name.clone(),
            })
            .suggestion(format!(
                "Remove the existing {name} file and try again, e.g. `rm {name}`"
            ));
        }
    }

    Ok(())
}
