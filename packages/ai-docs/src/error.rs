//! Error kinds raised by the compilation pipeline.
//!
//! These are wrapped in a [`color_eyre::Report`] as they propagate, so callers
//! that care about the kind can `downcast_ref::<Error>()` on the report.

use std::path::PathBuf;

use derive_more::{Display, Error};

use crate::Target;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// The rule source directory does not exist.
    #[display("input directory not found: {path:?}")]
    MissingInputDirectory { path: PathBuf },

    /// An output location exists as a plain file where a directory is now expected.
    #[display("{name} exists as a file but the current format uses directories: {path:?}")]
    LegacyConflict { path: PathBuf, name: String },

    /// The registry was asked for a target nothing registered.
    #[display("no generator registered for target: {target}")]
    UnregisteredTarget { target: Target },
}
