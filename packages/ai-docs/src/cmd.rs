//! CLI subcommands.

use std::path::{Path, PathBuf};

use ai_docs::{AI_DOCS_DIR, Error};
use clap::Args;
use color_eyre::{Result, Section};

pub mod compile;
pub mod init;
pub mod preview;

/// Where rules are read from and where outputs are written.
#[derive(Args, Clone, Debug)]
pub struct Dirs {
    /// The ai-docs directory containing `rules/` and `ignore`.
    #[arg(long, env = "AI_DOCS_INPUT", default_value = AI_DOCS_DIR)]
    pub input: PathBuf,

    /// The project root that outputs are written under.
    #[arg(long, env = "AI_DOCS_OUTPUT", default_value = ".")]
    pub output: PathBuf,
}

impl Dirs {
    /// Fail early with a hint if the input directory hasn't been created yet.
    pub fn require_input(&self) -> Result<()> {
        if self.input.is_dir() {
            return Ok(());
        }
        Err(Error::MissingInputDirectory {
            path: self.input.clone(),
        })
        .suggestion("Run `ai-docs init` to create it.")
    }

    /// Mention any directory that differs from its default.
    pub fn print_overrides(&self) {
        if self.output != Path::new(".") {
            println!("Using output directory: {}", self.output.display());
        }
        if self.input != Path::new(AI_DOCS_DIR) {
            println!("Using input directory: {}", self.input.display());
        }
    }
}
