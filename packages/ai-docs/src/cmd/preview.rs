//! Show what compile would write, without writing anything.

use std::io::{self, Write};

use ai_docs::{Registry, compiler};
use clap::Args;
use color_eyre::eyre::{Context, Result};
use tracing::instrument;

use super::Dirs;

#[derive(Args, Clone, Debug)]
pub struct Config {
    #[command(flatten)]
    dirs: Dirs,
}

impl From<Dirs> for Config {
    fn from(dirs: Dirs) -> Self {
        Self { dirs }
    }
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    config.dirs.require_input()?;
    println!("Previewing rules...");

    let registry = Registry::default();
    let mut stdout = io::stdout().lock();
    compiler::preview(&registry, &config.dirs.input, &config.dirs.output, &mut stdout)?;
    stdout.flush().context("flush stdout")?;
    drop(stdout);

    println!("Preview complete. Run `ai-docs compile` to write these files.");
    config.dirs.print_overrides();

    Ok(())
}
