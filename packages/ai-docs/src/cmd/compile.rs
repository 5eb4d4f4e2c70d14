//! Compile rules and write them for every assistant.

use ai_docs::{Registry, compiler};
use clap::Args;
use color_eyre::eyre::Result;
use color_print::cprintln;
use tracing::instrument;

use super::{Dirs, preview};

#[derive(Args, Clone, Debug)]
pub struct Config {
    #[command(flatten)]
    dirs: Dirs,

    /// Only show what would be written, like `ai-docs preview`.
    #[arg(long)]
    plan: bool,
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    if config.plan {
        return preview::main(preview::Config::from(config.dirs));
    }

    config.dirs.require_input()?;
    println!("Compiling rules...");

    let registry = Registry::default();
    let written = compiler::compile(&registry, &config.dirs.input, &config.dirs.output)?;
    for path in &written {
        println!("✓ Generated {}", path.display());
    }

    if written.is_empty() {
        println!("No rule content found; nothing was written.");
    } else {
        cprintln!("<green>Rules compiled successfully!</green>");
    }
    config.dirs.print_overrides();

    Ok(())
}
