//! Initialize an ai-docs directory.

use std::path::PathBuf;

use ai_docs::{AI_DOCS_DIR, IGNORE_FILE, RULES_DIR, scaffold};
use clap::Args;
use color_eyre::eyre::{Context, Result};
use color_print::cprintln;
use tracing::instrument;

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// The project root to create the ai-docs directory in.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    let report = scaffold::init(&config.root).context("initialize ai-docs directory")?;

    for dir in &report.created_dirs {
        println!("✓ Created directory {}", dir.display());
    }
    for file in &report.created_files {
        println!("✓ Created file {}", file.display());
    }
    for file in &report.skipped_files {
        println!("- Skipped existing file {}", file.display());
    }
    println!();

    cprintln!("<green>{} project initialization complete!</green>", AI_DOCS_DIR);
    println!();
    println!("Next steps:");
    println!("1. Edit rules: modify files in {AI_DOCS_DIR}/{RULES_DIR}/");
    println!("2. Edit ignore patterns: modify {AI_DOCS_DIR}/{IGNORE_FILE}");
    println!("3. Compile: ai-docs compile");
    println!("4. Preview: ai-docs preview");

    Ok(())
}
