//! ai-docs keeps one set of rules for every AI coding assistant.

use color_eyre::Result;
use tracing::{instrument, level_filters::LevelFilter};

mod cmd;

use clap::{Parser, Subcommand};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Compile ai-docs rules into configuration for Copilot, Cline, and Cursor.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an ai-docs directory with starter rules.
    Init(cmd::init::Config),

    /// Compile rules and write them for every assistant.
    #[command(alias = "sync")]
    Compile(cmd::compile::Config),

    /// Show what compile would write, without writing anything.
    #[command(alias = "plan")]
    Preview(cmd::preview::Config),
}

#[instrument]
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Progress is printed to stdout by each command; tracing output is for
    // debugging with `AI_DOCS_LOG` directives, e.g. `AI_DOCS_LOG=debug`.
    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            fmt::layer()
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_writer(std::io::stderr)
                .pretty(),
        )
        .with(
            EnvFilter::builder()
                .with_env_var("AI_DOCS_LOG")
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        Commands::Init(config) => cmd::init::main(config),
        Commands::Compile(config) => cmd::compile::main(config),
        Commands::Preview(config) => cmd::preview::main(config),
    }
}
