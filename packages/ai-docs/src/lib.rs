//! Main library for ai-docs, used by its CLI.
//!
//! Rule documents live in a single `ai-docs/rules/` directory. Each document
//! may scope sections to a single assistant with a tag in a heading (for
//! example `## Testing [cursor]`); the compiler filters every document per
//! target and hands the results to that target's [`generator::Generator`].

pub mod compiler;
pub mod error;
pub mod filter;
pub mod generator;
pub mod legacy;
pub mod rules;
pub mod scaffold;
pub mod target;

pub use error::Error;
pub use generator::{GeneratedFile, Generator, Registry};
pub use legacy::LegacyFile;
pub use rules::RuleDocument;
pub use target::Target;

/// Name of the directory holding the rule sources, relative to the project root.
pub const AI_DOCS_DIR: &str = "ai-docs";

/// Name of the rule document directory, relative to [`AI_DOCS_DIR`].
pub const RULES_DIR: &str = "rules";

/// Name of the shared ignore-pattern file, relative to [`AI_DOCS_DIR`].
pub const IGNORE_FILE: &str = "ignore";
