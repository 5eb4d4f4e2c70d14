//! Assistants that rule documents are compiled for.

use derive_more::Display;

/// A destination assistant with its own configuration conventions.
///
/// The declaration order is the order targets are compiled and previewed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Target {
    /// GitHub Copilot: `.github/copilot-instructions.md`.
    #[display("copilot")]
    Copilot,

    /// Cline: `.clinerules/`.
    #[display("cline")]
    Cline,

    /// Cursor: `.cursor/rules/`.
    #[display("cursor")]
    Cursor,
}

impl Target {
    /// Every built-in target, in compilation order.
    pub const ALL: [Target; 3] = [Target::Copilot, Target::Cline, Target::Cursor];

    /// The tag that scopes a heading to this target, e.g. `[cursor]`.
    pub fn tag(self) -> String {
        format!("[{self}]")
    }
}
