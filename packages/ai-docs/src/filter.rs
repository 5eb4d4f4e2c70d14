//! Partition a rule document's lines into the content for a single target.
//!
//! Filtering is line oriented. A line starting with `#` is a heading; a
//! heading containing a `[...]` tag scopes the lines after it to that target.
//!
//! | Line kind             | `include_section` | `in_section` | Emitted                    |
//! |-----------------------|-------------------|--------------|----------------------------|
//! | heading, own tag      | `true`            | `true`       | heading minus tag, trimmed |
//! | heading, other tag    | `false`           | `false`      | nothing                    |
//! | heading, untagged     | `!in_section`     | `false`      | heading as-is              |
//! | content               | unchanged         | unchanged    | line, if included          |
//! | blank                 | unchanged         | unchanged    | nothing                    |
//!
//! Every heading resets `in_section` before the row above applies, so an
//! untagged heading always resumes inclusion.

use itertools::Itertools;

use crate::Target;

/// Filter `content` down to the lines that apply to `target`.
///
/// Content before the first heading is included. Blank lines are always
/// dropped, and the result is joined with `\n` without a trailing newline.
///
/// ```
/// use ai_docs::{Target, filter::for_target};
///
/// let content = "shared\n## Setup [cursor]\ncursor only\n## Other [cline]\ncline only\n";
/// assert_eq!(for_target(content, Target::Cursor), "shared\n## Setup\ncursor only");
/// ```
pub fn for_target(content: &str, target: Target) -> String {
    let tag = target.tag();
    let mut state = SectionState::default();
    content
        .split('\n')
        .filter_map(|line| state.step(line, &tag))
        .join("\n")
}

/// How a single line is treated by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// A heading carrying the tag of the target being filtered for.
    OwnHeading,
    /// A heading carrying some other bracketed tag.
    OtherHeading,
    /// A heading with no bracket at all.
    UntaggedHeading,
    /// A non-blank, non-heading line.
    Content,
    /// A line that is empty after trimming.
    Blank,
}

impl LineKind {
    fn classify(line: &str, tag: &str) -> Self {
        if line.starts_with('#') {
            if line.contains(tag) {
                LineKind::OwnHeading
            } else if line.contains('[') {
                LineKind::OtherHeading
            } else {
                LineKind::UntaggedHeading
            }
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Content
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionState {
    include_section: bool,
    in_section: bool,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            include_section: true,
            in_section: false,
        }
    }
}

impl SectionState {
    /// Advance over one line, returning the text to emit for it (if any).
    fn step(&mut self, line: &str, tag: &str) -> Option<String> {
        let kind = LineKind::classify(line, tag);
        if matches!(
            kind,
            LineKind::OwnHeading | LineKind::OtherHeading | LineKind::UntaggedHeading
        ) {
            self.in_section = false;
        }

        match kind {
            LineKind::OwnHeading => {
                self.include_section = true;
                self.in_section = true;
                Some(line.replacen(tag, "", 1).trim().to_string())
            }
            LineKind::OtherHeading => {
                self.include_section = false;
                None
            }
            LineKind::UntaggedHeading => {
                self.include_section = !self.in_section;
                Some(line.to_string())
            }
            LineKind::Content if self.include_section => Some(line.to_string()),
            LineKind::Content | LineKind::Blank => None,
        }
    }
}
