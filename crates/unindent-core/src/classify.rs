//! Line classification: blank, comment or code

use crate::line::{Line, Lines, is_indent_char, trim_indent};

/// Default comment marker
pub const DEFAULT_COMMENT_MARKER: &str = "#";

/// Category of a line for margin purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Only whitespace
    Blank,
    /// First non-whitespace text is the comment marker
    Comment,
    /// Anything else
    Code,
}

impl LineKind {
    /// Classify a line's content (terminator already stripped).
    ///
    /// The blank check runs first, so whitespace-only content is never a
    /// comment.
    pub fn classify(content: &str, comment_marker: &str) -> Self {
        let unindented = trim_indent(content);
        if unindented.trim_end_matches(is_indent_char).is_empty() {
            Self::Blank
        } else if unindented.starts_with(comment_marker) {
            Self::Comment
        } else {
            Self::Code
        }
    }
}

/// A line together with its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub line: Line<'a>,
    pub kind: LineKind,
}

/// Split and classify every line of `text`.
pub fn classify_lines<'a>(text: &'a str, comment_marker: &str) -> Vec<ClassifiedLine<'a>> {
    Lines::new(text)
        .map(|line| ClassifiedLine {
            kind: LineKind::classify(line.content, comment_marker),
            line,
        })
        .collect()
}
