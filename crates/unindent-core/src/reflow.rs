//! Per-line margin removal and the comment policy

use crate::classify::{ClassifiedLine, LineKind};
use crate::error::{Error, Result};
use crate::line::{is_indent_char, trim_indent};

/// How comment lines are treated when the margin is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentPolicy {
    /// Comments lose the margin like code; an outdented comment is an error.
    #[default]
    Strict,
    /// Comments are left-justified to column 0 whatever their indentation.
    Reflow,
}

impl CommentPolicy {
    pub fn reflows(&self) -> bool {
        matches!(self, Self::Reflow)
    }
}

impl From<bool> for CommentPolicy {
    fn from(reflow_comments: bool) -> Self {
        if reflow_comments {
            Self::Reflow
        } else {
            Self::Strict
        }
    }
}

/// Drop the first `n` characters of `s`, or everything if it is shorter.
pub fn strip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((pos, _)) => &s[pos..],
        None => "",
    }
}

/// Remove `margin` from one line according to its kind and `policy`.
///
/// The returned slice borrows from the line's content; the terminator is
/// left to the caller.
pub fn reflow_line<'a>(
    line: &ClassifiedLine<'a>,
    margin: usize,
    policy: CommentPolicy,
) -> Result<&'a str> {
    let content = line.line.content;

    let reflowed = match line.kind {
        LineKind::Code => {
            let stripped = strip_chars(content, margin);
            debug_assert!(
                content[..content.len() - stripped.len()]
                    .chars()
                    .all(is_indent_char),
                "margin {margin} cuts into code on line {}",
                line.line.number
            );
            stripped
        }
        LineKind::Blank => strip_chars(content, margin),
        LineKind::Comment => match policy {
            CommentPolicy::Reflow => trim_indent(content),
            CommentPolicy::Strict => {
                let indent = line.line.indent_level();
                if indent < margin {
                    tracing::debug!(
                        line = line.line.number,
                        indent,
                        margin,
                        "Outdented comment"
                    );
                    return Err(Error::OutdentedComment {
                        line: line.line.number,
                        indent,
                        margin,
                    });
                }
                strip_chars(content, margin)
            }
        },
    };

    tracing::trace!(
        line = line.line.number,
        kind = ?line.kind,
        stripped = content.chars().count() - reflowed.chars().count(),
        "Reflowed line"
    );
    Ok(reflowed)
}
