//! Margin-preserving unindentation of extracted source blocks
//!
//! Removes the common indentation of the code lines in a block of text while
//! keeping every original line terminator. Comment lines that sit left of the
//! code margin are either rejected or left-justified, depending on the
//! [`CommentPolicy`].
//!
//! ```
//! let text = "    a = 1\r\n        b = 2\n";
//! assert_eq!(unindent_core::unindent(text, false).unwrap(), "a = 1\r\n    b = 2\n");
//! ```

pub mod assemble;
pub mod boundary;
pub mod classify;
pub mod engine;
pub mod error;
pub mod line;
pub mod margin;
pub mod options;
pub mod reflow;

pub use boundary::LineBoundary;
pub use classify::{ClassifiedLine, DEFAULT_COMMENT_MARKER, LineKind, classify_lines};
pub use engine::{Analysis, OutdentedComment, Unindenter};
pub use error::{Error, Result};
pub use line::{Line, Lines, indent_level, is_indent_char, split_lines, trim_indent};
pub use margin::compute_margin;
pub use options::UnindentOptions;
pub use reflow::CommentPolicy;

/// Unindent `text` with the default `#` comment marker.
///
/// With `reflow_comments` false, a comment indented less than the code margin
/// fails with [`Error::OutdentedComment`]. With it true, every comment line is
/// left-justified instead.
pub fn unindent(text: &str, reflow_comments: bool) -> Result<String> {
    Unindenter::with_policy(CommentPolicy::from(reflow_comments)).unindent(text)
}

/// Unindent `text` with explicit options.
pub fn unindent_with(text: &str, options: &UnindentOptions) -> Result<String> {
    Unindenter::new(options.clone())?.unindent(text)
}

/// Inspect `text` with the default comment marker.
pub fn analyze(text: &str) -> Analysis<'_> {
    Unindenter::default().analyze(text)
}

/// Every comment line in `text` indented less than the code margin.
pub fn find_outdented_comments(text: &str) -> Vec<OutdentedComment> {
    analyze(text).outdented_comments
}

/// Whether a strict unindent of `text` would fail.
pub fn contains_outdented_comment(text: &str) -> bool {
    !analyze(text).is_clean()
}
