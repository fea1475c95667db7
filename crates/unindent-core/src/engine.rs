//! The unindent engine
//!
//! Runs the pipeline classify -> margin -> reflow -> reassemble over one
//! block of text. Classification and the policy check cover the whole block
//! before any output is built, so a failing block never yields partial
//! output.

use serde::Serialize;

use crate::assemble::reassemble;
use crate::classify::{ClassifiedLine, LineKind, classify_lines};
use crate::error::Result;
use crate::margin::compute_margin;
use crate::options::UnindentOptions;
use crate::reflow::{CommentPolicy, reflow_line};

/// A comment line indented less than the block's margin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutdentedComment {
    /// 1-based line number within the block
    pub line: usize,
    /// Indentation of the comment, in characters
    pub indent: usize,
    /// Margin of the block
    pub margin: usize,
    /// The comment line without its terminator
    pub text: String,
}

/// Result of inspecting a block without transforming it
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub lines: Vec<ClassifiedLine<'a>>,
    /// `None` when the block has no code lines
    pub margin: Option<usize>,
    pub outdented_comments: Vec<OutdentedComment>,
}

impl Analysis<'_> {
    /// True when a strict unindent would succeed.
    pub fn is_clean(&self) -> bool {
        self.outdented_comments.is_empty()
    }

    /// True when unindenting would return the text unchanged.
    pub fn is_noop(&self) -> bool {
        matches!(self.margin, None | Some(0))
    }

    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

/// Reusable unindenter with fixed, validated options.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Unindenter {
    options: UnindentOptions,
}

impl Unindenter {
    /// Create an unindenter, validating `options`.
    pub fn new(options: UnindentOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create an unindenter using the default comment marker.
    pub fn with_policy(policy: CommentPolicy) -> Self {
        Self {
            options: UnindentOptions::default().with_reflow_comments(policy.reflows()),
        }
    }

    pub fn policy(&self) -> CommentPolicy {
        self.options.policy()
    }

    /// Remove the common code margin from `text`.
    ///
    /// Returns `text` unchanged when it has no lines, no code lines, or a
    /// zero margin.
    pub fn unindent(&self, text: &str) -> Result<String> {
        let lines = classify_lines(text, &self.options.comment_marker);

        let margin = match compute_margin(&lines) {
            Some(0) | None => {
                tracing::debug!(lines = lines.len(), "Nothing to unindent");
                return Ok(text.to_string());
            }
            Some(margin) => margin,
        };

        let policy = self.policy();
        tracing::debug!(lines = lines.len(), margin, ?policy, "Unindenting block");

        let reflowed = lines
            .iter()
            .map(|l| reflow_line(l, margin, policy).map(|content| (content, l.line.terminator)))
            .collect::<Result<Vec<_>>>()?;

        Ok(reassemble(reflowed.iter().copied()))
    }

    /// Classify `text` and list every outdented comment, without changing it.
    pub fn analyze<'a>(&self, text: &'a str) -> Analysis<'a> {
        let lines = classify_lines(text, &self.options.comment_marker);
        let margin = compute_margin(&lines);

        let outdented_comments = match margin {
            Some(margin) if margin > 0 => lines
                .iter()
                .filter(|l| l.kind == LineKind::Comment)
                .filter_map(|l| {
                    let indent = l.line.indent_level();
                    (indent < margin).then(|| OutdentedComment {
                        line: l.line.number,
                        indent,
                        margin,
                        text: l.line.content.to_string(),
                    })
                })
                .collect(),
            _ => Vec::new(),
        };

        Analysis {
            lines,
            margin,
            outdented_comments,
        }
    }
}
