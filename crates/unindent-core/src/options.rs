//! Options controlling one unindent run

use serde::{Deserialize, Serialize};

use crate::classify::DEFAULT_COMMENT_MARKER;
use crate::boundary::LineBoundary;
use crate::error::{Error, Result};
use crate::line::is_indent_char;
use crate::reflow::CommentPolicy;

fn default_comment_marker() -> String {
    DEFAULT_COMMENT_MARKER.to_string()
}

/// Options for [`crate::Unindenter`].
///
/// Deserializes from a TOML table such as:
///
/// ```toml
/// reflow_comments = true
/// comment_marker = "//"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnindentOptions {
    /// Left-justify comment lines instead of failing on outdented ones
    #[serde(default)]
    pub reflow_comments: bool,

    /// Prefix that marks a comment line once leading whitespace is removed
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
}

impl Default for UnindentOptions {
    fn default() -> Self {
        Self {
            reflow_comments: false,
            comment_marker: default_comment_marker(),
        }
    }
}

impl UnindentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reflow_comments(mut self, reflow_comments: bool) -> Self {
        self.reflow_comments = reflow_comments;
        self
    }

    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    pub fn policy(&self) -> CommentPolicy {
        CommentPolicy::from(self.reflow_comments)
    }

    /// Check that the options describe a usable configuration.
    ///
    /// The comment marker must be non-empty and must not start with
    /// whitespace or contain a line boundary, otherwise no line could ever be
    /// classified as a comment consistently.
    pub fn validate(&self) -> Result<()> {
        let marker = &self.comment_marker;
        if marker.is_empty() {
            return Err(Error::invalid_options("comment marker must not be empty"));
        }
        if marker.starts_with(is_indent_char) {
            return Err(Error::invalid_options(format!(
                "comment marker {marker:?} must not start with whitespace"
            )));
        }
        if marker.chars().any(LineBoundary::starts_with_char) {
            return Err(Error::invalid_options(format!(
                "comment marker {marker:?} must not contain a line boundary"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict_hash() {
        let options = UnindentOptions::default();
        assert!(!options.reflow_comments);
        assert_eq!(options.comment_marker, "#");
        assert_eq!(options.policy(), CommentPolicy::Strict);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = UnindentOptions::new()
            .with_reflow_comments(true)
            .with_comment_marker("--");
        assert_eq!(options.policy(), CommentPolicy::Reflow);
        assert_eq!(options.comment_marker, "--");
    }

    #[test]
    fn test_validate_rejects_bad_markers() {
        for marker in ["", " #", "#\n", "\t//", "\x1f#"] {
            let options = UnindentOptions::new().with_comment_marker(marker);
            assert!(
                matches!(options.validate(), Err(Error::InvalidOptions { .. })),
                "{marker:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let options: UnindentOptions = toml::from_str("reflow_comments = true").unwrap();
        assert!(options.reflow_comments);
        assert_eq!(options.comment_marker, "#");

        let options: UnindentOptions = toml::from_str("").unwrap();
        assert_eq!(options, UnindentOptions::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: std::result::Result<UnindentOptions, _> = toml::from_str("reflow = true");
        assert!(result.is_err());
    }
}
