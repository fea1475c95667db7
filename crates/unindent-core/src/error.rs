//! Error types for unindent-core

/// Result type for unindent-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while unindenting a block
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A comment line sits left of the code margin and the policy is strict.
    ///
    /// The message is fixed; `line` is the 1-based number of the first
    /// offending line in the block.
    #[error("can't unindent source code with outdented comments")]
    OutdentedComment {
        line: usize,
        indent: usize,
        margin: usize,
    },

    #[error("Invalid unindent options: {reason}")]
    InvalidOptions { reason: String },
}

impl Error {
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outdented_comment_message_is_fixed() {
        let err = Error::OutdentedComment {
            line: 2,
            indent: 0,
            margin: 4,
        };
        assert_eq!(
            err.to_string(),
            "can't unindent source code with outdented comments"
        );
    }

    #[test]
    fn test_invalid_options_message() {
        let err = Error::invalid_options("comment marker must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid unindent options: comment marker must not be empty"
        );
    }
}
