//! Margin calculation

use crate::classify::{ClassifiedLine, LineKind};

/// Minimum indentation among code lines.
///
/// Blank and comment lines do not take part. Returns `None` when the block
/// has no code line at all.
pub fn compute_margin(lines: &[ClassifiedLine<'_>]) -> Option<usize> {
    lines
        .iter()
        .filter(|l| l.kind == LineKind::Code)
        .map(|l| l.line.indent_level())
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_lines;

    fn margin_of(text: &str) -> Option<usize> {
        compute_margin(&classify_lines(text, "#"))
    }

    #[test]
    fn test_margin_ignores_blank_and_comment_lines() {
        assert_eq!(margin_of("    a\n\n# c\n  \n      b\n"), Some(4));
    }

    #[test]
    fn test_margin_of_unindented_block_is_zero() {
        assert_eq!(margin_of("a\n    b\n"), Some(0));
    }

    #[test]
    fn test_margin_without_code_is_none() {
        assert_eq!(margin_of(""), None);
        assert_eq!(margin_of("   \n\n"), None);
        assert_eq!(margin_of("    # only\n  # comments\n"), None);
    }

    #[test]
    fn test_margin_counts_tabs_as_one() {
        assert_eq!(margin_of("\t\ta\n\t\t\tb\n"), Some(2));
    }
}
