//! Splitting text into lines that remember their terminators

use crate::boundary::LineBoundary;

/// One line of a block, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based position of the line in the block
    pub number: usize,
    /// Text of the line without its terminator
    pub content: &'a str,
    /// The exact terminator that followed the line, or `""` for a final
    /// unterminated line
    pub terminator: &'a str,
}

impl Line<'_> {
    /// The boundary that ended this line, if any.
    pub fn boundary(&self) -> Option<LineBoundary> {
        LineBoundary::from_terminator(self.terminator)
    }

    /// Width of the leading whitespace run, in characters.
    pub fn indent_level(&self) -> usize {
        indent_level(self.content)
    }
}

/// Whether `c` counts as indentation.
///
/// Unicode `White_Space` plus the unit separator `\x1f`, which is the only
/// ASCII information separator that is not a line boundary.
pub fn is_indent_char(c: char) -> bool {
    c.is_whitespace() || c == '\x1f'
}

/// `line` with its leading indentation removed.
pub fn trim_indent(line: &str) -> &str {
    line.trim_start_matches(is_indent_char)
}

/// Width of the leading whitespace run of `line`, in characters.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|&c| is_indent_char(c)).count()
}

/// Iterator over the lines of a text, see [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            number: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;

        for (pos, c) in self.rest.char_indices() {
            if !LineBoundary::starts_with_char(c) {
                continue;
            }
            if let Some(boundary) = LineBoundary::match_prefix(&self.rest[pos..]) {
                let end = pos + boundary.as_str().len();
                let line = Line {
                    number: self.number,
                    content: &self.rest[..pos],
                    terminator: &self.rest[pos..end],
                };
                self.rest = &self.rest[end..];
                return Some(line);
            }
        }

        let line = Line {
            number: self.number,
            content: self.rest,
            terminator: "",
        };
        self.rest = "";
        Some(line)
    }
}

/// Split `text` at every recognized line boundary, keeping terminators.
///
/// A trailing terminator does not produce an extra empty line, and an empty
/// text has no lines. Concatenating `content` and `terminator` of every
/// line gives back `text` unchanged.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    Lines::new(text).collect()
}
