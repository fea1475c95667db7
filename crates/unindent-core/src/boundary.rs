//! Line-boundary sequences recognized by the line splitter.

use std::fmt;

/// A sequence that terminates a line.
///
/// Covers the ASCII and Unicode separators that ordinary source text can
/// contain, not just `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineBoundary {
    /// Carriage return + line feed: `\r\n`
    CrLf,
    /// Line feed: `\n`
    Lf,
    /// Carriage return: `\r`
    Cr,
    /// Line tabulation: `\x0b`
    VerticalTab,
    /// Form feed: `\x0c`
    FormFeed,
    /// File separator: `\x1c`
    FileSeparator,
    /// Group separator: `\x1d`
    GroupSeparator,
    /// Record separator: `\x1e`
    RecordSeparator,
    /// Next line: `\u{85}`
    NextLine,
    /// Line separator: `\u{2028}`
    LineSeparator,
    /// Paragraph separator: `\u{2029}`
    ParagraphSeparator,
}

impl LineBoundary {
    /// Every boundary, in match order.
    ///
    /// `CrLf` comes before `Cr` so that `\r\n` is never split in two.
    pub const ALL: [LineBoundary; 11] = [
        Self::CrLf,
        Self::Lf,
        Self::Cr,
        Self::VerticalTab,
        Self::FormFeed,
        Self::FileSeparator,
        Self::GroupSeparator,
        Self::RecordSeparator,
        Self::NextLine,
        Self::LineSeparator,
        Self::ParagraphSeparator,
    ];

    /// The exact text of this boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
            Self::Cr => "\r",
            Self::VerticalTab => "\x0b",
            Self::FormFeed => "\x0c",
            Self::FileSeparator => "\x1c",
            Self::GroupSeparator => "\x1d",
            Self::RecordSeparator => "\x1e",
            Self::NextLine => "\u{85}",
            Self::LineSeparator => "\u{2028}",
            Self::ParagraphSeparator => "\u{2029}",
        }
    }

    /// Returns true if `c` starts some boundary.
    pub fn starts_with_char(c: char) -> bool {
        matches!(
            c,
            '\n' | '\r'
                | '\x0b'
                | '\x0c'
                | '\x1c'
                | '\x1d'
                | '\x1e'
                | '\u{85}'
                | '\u{2028}'
                | '\u{2029}'
        )
    }

    /// Match the longest boundary at the start of `s`.
    pub fn match_prefix(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|boundary| s.starts_with(boundary.as_str()))
    }

    /// Identify a terminator string previously produced by the splitter.
    pub fn from_terminator(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|boundary| boundary.as_str() == s)
    }

    /// Short human-readable name, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CrLf => "CRLF",
            Self::Lf => "LF",
            Self::Cr => "CR",
            Self::VerticalTab => "VT",
            Self::FormFeed => "FF",
            Self::FileSeparator => "FS",
            Self::GroupSeparator => "GS",
            Self::RecordSeparator => "RS",
            Self::NextLine => "NEL",
            Self::LineSeparator => "LS",
            Self::ParagraphSeparator => "PS",
        }
    }
}

impl fmt::Display for LineBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
