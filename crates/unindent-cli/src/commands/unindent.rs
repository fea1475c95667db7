//! Unindent command implementation
//!
//! Unindents each source and prints, diffs, or writes back the result.

use std::io::{self, Write};

use colored::Colorize;
use similar::TextDiff;
use unindent_core::{Error as UnindentError, Unindenter};

use crate::error::{CliError, Result};
use crate::source::{Source, write_atomic};

/// What to do with an unindented block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the result to stdout
    Print,
    /// Print a unified diff between input and result
    Diff,
    /// Rewrite the file in place
    Write,
}

/// Unindent one block of text, attaching the source name to errors.
pub fn unindent_source(unindenter: &Unindenter, source: &Source, text: &str) -> Result<String> {
    unindenter.unindent(text).map_err(|e| {
        let location = match &e {
            UnindentError::OutdentedComment { line, .. } => format!("{}:{line}", source.name()),
            UnindentError::InvalidOptions { .. } => source.name(),
        };
        CliError::unindent(location, e)
    })
}

/// Render a unified diff of `old` against `new`, or `None` if they match.
pub fn render_diff(name: &str, old: &str, new: &str) -> Option<String> {
    if old == new {
        return None;
    }
    let diff = TextDiff::from_lines(old, new);
    Some(
        diff.unified_diff()
            .context_radius(3)
            .header(&format!("a/{name}"), &format!("b/{name}"))
            .to_string(),
    )
}

/// Run the unindent command over every source.
pub fn run_unindent(unindenter: &Unindenter, sources: &[Source], mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Write && sources.contains(&Source::Stdin) {
        return Err(CliError::user("--write cannot be used with stdin"));
    }

    let mut stdout = io::stdout().lock();

    for source in sources {
        let text = source.read()?;
        let result = unindent_source(unindenter, source, &text)?;
        tracing::debug!(source = %source.name(), changed = result != text, "Unindented");

        match mode {
            OutputMode::Print => stdout.write_all(result.as_bytes())?,
            OutputMode::Diff => {
                if let Some(diff) = render_diff(&source.name(), &text, &result) {
                    stdout.write_all(diff.as_bytes())?;
                }
            }
            OutputMode::Write => {
                let Source::File(ref path) = *source else {
                    continue;
                };
                if result == text {
                    tracing::debug!(?path, "Already unindented, not rewriting");
                    continue;
                }
                write_atomic(path, result.as_bytes())?;
                eprintln!("{} {}", "Unindented".green().bold(), path.display());
            }
        }
    }

    stdout.flush()?;
    Ok(())
}
