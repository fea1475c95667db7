//! Check command implementation
//!
//! Reports outdented comments without changing anything.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use unindent_core::{ClassifiedLine, OutdentedComment, Unindenter};

use crate::error::{CliError, Result};
use crate::source::Source;

/// Findings for one source
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub margin: Option<usize>,
    /// Number of lines ended by each terminator, keyed by its short name
    pub line_endings: BTreeMap<&'static str, usize>,
    pub outdented_comments: Vec<OutdentedComment>,
}

fn count_line_endings(lines: &[ClassifiedLine<'_>]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for boundary in lines.iter().filter_map(|l| l.line.boundary()) {
        *counts.entry(boundary.name()).or_insert(0) += 1;
    }
    counts
}

/// Analyze every source and collect the findings.
pub fn collect_reports(unindenter: &Unindenter, sources: &[Source]) -> Result<Vec<SourceReport>> {
    sources
        .iter()
        .map(|source| {
            let text = source.read()?;
            let analysis = unindenter.analyze(&text);
            let line_endings = count_line_endings(&analysis.lines);
            if line_endings.len() > 1 {
                tracing::debug!(source = %source.name(), ?line_endings, "Mixed line endings");
            }
            for comment in &analysis.outdented_comments {
                tracing::warn!(
                    source = %source.name(),
                    line = comment.line,
                    indent = comment.indent,
                    margin = comment.margin,
                    "Outdented comment"
                );
            }
            Ok(SourceReport {
                source: source.name(),
                margin: analysis.margin,
                line_endings,
                outdented_comments: analysis.outdented_comments,
            })
        })
        .collect()
}

/// Run the check command
///
/// Fails with a user error when any source has outdented comments, so the
/// process exits non-zero.
pub fn run_check(unindenter: &Unindenter, sources: &[Source], json: bool) -> Result<()> {
    let reports = collect_reports(unindenter, sources)?;
    let total: usize = reports.iter().map(|r| r.outdented_comments.len()).sum();

    if json {
        let output = json!({
            "clean": total == 0,
            "outdented_comments": total,
            "sources": reports,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&reports);
    }

    if total > 0 {
        return Err(CliError::user(format!(
            "{total} outdented comment(s) found; use --reflow-comments to left-justify them"
        )));
    }
    Ok(())
}

fn print_report(reports: &[SourceReport]) {
    for report in reports {
        if report.outdented_comments.is_empty() {
            println!("{} {}", "OK".green().bold(), report.source);
            continue;
        }
        for comment in &report.outdented_comments {
            println!(
                "{}:{}: {} (indent {}, margin {})",
                report.source.yellow(),
                comment.line,
                "outdented comment".red(),
                comment.indent,
                comment.margin
            );
            println!("    {}", comment.text.trim_end());
        }
    }
}
