//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Remove the common indentation from blocks of source code
///
/// Reads each FILE (or stdin when none is given, or for "-") and prints it
/// with the margin of its code lines removed. Line terminators are kept
/// exactly as they were.
///
/// Examples:
///   unindent snippet.py                 # Print the unindented file
///   pbpaste | unindent -r               # Reflow outdented comments
///   unindent --check src/*.py           # Report outdented comments
///   unindent --write block.txt          # Rewrite the file in place
#[derive(Parser, Debug)]
#[command(name = "unindent")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Files to process ("-" reads stdin)
    pub files: Vec<PathBuf>,

    /// Left-justify comment lines instead of failing on outdented comments
    #[arg(short, long)]
    pub reflow_comments: bool,

    /// Prefix that marks a comment line
    #[arg(long, value_name = "MARKER")]
    pub comment_marker: Option<String>,

    /// Read options from this config file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report outdented comments and exit non-zero if any are found
    #[arg(long, conflicts_with_all = ["diff", "write"])]
    pub check: bool,

    /// Print a unified diff instead of the unindented text
    #[arg(long, conflicts_with = "write")]
    pub diff: bool,

    /// Rewrite files in place
    #[arg(short, long)]
    pub write: bool,

    /// Output the --check report as JSON
    #[arg(long, requires = "check")]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["unindent"]).unwrap();
        assert!(cli.files.is_empty());
        assert!(!cli.reflow_comments);
        assert!(!cli.check);
        assert_eq!(cli.comment_marker, None);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "unindent",
            "-r",
            "--comment-marker",
            "//",
            "--check",
            "--json",
            "a.py",
            "-",
        ])
        .unwrap();
        assert!(cli.reflow_comments);
        assert_eq!(cli.comment_marker.as_deref(), Some("//"));
        assert!(cli.check && cli.json);
        assert_eq!(cli.files, vec![PathBuf::from("a.py"), PathBuf::from("-")]);
    }

    #[test]
    fn test_check_conflicts_with_write() {
        assert!(Cli::try_parse_from(["unindent", "--check", "--write", "a.py"]).is_err());
        assert!(Cli::try_parse_from(["unindent", "--diff", "--write", "a.py"]).is_err());
    }

    #[test]
    fn test_json_requires_check() {
        assert!(Cli::try_parse_from(["unindent", "--json"]).is_err());
    }
}
