//! Unindent CLI
//!
//! Removes the common margin from blocks of source code read from files or
//! stdin.

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod source;

use clap::Parser;
use colored::Colorize;
use unindent_core::Unindenter;

use cli::Cli;
use commands::OutputMode;
use config::{ConfigResolver, FlagOverrides};
use error::Result;
use source::Source;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }

    let cwd = std::env::current_dir()?;
    let flags = FlagOverrides {
        reflow_comments: cli.reflow_comments,
        comment_marker: cli.comment_marker.clone(),
    };
    let options = ConfigResolver::new(cwd)
        .with_explicit(cli.config.clone())
        .resolve(&flags)?;
    let unindenter = Unindenter::new(options)?;

    let sources = Source::from_args(&cli.files);

    if cli.check {
        return commands::run_check(&unindenter, &sources, cli.json);
    }

    let mode = if cli.diff {
        OutputMode::Diff
    } else if cli.write {
        OutputMode::Write
    } else {
        OutputMode::Print
    };
    commands::run_unindent(&unindenter, &sources, mode)
}
