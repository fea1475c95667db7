//! Command implementations for unindent-cli

pub mod check;
pub mod unindent;

pub use check::run_check;
pub use unindent::{OutputMode, run_unindent};
