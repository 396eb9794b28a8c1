//! Operator-facing status lines.
//!
//! Report tables are written as plain text by the reporter; these helpers
//! only decorate the messages around them. Everything goes to stdout except
//! [`fatal`], which is reserved for errors that end the process.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print a non-fatal error line.
pub fn error(message: &str) {
    println!("  {} {}", "×".red(), message);
}

/// Print a neutral note.
pub fn note(message: &str) {
    println!("  {} {}", "·".dimmed(), message);
}

/// Render a diagnostic that terminates the run.
pub fn fatal(report: &miette::Report) {
    eprintln!("{report:?}");
}
