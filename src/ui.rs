//! Diagnostics for the terminal.
//!
//! Standard output is reserved for the computed version, so everything here goes
//! to standard error.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}
