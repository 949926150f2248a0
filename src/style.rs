// src/style.rs

//! Terminal text styling for reports.
//!
//! Pure string → string transforms with no engine-visible side effects;
//! `colored` handles terminal detection, so output stays plain when not
//! attached to a tty.

use colored::Colorize;

/// Green, for succeeded tasks.
pub fn ok(s: &str) -> String {
    s.green().to_string()
}

/// Red, for failed and errored tasks.
pub fn fail(s: &str) -> String {
    s.red().to_string()
}

/// Bold.
pub fn bold(s: &str) -> String {
    s.bold().to_string()
}
