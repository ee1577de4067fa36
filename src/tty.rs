//! Terminal detection utilities for CLI.

use std::io::{self, IsTerminal};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stderr_tty() -> bool {
    io::stderr().is_terminal()
}

/// Prompts are read from stdin and written to stderr; stdout carries the JSON result.
pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && is_stderr_tty()
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if is_stderr_tty() {
        eprintln!("{}", message);
    }
}
