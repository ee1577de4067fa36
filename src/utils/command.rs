//! Command execution primitives.

use std::process::Command;

/// Run a command, returning None on failure or empty output instead of an error.
///
/// Useful when command failure is expected/acceptable (e.g., unset git config keys).
pub fn run_optional(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_optional_returns_none_on_failure() {
        assert!(run_optional("false", &[]).is_none());
    }

    #[test]
    fn run_optional_returns_none_for_missing_program() {
        assert!(run_optional("nonexistent_command_xyz", &[]).is_none());
    }

    #[test]
    fn run_optional_returns_trimmed_stdout() {
        assert_eq!(run_optional("echo", &["  jane  "]).as_deref(), Some("jane"));
    }
}
