//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Optional command execution
//! - `io` - File and stdin input with consistent error handling

pub mod command;
pub mod io;
