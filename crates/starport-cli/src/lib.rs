//! Starport CLI library.
//!
//! Subcommand handlers, the interactive session loop and terminal styling for
//! the `starport-cli` binary.

pub mod commands;
pub mod session;
pub mod terminal;
