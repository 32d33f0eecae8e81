//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Value parsing
//! - Command execution

pub mod args;
pub mod router;
pub mod values;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, MonoidKind, Step};
pub use router::execute_command;
