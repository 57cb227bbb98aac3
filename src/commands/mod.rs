//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod lookup;
pub mod repl;
pub mod stats;
