//! # User Interface
//!
//! Colored diagnostics on stderr. Stdout is reserved for lookup output.

pub mod log;

pub use log::{debug, error, info, warn, Log};
