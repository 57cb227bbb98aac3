//! Dictionary storage

pub mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
pub use loader::{load, parse_line};
