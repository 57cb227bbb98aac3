//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DICTIONARY: OnceLock<PathBuf> = OnceLock::new();

// === Dictionary File ===
pub const DICTIONARY_FILE: &str = "DICTIONARY.TXT";
pub const DICTIONARY_ENV: &str = "WORDVEC_DICTIONARY";

// === Line Format ===
pub const COMMENT_PREFIX: char = '#';
pub const KEY_SEPARATOR: char = '#';
pub const VALUE_SEPARATOR: char = ',';

// === Output ===
pub const TOKEN_SEPARATOR: &str = " ";

pub fn set_dictionary_path(path: PathBuf) {
	let _ = CUSTOM_DICTIONARY.set(path);
}

/// Dictionary location: `--dict` flag, then WORDVEC_DICTIONARY, then
/// DICTIONARY.TXT in the working directory
pub fn dictionary_path() -> PathBuf {
	if let Some(custom) = CUSTOM_DICTIONARY.get() {
		crate::ui::debug(&format!("Using custom dictionary: {}", custom.display()));
		return custom.clone();
	}

	if let Some(env_path) = std::env::var_os(DICTIONARY_ENV) {
		if !env_path.is_empty() {
			let path = PathBuf::from(env_path);
			crate::ui::debug(&format!("Using {}: {}", DICTIONARY_ENV, path.display()));
			return path;
		}
	}

	PathBuf::from(DICTIONARY_FILE)
}
