//! Dictionary file parsing
//!
//! Each line is `<word>#<csv>`. Blank lines and lines starting with `#` are
//! comments. Malformed lines are skipped without a diagnostic.

use anyhow::{bail, Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{COMMENT_PREFIX, KEY_SEPARATOR, VALUE_SEPARATOR};
use crate::core::{EmbeddingVector, LineReader};
use crate::storage::Dictionary;

/// Load a dictionary file
pub fn load(path: &Path) -> Result<Dictionary> {
	if !path.exists() {
		let name = path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_else(|| path.display().to_string());
		let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
		bail!("{} not found at {}", name, absolute.display());
	}

	let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
	read(BufReader::new(file)).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse dictionary lines from any buffered reader
pub fn read(reader: impl BufRead) -> Result<Dictionary> {
	let mut words: HashMap<String, EmbeddingVector> = HashMap::new();
	let mut duplicates = HashSet::new();

	let mut lines = LineReader::new(reader);
	while let Some(line) = lines.next_line()? {
		let Some((word, csv)) = parse_line(&line) else {
			continue;
		};

		if words.contains_key(word) {
			duplicates.insert(word.to_string());
		} else {
			words.insert(word.to_string(), EmbeddingVector::new(csv));
		}
	}

	Ok(Dictionary::new(words, duplicates))
}

/// Split one raw line into `(word, csv)`, or `None` for comments and malformed lines
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
	// spaces and control characters only, Unicode whitespace such as NBSP stays
	let line = line.trim_matches(|c: char| c <= ' ');
	if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
		return None;
	}

	// csv may itself contain the separator; only the first one splits
	let (word, csv) = line.split_once(KEY_SEPARATOR)?;
	if !csv.contains(VALUE_SEPARATOR) {
		return None;
	}

	Some((word, csv))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn parses_word_and_csv() {
		assert_eq!(parse_line("love#0,23,0"), Some(("love", "0,23,0")));
		assert_eq!(parse_line("  you#1,2,3\t"), Some(("you", "1,2,3")));
	}

	#[test]
	fn skips_comments_and_blanks() {
		assert_eq!(parse_line(""), None);
		assert_eq!(parse_line("   "), None);
		assert_eq!(parse_line("# love#0,23,0"), None);
		assert_eq!(parse_line("   #indented comment"), None);
	}

	#[test]
	fn skips_malformed_lines() {
		assert_eq!(parse_line("love"), None);
		assert_eq!(parse_line("love#"), None);
		assert_eq!(parse_line("love#23"), None);
	}

	#[test]
	fn splits_at_first_separator_only() {
		assert_eq!(parse_line("a#1,2#3"), Some(("a", "1,2#3")));
	}

	#[test]
	fn first_occurrence_wins() {
		let input = "i#1,1,1\nlove#0,23,0\nlove#9,9,9\n\n# comment\nbroken\n";
		let dict = read(Cursor::new(input)).unwrap();

		assert_eq!(dict.len(), 2);
		assert_eq!(dict.get("love").unwrap().as_csv(), "0,23,0");
		assert!(dict.duplicate_words().contains("love"));
		assert_eq!(dict.duplicate_words().len(), 1);
	}

	#[test]
	fn trims_control_characters_but_not_nbsp() {
		assert_eq!(parse_line("\u{1}love#0,23,0\u{7}"), Some(("love", "0,23,0")));
		assert_eq!(parse_line("love#0,23,0\u{A0}"), Some(("love", "0,23,0\u{A0}")));
	}

	#[test]
	fn carriage_return_only_line_endings() {
		let dict = read(Cursor::new("i#1,0,0\rlove#0,23,0\r")).unwrap();
		assert_eq!(dict.len(), 2);
		assert_eq!(dict.get("i").unwrap().as_csv(), "1,0,0");
		assert_eq!(dict.get("love").unwrap().as_csv(), "0,23,0");
	}

	#[test]
	fn invalid_utf8_is_an_error() {
		assert!(read(Cursor::new(b"i#1,0,0\n\xff#2,2,2\n".to_vec())).is_err());
	}

	#[test]
	fn keeps_key_casing() {
		let dict = read(Cursor::new("Love#0,23,0\r\n")).unwrap();
		assert!(dict.get("love").is_none());
		assert_eq!(dict.get("Love").unwrap().as_csv(), "0,23,0");
	}

	#[test]
	fn missing_file_names_absolute_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("DICTIONARY.TXT");

		let err = load(&path).unwrap_err().to_string();
		assert!(err.starts_with("DICTIONARY.TXT not found at "), "{}", err);
		assert!(err.contains(&dir.path().display().to_string()), "{}", err);
	}

	#[test]
	fn loads_from_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("DICTIONARY.TXT");
		std::fs::write(&path, "i#1,0,0\nyou#0,0,1\n").unwrap();

		let dict = load(&path).unwrap();
		assert_eq!(dict.len(), 2);
		assert_eq!(dict.get("you").unwrap().as_csv(), "0,0,1");
	}
}
