//! Lookup command - replace known words with their embeddings

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::config::TOKEN_SEPARATOR;
use crate::core::{split_by_single_space, LineReader};
use crate::storage::Dictionary;
use crate::ui;

/// Translate one line of text.
///
/// Every token is lowercased for the lookup. Registered words become their
/// CSV embedding, anything else is echoed back with its original casing.
pub fn process_line(dict: &Dictionary, line: &str) -> String {
	split_by_single_space(line)
		.into_iter()
		.map(|token| match dict.get(&token.to_lowercase()) {
			Some(vector) => vector.as_csv(),
			None => token,
		})
		.collect::<Vec<_>>()
		.join(TOKEN_SEPARATOR)
}

/// Read one input line without its terminator. Malformed UTF-8 becomes
/// U+FFFD. `None` at end of input.
pub fn read_line<R: BufRead>(lines: &mut LineReader<R>) -> Result<Option<String>> {
	lines.next_line_lossy().context("Failed to read input")
}

/// Process `text`, or the first line of `reader` when no text is given
pub fn process_input(
	dict: &Dictionary,
	text: Option<&str>,
	reader: impl BufRead,
	writer: &mut impl Write,
) -> Result<()> {
	let line = match text {
		Some(text) => text.to_string(),
		None => match read_line(&mut LineReader::new(reader))? {
			Some(line) => line,
			None => {
				ui::debug("No input");
				return Ok(());
			}
		},
	};

	writeln!(writer, "{}", process_line(dict, &line))?;
	Ok(())
}

pub fn run(dict: &Dictionary, text: Option<&str>) -> Result<()> {
	let stdin = io::stdin();
	let stdout = io::stdout();
	process_input(dict, text, stdin.lock(), &mut stdout.lock())?;
	Ok(())
}
