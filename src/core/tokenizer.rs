//! Single-space tokenizer

/// Splits `line` on every U+0020 space.
///
/// Runs of spaces produce empty tokens between them and a leading space
/// produces a leading empty token. Trailing empty tokens are dropped, so a
/// line made only of spaces yields nothing. Tabs and other whitespace are
/// part of the token.
pub fn split_by_single_space(line: &str) -> Vec<&str> {
	let mut tokens: Vec<&str> = line.split(' ').collect();
	while tokens.last().is_some_and(|t| t.is_empty()) {
		tokens.pop();
	}
	tokens
}
