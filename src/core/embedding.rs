//! Embedding values kept as opaque CSV text

use std::fmt;

/// One embedding, stored exactly as it appeared in the dictionary (e.g. `"0,23,0"`).
///
/// Values are never parsed as numbers, so the output reproduces the input
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingVector(String);

impl EmbeddingVector {
	pub fn new(csv: impl Into<String>) -> Self {
		Self(csv.into())
	}

	/// CSV representation, unchanged from load
	pub fn as_csv(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EmbeddingVector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
