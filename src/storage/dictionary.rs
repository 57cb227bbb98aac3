//! Read-only word → embedding container

use std::collections::{HashMap, HashSet};

use crate::core::EmbeddingVector;

/// Dictionary loaded from disk. Never mutated after construction.
#[derive(Debug, Default)]
pub struct Dictionary {
	words: HashMap<String, EmbeddingVector>,
	duplicates: HashSet<String>,
}

impl Dictionary {
	pub fn new(words: HashMap<String, EmbeddingVector>, duplicates: HashSet<String>) -> Self {
		Self { words, duplicates }
	}

	/// Exact-match lookup. Keys are stored as written, so callers pass the
	/// lowercased word.
	pub fn get(&self, word: &str) -> Option<&EmbeddingVector> {
		self.words.get(word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Words that appeared more than once in the file (first value kept)
	pub fn duplicate_words(&self) -> &HashSet<String> {
		&self.duplicates
	}
}
