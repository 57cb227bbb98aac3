//! Core domain types

pub mod embedding;
pub mod lines;
pub mod tokenizer;

pub use embedding::EmbeddingVector;
pub use lines::LineReader;
pub use tokenizer::split_by_single_space;
