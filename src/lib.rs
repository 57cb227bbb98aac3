//! # wordvec Library
//!
//! Loads a word-embedding dictionary and replaces the words of a sentence
//! with their embeddings.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod ui;
