//! Stats command - summarize the loaded dictionary

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::storage::Dictionary;

#[derive(Debug, Serialize)]
pub struct StatsResult {
	pub path: String,
	pub entries: usize,
	/// Sorted for stable output
	pub duplicates: Vec<String>,
}

pub fn calculate(dict: &Dictionary, path: &Path) -> StatsResult {
	let mut duplicates: Vec<String> = dict.duplicate_words().iter().cloned().collect();
	duplicates.sort();

	StatsResult {
		path: path.display().to_string(),
		entries: dict.len(),
		duplicates,
	}
}

pub fn run(dict: &Dictionary, path: &Path, json: bool) -> Result<()> {
	let stats = calculate(dict, path);

	if json {
		println!("{}", serde_json::to_string_pretty(&stats)?);
		return Ok(());
	}

	println!("{}", "─── Dictionary ───".bright_blue().bold());
	println!("  {} {}", "File:".bright_blue(), stats.path);
	println!("  {} {}", "Entries:".bright_blue(), stats.entries);

	if stats.duplicates.is_empty() {
		println!("  {} none", "Duplicates:".bright_blue());
	} else {
		println!("  {} {}", "Duplicates:".yellow(), stats.duplicates.len());
		for word in &stats.duplicates {
			println!("    {}", word.dimmed());
		}
	}

	Ok(())
}
