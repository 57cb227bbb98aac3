//! REPL mode - interactive lookup session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::commands::lookup::{process_line, read_line};
use crate::core::LineReader;
use crate::storage::Dictionary;
use crate::ui;

pub fn run(dict: &Dictionary) -> Result<()> {
	ui::info("Starting interactive lookup mode");
	ui::info("Type a sentence, or 'exit' to quit");
	if dict.is_empty() {
		ui::warn("Dictionary is empty, every word will be echoed back");
	}

	let stdin = io::stdin();
	let stdout = io::stdout();
	session(dict, stdin.lock(), &mut stdout.lock())?;

	ui::info("Goodbye!");
	Ok(())
}

/// Prompt-and-translate loop until `exit` or end of input
pub fn session(dict: &Dictionary, reader: impl BufRead, writer: &mut impl Write) -> Result<()> {
	let mut lines = LineReader::new(reader);
	loop {
		write!(writer, "{} ", "wordvec>".bright_blue().bold())?;
		writer.flush()?;

		let Some(line) = read_line(&mut lines)? else {
			writeln!(writer)?;
			break;
		};

		match line.trim() {
			"" => continue,
			"exit" | "quit" | "q" => break,
			"help" => {
				show_help(writer)?;
				continue;
			}
			_ => {}
		}

		writeln!(writer, "{}", process_line(dict, &line))?;
	}

	Ok(())
}

fn show_help(writer: &mut impl Write) -> Result<()> {
	writeln!(writer, "{}", "REPL Commands:".bright_blue().bold())?;
	writeln!(writer, "  {}  Look up every word in a sentence", "<text>".dimmed())?;
	writeln!(writer, "  {}    Show this help message", "help".dimmed())?;
	writeln!(writer, "  {}    Exit REPL mode", "exit".dimmed())?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::loader;
	use std::io::Cursor;

	fn transcript(input: &str) -> String {
		colored::control::set_override(false);
		let dict = loader::read(Cursor::new("love#0,23,0\n")).unwrap();
		let mut out = Vec::new();
		session(&dict, Cursor::new(input), &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn translates_each_line_until_exit() {
		let out = transcript("love\n\nI Love it\nexit\nlove\n");
		assert_eq!(out, "wordvec> 0,23,0\nwordvec> wordvec> I 0,23,0 it\nwordvec> ");
	}

	#[test]
	fn stops_at_end_of_input() {
		assert_eq!(transcript("love"), "wordvec> 0,23,0\nwordvec> \n");
	}

	#[test]
	fn help_lists_commands() {
		let out = transcript("help\nq\n");
		assert!(out.contains("REPL Commands:"));
		assert!(out.contains("exit"));
	}
}
