//! wordvec - word embedding lookup
//!
//! Loads DICTIONARY.TXT and prints the embedding of every registered word
//! in a line of text, echoing unknown words unchanged.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::Path;

use wordvec::cli::{Cli, Command};
use wordvec::commands::{lookup, repl, stats};
use wordvec::config;
use wordvec::storage::{self, Dictionary};
use wordvec::ui::{self, Log};

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	if let Some(path) = cli.dictionary {
		config::set_dictionary_path(path);
	}

	match cli.command {
		None => lookup::run(&load_dictionary(&config::dictionary_path())?, None),
		Some(Command::Lookup { text }) => {
			lookup::run(&load_dictionary(&config::dictionary_path())?, text.as_deref())
		}
		Some(Command::Repl) => repl::run(&load_dictionary(&config::dictionary_path())?),
		Some(Command::Stats { json }) => {
			let path = config::dictionary_path();
			stats::run(&load_dictionary(&path)?, &path, json)
		}
		Some(Command::Help { subcommand }) => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
	let dict = storage::load(path)?;

	ui::debug(&format!("Loaded {} words from {}", dict.len(), path.display()));
	if !dict.duplicate_words().is_empty() {
		ui::debug(&format!("{} duplicate words ignored", dict.duplicate_words().len()));
	}

	Ok(dict)
}
