use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "wordvec",
	author,
	version,
	about = "Look up word embeddings for a line of text",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {echo} | {wordvec}                    {stdin_desc}
  {wordvec} {lookup} {lookup_args}        {lookup_desc}
  {wordvec} {repl}                      {repl_desc}
  {wordvec} {stats} {stats_args}   {stats_desc}",
		title = "Examples:".bright_blue().bold(),
		echo = "echo \"i love you\"",
		wordvec = "wordvec".bright_blue(),
		stdin_desc = "Translate one line from stdin".dimmed(),
		lookup = "lookup".yellow(),
		lookup_args = "\"i love you\"",
		lookup_desc = "Translate a sentence".dimmed(),
		repl = "repl".yellow(),
		repl_desc = "Interactive session".dimmed(),
		stats = "stats".yellow(),
		stats_args = "-d words.txt",
		stats_desc = "Summarize a dictionary".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Dictionary file (default: $WORDVEC_DICTIONARY or ./DICTIONARY.TXT)
	#[arg(short = 'd', long = "dict", global = true, value_name = "PATH")]
	pub dictionary: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Replace known words with their embeddings (reads one stdin line without TEXT)
	Lookup {
		/// Sentence to translate
		#[arg(value_name = "TEXT")]
		text: Option<String>,
	},

	/// Interactive lookup session
	Repl,

	/// Show dictionary size and duplicate words
	Stats {
		/// Print as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
