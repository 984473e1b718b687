//! Command line arguments and command dispatch for the `respell` binary.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use crate::dictionary::WordList;
use crate::document::{DocumentProcessor, report_json};
use crate::files::read_lines;
use crate::session::{Prompter, run_session};
use crate::suggest::{CandidateGenerator, ConsonantIndex, LinearScan};

/// Interactive spell checker for text files
#[derive(Parser, Debug, Clone)]
#[command(name = "respell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RespellArgs {
    /// Word list, one word per line
    #[arg(
        short,
        long,
        env = "RESPELL_DICTIONARY",
        default_value = "words.txt",
        global = true
    )]
    pub dictionary: PathBuf,

    /// How candidate corrections are found
    #[arg(long, value_enum, default_value_t = Strategy::Linear, global = true)]
    pub strategy: Strategy,

    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl RespellArgs {
    /// 0 = quiet, 1 = default, 2 = verbose, 3+ = debug
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct files interactively (default)
    Fix(FixArgs),

    /// Report misspellings and candidates as JSON without prompting
    Check(CheckArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct FixArgs {
    /// Files to correct before asking for more
    pub files: Vec<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// File to check
    pub file: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Scan the whole dictionary for every misspelling
    #[default]
    Linear,
    /// Scan only words with the same number of distinct consonants
    Indexed,
}

pub fn execute_command(args: RespellArgs) -> Result<()> {
    let dictionary = WordList::from_word_list_file(&args.dictionary)
        .with_context(|| format!("loading dictionary {}", args.dictionary.display()))?;

    let index;
    let scan;
    let generator: &dyn CandidateGenerator = match args.strategy {
        Strategy::Linear => {
            scan = LinearScan::new(&dictionary);
            &scan
        }
        Strategy::Indexed => {
            index = ConsonantIndex::build(&dictionary);
            &index
        }
    };
    let processor = DocumentProcessor::new(&dictionary, generator);

    match args.command.unwrap_or(Command::Fix(FixArgs::default())) {
        Command::Fix(fix) => fix_files(&processor, fix),
        Command::Check(check) => check_file(&processor, check),
    }
}

fn fix_files(processor: &DocumentProcessor<'_>, args: FixArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    prompter.say("Flags misspelled words and suggests corrections; answer N to see the next one.")?;

    let summary = run_session(processor, &mut prompter, args.files)?;
    info!(
        "session finished: {} written, {} failed",
        summary.written.len(),
        summary.failed.len()
    );
    Ok(())
}

fn check_file(processor: &DocumentProcessor<'_>, args: CheckArgs) -> Result<()> {
    let lines = read_lines(&args.file)?;
    let report = processor.check(&lines);

    let json = report_json(&report, args.pretty)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_fix() {
        let args = RespellArgs::parse_from(["respell"]);
        assert!(args.command.is_none());
        assert_eq!(args.strategy, Strategy::Linear);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_check_with_global_flags() {
        let args = RespellArgs::parse_from([
            "respell",
            "check",
            "notes.txt",
            "--pretty",
            "--strategy",
            "indexed",
            "-d",
            "dict.txt",
            "-vv",
        ]);
        assert_eq!(args.strategy, Strategy::Indexed);
        assert_eq!(args.dictionary, PathBuf::from("dict.txt"));
        assert_eq!(args.verbosity(), 3);
        match args.command {
            Some(Command::Check(check)) => {
                assert_eq!(check.file, PathBuf::from("notes.txt"));
                assert!(check.pretty);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = RespellArgs::parse_from(["respell", "-q", "-v", "fix", "a.txt", "b.txt"]);
        assert_eq!(args.verbosity(), 0);
        match args.command {
            Some(Command::Fix(fix)) => assert_eq!(fix.files.len(), 2),
            other => panic!("expected fix, got {:?}", other),
        }
    }
}
