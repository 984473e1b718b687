//! Interactive glue: question/answer prompts and the repeat-another-file loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::warn;

use crate::document::DocumentProcessor;
use crate::error::SpellError;
use crate::files::correct_file;
use crate::suggest::{Confirmer, Proposal};

const YES_NO: &str = "Type Y or N to respond: ";

/// Line-based prompts over any reader/writer pair (stdin/stdout in the binary).
pub struct Prompter<R, W> {
    input: R,
    output: W,
    // first failure seen while confirming; later proposals are declined silently
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            error: None,
        }
    }

    /// Print `question` and read one trimmed line; `None` on end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print `question`, then ask for Y/N. End of input counts as "no".
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        writeln!(self.output, "{question}")?;
        Ok(self.ask(YES_NO)?.is_some_and(|answer| is_affirmative(&answer)))
    }

    /// Write a line of feedback for the user.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// The I/O error that ended confirmation, if any; clears it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Confirmer for Prompter<R, W> {
    fn confirm(&mut self, proposal: &Proposal<'_>) -> bool {
        if self.error.is_some() {
            return false;
        }
        match self.ask_yes_no(&proposal.to_string()) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("could not read confirmation, declining remaining proposals: {e}");
                self.error = Some(e);
                false
            }
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Correct `first_files`, then keep asking for more files until the user
/// declines or input ends.
///
/// A file that cannot be read or written is reported and the loop goes on;
/// only prompt I/O failures end the session with an error, including one
/// hit while confirming a suggestion.
pub fn run_session<R: BufRead, W: Write>(
    processor: &DocumentProcessor<'_>,
    prompter: &mut Prompter<R, W>,
    first_files: Vec<PathBuf>,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut queued = first_files.into_iter();

    loop {
        let path = match queued.next() {
            Some(path) => path,
            None => match prompter.ask("Please enter a text file: ")? {
                Some(name) if !name.is_empty() => PathBuf::from(name),
                Some(_) => continue,
                None => break,
            },
        };

        let corrected = correct_file(processor, &path, prompter);
        if let Some(e) = prompter.take_error() {
            return Err(e);
        }
        match corrected {
            Ok(output) => {
                prompter.say(&format!(
                    "The file with updated spellings is titled {}",
                    output.display()
                ))?;
                summary.written.push(output);
            }
            Err(SpellError::FileNotFound(missing)) => {
                prompter.say(&format!("Could not find {}", missing.display()))?;
                summary.failed.push(path);
            }
            Err(e) => {
                warn!("failed to correct {}: {e}", path.display());
                prompter.say(&format!("Could not correct {}: {e}", path.display()))?;
                summary.failed.push(path);
            }
        }

        if queued.len() == 0
            && !prompter.ask_yes_no("Would you like to check spelling of a new file?")?
        {
            break;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_confirm_reads_answers() {
        let mut p = prompter("y\n N \nYES\nmaybe\n");
        let proposal = Proposal {
            wrong: "Teh",
            candidate: "The",
        };
        assert!(p.confirm(&proposal));
        assert!(!p.confirm(&proposal));
        assert!(p.confirm(&proposal));
        assert!(!p.confirm(&proposal));
        // end of input
        assert!(!p.confirm(&proposal));

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Instead of: 'Teh', did you mean 'The'?\nType Y or N to respond: "));
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = prompter("  notes.txt \n");
        assert_eq!(p.ask("file? ").unwrap(), Some("notes.txt".to_string()));
        assert_eq!(p.ask("file? ").unwrap(), None);
    }

    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_confirm_stops_after_io_error() {
        let mut p = Prompter::new(Cursor::new(b"y\ny\n".to_vec()), BrokenPipe { attempts: 0 });
        let proposal = Proposal {
            wrong: "Teh",
            candidate: "The",
        };
        assert!(!p.confirm(&proposal));
        assert!(!p.confirm(&proposal));
        assert!(!p.confirm(&proposal));

        let err = p.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(p.take_error().is_none());
        let (_, out) = p.into_inner();
        assert_eq!(out.attempts, 1);
    }

    #[test]
    fn test_affirmative() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
    }
}
