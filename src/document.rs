use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::suffix::SuffixClassifier;
use crate::suggest::{CandidateGenerator, Confirmer, SuggestionEngine, SuggestionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    LineBreak,
}

/// Split each line on whitespace and close it with a [`Token::LineBreak`].
pub fn tokenize<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        tokens.extend(
            line.as_ref()
                .split_whitespace()
                .map(|word| Token::Word(word.to_string())),
        );
        tokens.push(Token::LineBreak);
    }
    tokens
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The token is a dictionary word.
    Correct { word: String },
    /// A dictionary word plus a known ending; kept as written.
    SuffixCorrected { word: String },
    /// The user accepted a suggested replacement.
    Replaced { original: String, replacement: String },
    /// Misspelled, but no suggestion was accepted.
    Unchanged { word: String },
}

impl Classification {
    /// The text written to the corrected document.
    pub fn output(&self) -> &str {
        match self {
            Classification::Correct { word }
            | Classification::SuffixCorrected { word }
            | Classification::Unchanged { word } => word,
            Classification::Replaced { replacement, .. } => replacement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Word(Classification),
    LineBreak,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub correct: usize,
    pub suffix_corrected: usize,
    pub replaced: usize,
    pub unchanged: usize,
}

/// Output of one run over a document, one entry per input token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub tokens: Vec<Resolved>,
}

impl ProcessedDocument {
    /// Words of a line joined by single spaces, one `\n` per line break.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut iter = self.tokens.iter().peekable();
        while let Some(token) = iter.next() {
            match token {
                Resolved::LineBreak => out.push('\n'),
                Resolved::Word(classification) => {
                    out.push_str(classification.output());
                    if let Some(Resolved::Word(_)) = iter.peek() {
                        out.push(' ');
                    }
                }
            }
        }
        out
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for token in &self.tokens {
            match token {
                Resolved::Word(Classification::Correct { .. }) => summary.correct += 1,
                Resolved::Word(Classification::SuffixCorrected { .. }) => {
                    summary.suffix_corrected += 1
                }
                Resolved::Word(Classification::Replaced { .. }) => summary.replaced += 1,
                Resolved::Word(Classification::Unchanged { .. }) => summary.unchanged += 1,
                Resolved::LineBreak => {}
            }
        }
        summary
    }
}

/// A token the dictionary and suffix rules could not resolve, as reported by
/// [`DocumentProcessor::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub line: usize,
    pub word: String,
    pub candidates: Vec<String>,
}

/// Render a [`DocumentProcessor::check`] report as JSON.
pub fn report_json(report: &[Misspelling], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

pub struct DocumentProcessor<'a> {
    dictionary: &'a dyn Dictionary,
    suffixes: SuffixClassifier<'a>,
    engine: SuggestionEngine<'a>,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(dictionary: &'a dyn Dictionary, generator: &'a dyn CandidateGenerator) -> Self {
        DocumentProcessor {
            dictionary,
            suffixes: SuffixClassifier::new(dictionary),
            engine: SuggestionEngine::new(generator),
        }
    }

    /// Resolve a word without asking anything; `None` means it needs suggestions.
    fn classify_known(&self, word: &str) -> Option<Classification> {
        if self.dictionary.contains(&word.to_lowercase()) {
            Some(Classification::Correct {
                word: word.to_string(),
            })
        } else if self.suffixes.is_suffix_correctable(word) {
            Some(Classification::SuffixCorrected {
                word: word.to_string(),
            })
        } else {
            None
        }
    }

    pub fn classify(&self, word: &str, confirmer: &mut dyn Confirmer) -> Classification {
        if let Some(known) = self.classify_known(word) {
            return known;
        }
        let session = self.engine.run(word, confirmer);
        match session.outcome {
            SuggestionOutcome::Accepted(replacement) => Classification::Replaced {
                original: session.original,
                replacement,
            },
            SuggestionOutcome::Declined => Classification::Unchanged {
                word: session.original,
            },
        }
    }

    pub fn process<I, S>(&self, lines: I, confirmer: &mut dyn Confirmer) -> ProcessedDocument
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokenize(lines)
            .into_iter()
            .map(|token| match token {
                Token::LineBreak => Resolved::LineBreak,
                Token::Word(word) => Resolved::Word(self.classify(&word, confirmer)),
            })
            .collect();
        let document = ProcessedDocument { tokens };
        let summary = document.summary();
        info!(
            "processed document: {} correct, {} by suffix, {} replaced, {} unchanged",
            summary.correct, summary.suffix_corrected, summary.replaced, summary.unchanged
        );
        document
    }

    /// List unresolved words with their candidates, without prompting.
    ///
    /// Lines are checked in parallel; results keep document order.
    pub fn check<I, S>(&self, lines: I) -> Vec<Misspelling>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<(usize, String)> = lines
            .into_iter()
            .enumerate()
            .flat_map(|(idx, line)| {
                line.as_ref()
                    .split_whitespace()
                    .map(|w| (idx + 1, w.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();

        words
            .into_par_iter()
            .filter(|(_, word)| self.classify_known(word).is_none())
            .map(|(line, word)| Misspelling {
                line,
                candidates: self.engine.candidates(&word),
                word,
            })
            .collect()
    }
}
