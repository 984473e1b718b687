use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::dictionary::Dictionary;
use crate::similarity::{distinct_consonants, is_similar};

/// Produces, in dictionary order, the words similar to a lowercased token.
///
/// Candidates are pulled lazily so the scan stops as soon as the user
/// accepts one.
pub trait CandidateGenerator: Send + Sync {
    fn candidates<'a>(&'a self, wrong: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Tests every dictionary word in turn.
pub struct LinearScan<'d> {
    dictionary: &'d dyn Dictionary,
}

impl<'d> LinearScan<'d> {
    pub fn new(dictionary: &'d dyn Dictionary) -> Self {
        LinearScan { dictionary }
    }
}

impl CandidateGenerator for LinearScan<'_> {
    fn candidates<'a>(&'a self, wrong: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.dictionary
                .words()
                .filter(move |candidate| is_similar(candidate, wrong)),
        )
    }
}

/// Buckets the dictionary by distinct-consonant count.
///
/// Only the bucket matching the token is scanned; buckets keep dictionary
/// order, so the candidate sequence equals the one from [`LinearScan`].
#[derive(Debug, Clone, Default)]
pub struct ConsonantIndex {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl ConsonantIndex {
    pub fn build(dictionary: &dyn Dictionary) -> Self {
        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in dictionary.words() {
            buckets
                .entry(distinct_consonants(word))
                .or_default()
                .push(word.to_string());
        }
        debug!("built consonant index with {} buckets", buckets.len());
        ConsonantIndex { buckets }
    }
}

impl CandidateGenerator for ConsonantIndex {
    fn candidates<'a>(&'a self, wrong: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.buckets.get(&distinct_consonants(wrong)) {
            Some(bucket) => Box::new(
                bucket
                    .iter()
                    .map(String::as_str)
                    .filter(move |candidate| is_similar(candidate, wrong)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// A single "did you mean" question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal<'a> {
    pub wrong: &'a str,
    pub candidate: &'a str,
}

impl fmt::Display for Proposal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instead of: '{}', did you mean '{}'?",
            self.wrong, self.candidate
        )
    }
}

/// Blocking yes/no answer to a [`Proposal`].
pub trait Confirmer {
    fn confirm(&mut self, proposal: &Proposal<'_>) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&Proposal<'_>) -> bool,
{
    fn confirm(&mut self, proposal: &Proposal<'_>) -> bool {
        self(proposal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Accepted(String),
    Declined,
}

/// State of one misspelled token while candidates are being proposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSession {
    pub original: String,
    pub capitalized: bool,
    pub proposals: usize,
    pub outcome: SuggestionOutcome,
}

impl SuggestionSession {
    fn new(original: &str) -> Self {
        SuggestionSession {
            original: original.to_string(),
            capitalized: starts_uppercase(original),
            proposals: 0,
            outcome: SuggestionOutcome::Declined,
        }
    }

    /// The accepted word, or the original token when nothing was accepted.
    pub fn into_word(self) -> String {
        match self.outcome {
            SuggestionOutcome::Accepted(word) => word,
            SuggestionOutcome::Declined => self.original,
        }
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct SuggestionEngine<'g> {
    generator: &'g dyn CandidateGenerator,
}

impl<'g> SuggestionEngine<'g> {
    pub fn new(generator: &'g dyn CandidateGenerator) -> Self {
        SuggestionEngine { generator }
    }

    /// Propose candidates for `wrong` until one is confirmed.
    ///
    /// Candidates are capitalized when `wrong` starts with an uppercase
    /// letter. The first confirmed candidate ends the scan.
    pub fn run(&self, wrong: &str, confirmer: &mut dyn Confirmer) -> SuggestionSession {
        let mut session = SuggestionSession::new(wrong);
        let lowered = wrong.to_lowercase();

        for candidate in self.generator.candidates(&lowered) {
            let candidate = if session.capitalized {
                capitalize_first(candidate)
            } else {
                candidate.to_string()
            };
            session.proposals += 1;
            let proposal = Proposal {
                wrong,
                candidate: &candidate,
            };
            if confirmer.confirm(&proposal) {
                debug!("'{}' replaced by '{}'", wrong, candidate);
                session.outcome = SuggestionOutcome::Accepted(candidate);
                return session;
            }
            debug!("'{}' rejected for '{}'", candidate, wrong);
        }

        debug!(
            "no replacement accepted for '{}' after {} proposals",
            wrong, session.proposals
        );
        session
    }

    pub fn suggest(&self, wrong: &str, confirmer: &mut dyn Confirmer) -> String {
        self.run(wrong, confirmer).into_word()
    }

    /// Every candidate for `wrong`, capitalized like it, in dictionary order.
    pub fn candidates(&self, wrong: &str) -> Vec<String> {
        let capitalized = starts_uppercase(wrong);
        let lowered = wrong.to_lowercase();
        self.generator
            .candidates(&lowered)
            .map(|c| {
                if capitalized {
                    capitalize_first(c)
                } else {
                    c.to_string()
                }
            })
            .collect()
    }
}
