//! Interactive spelling correction for plain-text documents.
//!
//! Every whitespace-delimited token is checked against a word list, then
//! against a set of known endings, and finally offered similar dictionary
//! words one at a time until the user accepts one.

pub mod cli;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod files;
pub mod session;
pub mod similarity;
pub mod suffix;
pub mod suggest;

pub use dictionary::{Dictionary, WordList};
pub use document::{Classification, DocumentProcessor, Misspelling, ProcessedDocument};
pub use error::{Result, SpellError};
pub use suggest::{
    CandidateGenerator, Confirmer, ConsonantIndex, LinearScan, Proposal, SuggestionEngine,
    SuggestionSession,
};
