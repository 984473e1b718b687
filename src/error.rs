//! Error types shared by the dictionary loader, the file helpers and the
//! interactive session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    /// The input document (or dictionary) does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word list was read but contained no words.
    #[error("dictionary {} contains no words", .0.display())]
    EmptyDictionary(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellError::Io {
            path: path.into(),
            source,
        }
    }
}
