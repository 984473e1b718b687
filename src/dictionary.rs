use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::error::{Result, SpellError};

/// Read-only word source shared by every component for the whole run.
///
/// Words are stored lowercase; `contains` expects an already lowercased
/// query. `words` must enumerate in ascending order and start over on every
/// call, so that suggestion order is reproducible.
pub trait Dictionary: Send + Sync {
    fn contains(&self, word: &str) -> bool;

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

/// In-memory dictionary backed by a hash set for lookups and a sorted
/// vector for enumeration.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    lookup: HashSet<String>,
    sorted: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookup: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let mut sorted: Vec<String> = lookup.iter().cloned().collect();
        sorted.sort_unstable();
        WordList { lookup, sorted }
    }

    /// Load a newline-delimited word list.
    pub fn from_word_list_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SpellError::FileNotFound(path.to_path_buf()),
            _ => SpellError::io(path, e),
        })?;
        let dictionary = Self::new(content.lines());
        if dictionary.is_empty() {
            return Err(SpellError::EmptyDictionary(path.to_path_buf()));
        }
        info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.sorted.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalizes_and_deduplicates() {
        let dict = WordList::new(["Dog", "cat", "  dog ", "", "Cat"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("dog"));
        assert!(dict.contains("cat"));
        assert!(!dict.contains("Dog"));
    }

    #[test]
    fn test_words_are_sorted_and_restartable() {
        let dict = WordList::new(["pear", "apple", "mango"]);
        let first: Vec<&str> = dict.words().collect();
        let second: Vec<&str> = dict.words().collect();
        assert_eq!(first, vec!["apple", "mango", "pear"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_word_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Zebra\nant\n\nbee").unwrap();
        let dict = WordList::from_word_list_file(file.path()).unwrap();
        assert_eq!(dict.words().collect::<Vec<_>>(), vec!["ant", "bee", "zebra"]);
    }

    #[test]
    fn test_missing_word_list_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match WordList::from_word_list_file(&missing) {
            Err(SpellError::FileNotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_word_list_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            WordList::from_word_list_file(file.path()),
            Err(SpellError::EmptyDictionary(_))
        ));
    }
}
