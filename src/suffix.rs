use log::debug;

use crate::dictionary::Dictionary;

/// Endings tried, in order, when a token is not itself a dictionary word.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "ing", "d", "ment", "ness", "ity", "able", "ion", "ly", "ful", "ed", "less", "s", "r", ".",
    "?", ",", ":", ";", "!",
];

/// Accepts tokens that become a dictionary word once a known ending is cut off.
///
/// This is a heuristic: the remainder only has to be *some* dictionary word,
/// not the real stem, so short tokens can be accepted by coincidence.
pub struct SuffixClassifier<'a> {
    dictionary: &'a dyn Dictionary,
    suffixes: Vec<String>,
}

impl<'a> SuffixClassifier<'a> {
    pub fn new(dictionary: &'a dyn Dictionary) -> Self {
        Self::with_suffixes(dictionary, DEFAULT_SUFFIXES.iter().copied())
    }

    pub fn with_suffixes<I, S>(dictionary: &'a dyn Dictionary, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        SuffixClassifier {
            dictionary,
            suffixes,
        }
    }

    pub fn is_suffix_correctable(&self, token: &str) -> bool {
        self.matching_suffix(token).is_some()
    }

    /// The first suffix whose removal leaves a dictionary word.
    pub fn matching_suffix(&self, token: &str) -> Option<&str> {
        let found = self.suffixes.iter().find(|suffix| {
            // a suffix as long as the token would leave nothing to look up
            if suffix.len() >= token.len() {
                return false;
            }
            token
                .strip_suffix(suffix.as_str())
                .is_some_and(|base| self.dictionary.contains(&base.to_lowercase()))
        })?;
        debug!("'{}' accepted by stripping '{}'", token, found);
        Some(found.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    fn dict() -> WordList {
        WordList::new(["jump", "dog", "kind", "a", "happy"])
    }

    #[test]
    fn test_strips_known_suffix() {
        let d = dict();
        let classifier = SuffixClassifier::new(&d);
        assert!(classifier.is_suffix_correctable("jumping"));
        assert!(classifier.is_suffix_correctable("jumped"));
        assert!(classifier.is_suffix_correctable("kindness"));
        assert_eq!(classifier.matching_suffix("jumping"), Some("ing"));
    }

    #[test]
    fn test_trailing_punctuation_is_a_suffix() {
        let d = dict();
        let classifier = SuffixClassifier::new(&d);
        assert_eq!(classifier.matching_suffix("dog."), Some("."));
        assert_eq!(classifier.matching_suffix("dog!"), Some("!"));
        assert!(classifier.is_suffix_correctable("Dog,"));
    }

    #[test]
    fn test_remainder_is_lowercased() {
        let d = dict();
        let classifier = SuffixClassifier::new(&d);
        assert!(classifier.is_suffix_correctable("JUMPing"));
    }

    #[test]
    fn test_no_match() {
        let d = dict();
        let classifier = SuffixClassifier::new(&d);
        assert!(!classifier.is_suffix_correctable("flying"));
        assert!(!classifier.is_suffix_correctable("dogz"));
        assert!(!classifier.is_suffix_correctable(""));
    }

    #[test]
    fn test_token_not_longer_than_suffix() {
        let d = dict();
        let classifier = SuffixClassifier::new(&d);
        // "ing" equals the suffix; "s" is shorter than most suffixes
        assert!(!classifier.is_suffix_correctable("ing"));
        assert!(!classifier.is_suffix_correctable("s"));
    }

    #[test]
    fn test_short_token_false_positive() {
        // "as" minus "s" leaves "a", which happens to be a word
        let d = dict();
        let classifier = SuffixClassifier::new(&d);
        assert_eq!(classifier.matching_suffix("as"), Some("s"));
    }

    #[test]
    fn test_custom_suffixes_skip_empty() {
        let d = dict();
        let classifier = SuffixClassifier::with_suffixes(&d, ["", "ish"]);
        assert!(classifier.is_suffix_correctable("dogish"));
        assert!(!classifier.is_suffix_correctable("dog"));
        assert!(!classifier.is_suffix_correctable("jumping"));
    }
}
