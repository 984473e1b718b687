//! Order-insensitive typo heuristic used to propose corrections.
//!
//! Two words are "similar" when they use the same number of distinct
//! consonants, differ in length by at most one character, and either share
//! exactly the same distinct characters or the wrong word contains every
//! distinct character of the candidate plus one more. Letter order and
//! repetition are ignored, so this is not an edit distance.

use std::collections::BTreeSet;

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

fn char_set(word: &str) -> BTreeSet<char> {
    word.chars().collect()
}

fn consonant_count(set: &BTreeSet<char>) -> usize {
    set.iter().filter(|c| CONSONANTS.contains(**c)).count()
}

/// Number of distinct consonant letters in `word`.
pub fn distinct_consonants(word: &str) -> usize {
    consonant_count(&char_set(word))
}

/// `candidate` is a dictionary word, `wrong` the lowercased token.
pub fn is_similar(candidate: &str, wrong: &str) -> bool {
    let candidate_set = char_set(candidate);
    let wrong_set = char_set(wrong);

    if consonant_count(&candidate_set) != consonant_count(&wrong_set) {
        return false;
    }
    if candidate.chars().count().abs_diff(wrong.chars().count()) > 1 {
        return false;
    }

    if candidate_set == wrong_set {
        return true;
    }
    // Only the wrong token may carry the extra distinct character.
    if candidate_set.len().abs_diff(wrong_set.len()) == 1 {
        let common: BTreeSet<char> = candidate_set.intersection(&wrong_set).copied().collect();
        return common == candidate_set;
    }
    false
}
