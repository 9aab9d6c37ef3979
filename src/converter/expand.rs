//! Letter-combination expansion: every string spellable from a digit run,
//! filtered down to dictionary words.

use tracing::{debug, debug_span};

use crate::dict::WordList;
use crate::keypad::Keypad;

/// Expand `digit_run` into the Cartesian product of its keypad letters and
/// keep the dictionary matches, in generation order (keypad order, leftmost
/// digit varying slowest).
///
/// The branching factor is 3–4 per digit, so candidate count is exponential
/// in run length; callers memoize per (language, run). Returns a fresh
/// vector — callers may push the fallback token onto it freely.
pub fn expand(keypad: &Keypad, words: &WordList, digit_run: &str) -> Vec<String> {
    let _span = debug_span!("expand", run = digit_run).entered();

    let mut partials: Vec<String> = Vec::new();
    for digit in digit_run.chars() {
        let Some(letters) = keypad.letters_for(digit) else {
            // Input is normalized before it gets here; an unmapped character
            // spells nothing.
            return Vec::new();
        };
        if partials.is_empty() {
            partials = letters.chars().map(String::from).collect();
        } else {
            let mut grown = Vec::with_capacity(partials.len() * letters.len());
            for partial in &partials {
                for letter in letters.chars() {
                    let mut candidate = String::with_capacity(partial.len() + 1);
                    candidate.push_str(partial);
                    candidate.push(letter);
                    grown.push(candidate);
                }
            }
            partials = grown;
        }
    }

    let generated = partials.len();
    partials.retain(|candidate| words.contains(candidate));
    debug!(generated, matched = partials.len());
    partials
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::testutil::{test_keypad, test_words};

    #[test]
    fn finds_dictionary_matches() {
        let matches = expand(&test_keypad(), &test_words(), "7378");
        // Keypad order: p(est) before r(est).
        assert_eq!(matches, vec!["pest", "rest"]);
    }

    #[test]
    fn no_match_means_empty() {
        assert!(expand(&test_keypad(), &test_words(), "99").is_empty());
    }

    #[test]
    fn sentinel_digit_spells_nothing() {
        // '1' maps to a single non-letter sentinel, never a word.
        assert!(expand(&test_keypad(), &test_words(), "1").is_empty());
    }

    #[test]
    fn idempotent_with_independent_results() {
        let keypad = test_keypad();
        let words = test_words();
        let first = expand(&keypad, &words, "223");
        let mut second = expand(&keypad, &words, "223");
        assert_eq!(first, second);
        second.push("223".to_string());
        assert_ne!(first, second);
        assert_eq!(first, expand(&keypad, &words, "223"));
    }

    #[test]
    fn unmapped_character_yields_nothing() {
        assert!(expand(&test_keypad(), &test_words(), "2x3").is_empty());
    }
}
