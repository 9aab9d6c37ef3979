#![cfg(test)]

use crate::dict::WordList;
use crate::keypad::Keypad;

/// Shared fixture word list for converter tests.
///
/// Chosen so the keypad reaches them from small digit strings:
/// "rest"/"pest" ← 7378, "ace"/"bad" ← 223, "be" ← 23.
pub fn test_words() -> WordList {
    WordList::from_words(["rest", "pest", "ace", "bad", "be"])
}

pub fn test_keypad() -> Keypad {
    Keypad::us_english()
}
