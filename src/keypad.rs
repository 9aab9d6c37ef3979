//! Telephone keypad tables: which letters each digit key carries, per language.

/// The letters printed on each key of a telephone keypad.
///
/// Indexed by digit value. `'0'` carries a single space, `'1'` a single
/// sentinel symbol that never matches a dictionary word, and `'2'`–`'9'`
/// carry the usual 3–4 letters. Adding a language means supplying another
/// table in [`EngineConfig::keypads`](crate::engine::EngineConfig); nothing
/// else in the pipeline is language-specific.
#[derive(Debug, Clone)]
pub struct Keypad {
    keys: [&'static str; 10],
}

impl Keypad {
    pub const fn new(keys: [&'static str; 10]) -> Self {
        Self { keys }
    }

    /// The standard US-English layout.
    pub const fn us_english() -> Self {
        Self::new([
            " ", "&", "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz",
        ])
    }

    /// Letters reachable from `digit`, or `None` for a non-digit character.
    pub fn letters_for(&self, digit: char) -> Option<&'static str> {
        digit.to_digit(10).map(|d| self.keys[d as usize])
    }
}
