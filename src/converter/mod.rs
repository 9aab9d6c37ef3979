//! Digit-string → ranked mnemonic spellings.
//!
//! Builds a graph of every contiguous digit run (with its dictionary
//! matches), enumerates the paths that exactly partition the input, forms
//! every per-segment token choice, then scores and orders the results.

mod expand;
mod graph;
mod paths;
mod rank;
pub(crate) mod testutil;

#[cfg(test)]
mod tests;

use crate::dict::WordList;
use crate::keypad::Keypad;

pub use expand::expand;
pub use graph::{Segment, SegmentGraph, SegmentId};
pub use paths::{segmentations, token_combinations};
pub use rank::{rank_and_sort, LetterDensity, RankWeightSum, ScoreStrategy, Spelling};

/// Error raised by a conversion call.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("language argument is missing or empty")]
    MissingLanguage,

    #[error("word list for language `{0}` is not loaded")]
    DictionaryNotLoaded(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Per-call knobs. Both "show everything, ranked" (the default) and "show
/// only meaningfully-worded results" are valid consumer needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Drop spellings whose score is non-positive (e.g. all-fallback
    /// digit-only results).
    pub drop_nonpositive: bool,
}

/// Strip everything but ASCII digits.
pub fn normalize(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// One-shot conversion without an engine (no memoization across calls).
///
/// Normalizes `number` first; an empty normalized string yields an empty
/// result.
pub fn convert(
    keypad: &Keypad,
    words: &WordList,
    number: &str,
    strategy: &dyn ScoreStrategy,
    options: ConvertOptions,
) -> Result<Vec<Spelling>, ConvertError> {
    let digits = normalize(number);
    if digits.is_empty() {
        return Ok(Vec::new());
    }
    let graph = SegmentGraph::build(&digits, &mut |run| expand(keypad, words, run))?;
    Ok(spell(&graph, strategy, options))
}

/// Enumerate, score and order every candidate spelling of a built graph.
pub fn spell(
    graph: &SegmentGraph,
    strategy: &dyn ScoreStrategy,
    options: ConvertOptions,
) -> Vec<Spelling> {
    let mut spellings = Vec::new();
    for segmentation in paths::segmentations(graph) {
        for tokens in paths::token_combinations(graph, &segmentation) {
            let score = strategy.score(graph, &segmentation, &tokens);
            spellings.push(Spelling { tokens, score });
        }
    }
    rank::rank_and_sort(spellings, options)
}
