//! Scoring and ordering of candidate spellings.

use std::fmt;

use serde::Serialize;

use super::graph::{SegmentGraph, SegmentId};
use super::ConvertOptions;

/// One full-length mnemonic: tokens (words or fallback digit runs) covering
/// the whole number, plus the derived score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spelling {
    pub tokens: Vec<String>,
    pub score: i64,
}

impl Spelling {
    /// Tokens joined with the usual phone-mnemonic separator.
    pub fn text(&self) -> String {
        self.tokens.join("-")
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Pluggable scoring rule for candidate spellings.
///
/// Two rules ship with the crate; callers can supply their own via
/// [`SpellPhone::convert_with`](crate::engine::SpellPhone::convert_with).
pub trait ScoreStrategy: Send + Sync {
    fn score(&self, graph: &SegmentGraph, segmentation: &[SegmentId], tokens: &[String]) -> i64;
}

/// Default rule: total alphabetic characters across tokens minus the number
/// of joins. Rewards covering more of the number with real letters while
/// penalizing fragmentation into many short segments.
pub struct LetterDensity;

impl ScoreStrategy for LetterDensity {
    fn score(&self, _graph: &SegmentGraph, _segmentation: &[SegmentId], tokens: &[String]) -> i64 {
        let letters: i64 = tokens
            .iter()
            .map(|t| t.chars().filter(|c| c.is_alphabetic()).count() as i64)
            .sum();
        let joins = tokens.len().saturating_sub(1) as i64;
        letters - joins
    }
}

/// Alternative rule: sum of the segments' quadratic rank weights along the
/// path, independent of which token each segment contributed.
pub struct RankWeightSum;

impl ScoreStrategy for RankWeightSum {
    fn score(&self, graph: &SegmentGraph, segmentation: &[SegmentId], _tokens: &[String]) -> i64 {
        segmentation
            .iter()
            .map(|&id| graph.segments[id].rank_weight as i64)
            .sum()
    }
}

/// Order spellings by descending score (stable, so equal scores keep their
/// generation order — callers must not rely on tie order) and optionally
/// drop non-positive results.
pub fn rank_and_sort(mut spellings: Vec<Spelling>, options: ConvertOptions) -> Vec<Spelling> {
    if options.drop_nonpositive {
        spellings.retain(|s| s.score > 0);
    }
    spellings.sort_by(|a, b| b.score.cmp(&a.score));
    spellings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::expand;
    use crate::converter::testutil::{test_keypad, test_words};

    fn spelling(tokens: &[&str], score: i64) -> Spelling {
        Spelling {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            score,
        }
    }

    #[test]
    fn letter_density_counts_letters_minus_joins() {
        let graph = empty_graph();
        let score = LetterDensity.score(
            &graph,
            &[],
            &["bad".to_string(), "3".to_string(), "be".to_string()],
        );
        // 5 letters, 2 joins.
        assert_eq!(score, 3);
    }

    #[test]
    fn fallback_only_spelling_scores_zero_or_less() {
        let graph = empty_graph();
        assert_eq!(LetterDensity.score(&graph, &[], &["7378".to_string()]), 0);
        assert_eq!(
            LetterDensity.score(&graph, &[], &["73".to_string(), "78".to_string()]),
            -1
        );
    }

    #[test]
    fn rank_weight_sum_reads_the_graph() {
        let keypad = test_keypad();
        let words = test_words();
        let graph =
            SegmentGraph::build("7378", &mut |run| expand(&keypad, &words, run)).unwrap();
        let full = graph
            .segments
            .iter()
            .position(|s| s.value == "7378")
            .unwrap();
        assert_eq!(RankWeightSum.score(&graph, &[full], &[]), 16);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let spellings = vec![
            spelling(&["low"], 1),
            spelling(&["first-tie"], 4),
            spelling(&["second-tie"], 4),
            spelling(&["high"], 9),
        ];
        let sorted = rank_and_sort(spellings, ConvertOptions::default());
        let scores: Vec<i64> = sorted.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![9, 4, 4, 1]);
        assert_eq!(sorted[1].tokens[0], "first-tie");
        assert_eq!(sorted[2].tokens[0], "second-tie");
    }

    #[test]
    fn drop_nonpositive_filters() {
        let spellings = vec![spelling(&["word"], 4), spelling(&["7378"], 0)];
        let kept = rank_and_sort(
            spellings,
            ConvertOptions {
                drop_nonpositive: true,
            },
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].score, 4);
    }

    fn empty_graph() -> SegmentGraph {
        SegmentGraph {
            segments: Vec::new(),
            input_len: 0,
        }
    }
}
