//! The segment graph: every contiguous run of the digit string, linked into
//! a DAG of adjacent runs and pruned so all surviving paths reach the end.

use tracing::{debug, debug_span};

use super::ConvertError;

/// Handle into the graph's segment arena.
pub type SegmentId = usize;

/// A contiguous sub-range `[begin, end)` of the digit string.
///
/// `candidate_words` holds the dictionary matches for this run in generation
/// order, followed by the raw digit run itself as a guaranteed fallback, so
/// every segment contributes at least one renderable token. `descendants`
/// are handles to segments whose `begin` equals this segment's `end`; the
/// same descendant may be shared by several parents.
#[derive(Debug, Clone)]
pub struct Segment {
    /// The digit substring covered by this segment.
    pub value: String,
    /// Start offset (inclusive).
    pub begin: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Quadratic reward for dictionary-backed runs; 0 for single digits and
    /// runs with no dictionary match.
    pub rank_weight: u32,
    /// Dictionary matches, then the raw digit run as fallback.
    pub candidate_words: Vec<String>,
    /// Handles to segments starting where this one ends.
    pub descendants: Vec<SegmentId>,
}

/// Arena of all segments for one conversion call.
pub struct SegmentGraph {
    pub segments: Vec<Segment>,
    /// Length of the digit string the graph was built from.
    pub input_len: usize,
}

impl SegmentGraph {
    /// Build the segment graph for a normalized (digits-only) string.
    ///
    /// `expand` maps a digit run to its dictionary matches; callers supply a
    /// memoizing closure so overlapping segments share expansion work.
    pub fn build(
        number: &str,
        expand: &mut dyn FnMut(&str) -> Vec<String>,
    ) -> Result<SegmentGraph, ConvertError> {
        let n = number.len();
        let _span = debug_span!("build_graph", digits = n).entered();

        let mut graph = SegmentGraph {
            segments: Vec::with_capacity(n * (n + 1) / 2),
            input_len: n,
        };

        // Every sub-range [j, j+i), shortest runs first.
        for i in 1..=n {
            for j in 0..=(n - i) {
                let value = number[j..j + i].to_string();
                let mut candidate_words = expand(&value);
                candidate_words.push(value.clone());
                // A length-1 run or a run with only the fallback token earns
                // no rank; longer dictionary-backed runs earn length².
                let rank_weight = if i <= 1 || candidate_words.len() <= 1 {
                    0
                } else {
                    (i * i) as u32
                };
                graph.segments.push(Segment {
                    value,
                    begin: j,
                    end: j + i,
                    rank_weight,
                    candidate_words,
                    descendants: Vec::new(),
                });
            }
        }

        graph.link()?;
        graph.prune();

        debug!(
            segment_count = graph.segments.len(),
            root_count = graph.roots().len()
        );
        Ok(graph)
    }

    /// Link A → B wherever `A.end == B.begin`, excluding pure digit-to-digit
    /// joins: an edge survives only if at least one endpoint has nonzero
    /// rank, which keeps all-digits spellings from flooding the results.
    fn link(&mut self) -> Result<(), ConvertError> {
        for a in 0..self.segments.len() {
            let a_end = self.segments[a].end;
            let a_rank = self.segments[a].rank_weight;
            let descendants: Vec<SegmentId> = self
                .segments
                .iter()
                .enumerate()
                .filter(|(_, b)| b.begin == a_end && (b.rank_weight != 0 || a_rank != 0))
                .map(|(id, _)| id)
                .collect();
            self.add_descendants(a, &descendants)?;
        }
        Ok(())
    }

    /// Attach descendant edges to `parent`, validating every handle.
    pub fn add_descendants(
        &mut self,
        parent: SegmentId,
        descendants: &[SegmentId],
    ) -> Result<(), ConvertError> {
        let len = self.segments.len();
        if parent >= len {
            return Err(ConvertError::InvalidArgument(format!(
                "parent handle {parent} out of range (arena size {len})"
            )));
        }
        if let Some(&bad) = descendants.iter().find(|&&d| d >= len) {
            return Err(ConvertError::InvalidArgument(format!(
                "descendant handle {bad} out of range (arena size {len})"
            )));
        }
        self.segments[parent].descendants.extend_from_slice(descendants);
        Ok(())
    }

    /// Drop edges to dead ends until a fixed point: a descendant survives
    /// only if it ends the string or still has descendants of its own. After
    /// this pass every path from a root terminates at `input_len`.
    fn prune(&mut self) {
        let n = self.input_len;
        let mut changed = true;
        while changed {
            changed = false;
            let alive: Vec<bool> = self
                .segments
                .iter()
                .map(|s| s.end == n || !s.descendants.is_empty())
                .collect();
            for segment in &mut self.segments {
                let before = segment.descendants.len();
                segment.descendants.retain(|&d| alive[d]);
                if segment.descendants.len() != before {
                    changed = true;
                }
            }
        }
    }

    /// Handles of the segments starting at offset 0.
    pub fn roots(&self) -> Vec<SegmentId> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.begin == 0)
            .map(|(id, _)| id)
            .collect()
    }
}
