//! Path enumeration: walk the segment graph for every exact partition of
//! the digit string, then pick one token per segment along each partition.

use tracing::{debug, debug_span};

use super::graph::{SegmentGraph, SegmentId};

/// Every segmentation path through the graph: an ordered handle sequence
/// from a root to a segment ending the string, partitioning the input with
/// no gaps or overlaps. Recomputed on every call; nothing is retained.
pub fn segmentations(graph: &SegmentGraph) -> Vec<Vec<SegmentId>> {
    let _span = debug_span!("segmentations", input_len = graph.input_len).entered();
    let mut paths = Vec::new();
    let mut active = Vec::new();
    for root in graph.roots() {
        walk(graph, root, &mut active, &mut paths);
    }
    debug!(path_count = paths.len());
    paths
}

fn walk(
    graph: &SegmentGraph,
    id: SegmentId,
    active: &mut Vec<SegmentId>,
    paths: &mut Vec<Vec<SegmentId>>,
) {
    // Edges strictly advance the position, so a cycle is unreachable by
    // construction; the walk still refuses to revisit a node on the active
    // path and terminates the path right there.
    if active.contains(&id) {
        emit(graph, active, paths);
        return;
    }
    active.push(id);
    if graph.segments[id].descendants.is_empty() {
        emit(graph, active, paths);
    } else {
        for &next in &graph.segments[id].descendants {
            walk(graph, next, active, paths);
        }
    }
    active.pop();
}

/// Keep only paths that actually reach the end of the string: a root whose
/// edges were all pruned still walks, but its truncated path is not a
/// segmentation.
fn emit(graph: &SegmentGraph, active: &[SegmentId], paths: &mut Vec<Vec<SegmentId>>) {
    if let Some(&last) = active.last() {
        if graph.segments[last].end == graph.input_len {
            paths.push(active.to_vec());
        }
    }
}

/// All token choices for one segmentation: the Cartesian product over each
/// segment's `candidate_words`, one token per segment, in segment order.
pub fn token_combinations(graph: &SegmentGraph, segmentation: &[SegmentId]) -> Vec<Vec<String>> {
    let mut combos: Vec<Vec<String>> = vec![Vec::new()];
    for &id in segmentation {
        let words = &graph.segments[id].candidate_words;
        let mut grown = Vec::with_capacity(combos.len() * words.len());
        for combo in &combos {
            for word in words {
                let mut next = combo.clone();
                next.push(word.clone());
                grown.push(next);
            }
        }
        combos = grown;
    }
    combos
}
