//! Static augmented interval tree for fast overlap queries.
//!
//! [`IntervalTree`] stores half-open `[start, end)` spans in an implicit
//! balanced BST layout (nodes in a contiguous `Vec`, children of node `i`
//! at `2i+1`/`2i+2`). Build once, query many times with O(log n + k)
//! overlap queries.

/// Internal node in the implicit BST.
#[derive(Debug, Clone)]
struct Node {
    start: u64,
    end: u64,
    /// Maximum end coordinate in this subtree.
    max_end: u64,
}

/// A static interval tree over half-open `u64` spans.
///
/// Built once from a set of spans, then queried read-only. Duplicate and
/// overlapping spans are all retained. Two spans overlap when
/// `a.start < b.end && a.end > b.start`.
#[derive(Debug, Clone, Default)]
pub struct IntervalTree {
    nodes: Vec<Option<Node>>,
    len: usize,
}

impl IntervalTree {
    /// Build a tree from `(start, end)` spans. O(n log n).
    ///
    /// An empty input yields an empty, valid tree on which every query
    /// reports no overlap.
    pub fn from_spans(mut spans: Vec<(u64, u64)>) -> Self {
        spans.sort_unstable_by_key(|&(start, _)| start);

        let n = spans.len();
        if n == 0 {
            return Self {
                nodes: Vec::new(),
                len: 0,
            };
        }

        let mut nodes: Vec<Option<Node>> = (0..implicit_size(n)).map(|_| None).collect();
        let mut sorted: Vec<Option<(u64, u64)>> = spans.into_iter().map(Some).collect();

        place_median(&mut nodes, &mut sorted, 0, 0, n);
        fill_max_end(&mut nodes, 0);

        Self { nodes, len: n }
    }

    /// Whether any stored span intersects `[start, end)`.
    ///
    /// Stops at the first hit.
    pub fn overlaps(&self, start: u64, end: u64) -> bool {
        !self.nodes.is_empty() && self.overlaps_recursive(0, start, end)
    }

    /// All spans intersecting `[start, end)`, in start order.
    pub fn query(&self, start: u64, end: u64) -> Vec<(u64, u64)> {
        let mut results = Vec::new();
        if !self.nodes.is_empty() {
            self.query_recursive(0, start, end, &mut results);
        }
        results
    }

    /// Count spans intersecting `[start, end)` without allocating.
    pub fn count_overlaps(&self, start: u64, end: u64) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        self.count_recursive(0, start, end)
    }

    /// Number of spans in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree contains no spans.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn overlaps_recursive(&self, idx: usize, start: u64, end: u64) -> bool {
        if idx >= self.nodes.len() {
            return false;
        }
        let node = match &self.nodes[idx] {
            Some(n) => n,
            None => return false,
        };

        // Prune: if max_end in this subtree <= query start, no overlap possible
        if node.max_end <= start {
            return false;
        }

        if node.start < end && node.end > start {
            return true;
        }

        if self.overlaps_recursive(2 * idx + 1, start, end) {
            return true;
        }

        // Prune right: if node.start >= end, right subtree has only larger starts
        node.start < end && self.overlaps_recursive(2 * idx + 2, start, end)
    }

    fn query_recursive(&self, idx: usize, start: u64, end: u64, results: &mut Vec<(u64, u64)>) {
        if idx >= self.nodes.len() {
            return;
        }
        let node = match &self.nodes[idx] {
            Some(n) => n,
            None => return,
        };

        if node.max_end <= start {
            return;
        }

        self.query_recursive(2 * idx + 1, start, end, results);

        if node.start < end && node.end > start {
            results.push((node.start, node.end));
        }

        if node.start < end {
            self.query_recursive(2 * idx + 2, start, end, results);
        }
    }

    fn count_recursive(&self, idx: usize, start: u64, end: u64) -> usize {
        if idx >= self.nodes.len() {
            return 0;
        }
        let node = match &self.nodes[idx] {
            Some(n) => n,
            None => return 0,
        };

        if node.max_end <= start {
            return 0;
        }

        let mut count = self.count_recursive(2 * idx + 1, start, end);

        if node.start < end && node.end > start {
            count += 1;
        }

        if node.start < end {
            count += self.count_recursive(2 * idx + 2, start, end);
        }

        count
    }
}

// ---------------------------------------------------------------------------
// Implicit BST construction helpers
// ---------------------------------------------------------------------------

/// Array size needed for an implicit BST holding `n` elements.
fn implicit_size(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let height = usize::BITS - (n - 1).leading_zeros() + 1;
    (1usize << height) - 1
}

/// Recursively place the median of each sorted sub-range at its node slot.
fn place_median(
    nodes: &mut [Option<Node>],
    sorted: &mut [Option<(u64, u64)>],
    node_idx: usize,
    lo: usize,
    hi: usize,
) {
    if lo >= hi || node_idx >= nodes.len() {
        return;
    }

    let mid = lo + (hi - lo) / 2;

    if let Some((start, end)) = sorted[mid].take() {
        nodes[node_idx] = Some(Node {
            start,
            end,
            max_end: end,
        });

        place_median(nodes, sorted, 2 * node_idx + 1, lo, mid);
        place_median(nodes, sorted, 2 * node_idx + 2, mid + 1, hi);
    }
}

/// Post-order traversal computing the augmented `max_end` values.
fn fill_max_end(nodes: &mut [Option<Node>], idx: usize) -> u64 {
    if idx >= nodes.len() {
        return 0;
    }

    let own_end = match &nodes[idx] {
        Some(n) => n.end,
        None => return 0,
    };

    let left_max = fill_max_end(nodes, 2 * idx + 1);
    let right_max = fill_max_end(nodes, 2 * idx + 2);
    let max_end = own_end.max(left_max).max(right_max);

    if let Some(node) = &mut nodes[idx] {
        node.max_end = max_end;
    }

    max_end
}
