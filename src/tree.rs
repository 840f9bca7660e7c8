//! Flat, array-based decision-tree representation.
//!
//! Mirrors the arena layout used by tree learners: parallel arrays indexed
//! by node id, with the root fixed at index 0. Nodes are never boxed or
//! linked by reference, traversal is plain array lookups.
use serde::{Deserialize, Serialize};

/// Child sentinel for leaves. A node is a leaf iff `left[i] == right[i]`,
/// both conventionally set to this value.
pub const LEAF: usize = usize::MAX;

/// A fitted decision tree, read-only input to the decoders.
///
/// All arrays have one entry per node. For internal nodes (forks),
/// `feature` and `threshold` describe the split: rows with
/// `row[feature[i]] <= threshold[i]` go to `left[i]`, the rest to
/// `right[i]`. `value` holds the per-class counts or weights gathered at
/// each node; the decoders only read it at leaves.
///
/// The tree is assumed to be a proper rooted binary tree. Cycles or
/// unreachable nodes are not defensively checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Left child of each node, [`LEAF`] for leaves.
    pub left: Vec<usize>,
    /// Right child of each node, [`LEAF`] for leaves.
    pub right: Vec<usize>,
    /// Feature index tested at each fork, meaningless for leaves.
    pub feature: Vec<usize>,
    /// Split cutoff at each fork, meaningless for leaves.
    pub threshold: Vec<f64>,
    /// Per-class score vector at each node.
    pub value: Vec<Vec<f64>>,
    /// Number of features the tree was fitted on.
    pub n_features: usize,
}

/// Per-node depth and leaf flags, derived once per rendering call.
#[derive(Debug, Clone)]
pub struct NodeAnnotations {
    /// Distance from the root to each node.
    pub depth: Vec<usize>,
    /// Whether each node is a leaf.
    pub is_leaf: Vec<bool>,
}

impl Tree {
    /// Build a tree from its parallel node arrays.
    pub fn new(
        left: Vec<usize>,
        right: Vec<usize>,
        feature: Vec<usize>,
        threshold: Vec<f64>,
        value: Vec<Vec<f64>>,
        n_features: usize,
    ) -> Self {
        Tree {
            left,
            right,
            feature,
            threshold,
            value,
            n_features,
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.left.len()
    }

    /// Number of classes, taken from the root's score vector.
    pub fn n_classes(&self) -> usize {
        self.value.first().map_or(0, |v| v.len())
    }

    /// Whether node `i` is a leaf.
    pub fn is_leaf(&self, i: usize) -> bool {
        self.left[i] == self.right[i]
    }

    /// Compute the depth and leaf flag of every node.
    ///
    /// Iterative depth-first walk over an explicit stack of
    /// `(node, parent_depth)` pairs, seeded with the root at parent depth
    /// -1. Visit order is irrelevant here, depth and leaf status do not
    /// depend on it; callers that need node-index order iterate the
    /// returned arrays directly.
    pub fn annotate(&self) -> NodeAnnotations {
        let n = self.node_count();
        let mut depth = vec![0_usize; n];
        let mut is_leaf = vec![false; n];
        if n == 0 {
            return NodeAnnotations { depth, is_leaf };
        }

        let mut stack: Vec<(usize, i64)> = vec![(0, -1)];
        while let Some((node, parent_depth)) = stack.pop() {
            let node_depth = (parent_depth + 1) as usize;
            depth[node] = node_depth;

            if self.is_leaf(node) {
                is_leaf[node] = true;
            } else {
                stack.push((self.left[node], node_depth as i64));
                stack.push((self.right[node], node_depth as i64));
            }
        }

        NodeAnnotations { depth, is_leaf }
    }
}

#[cfg(test)]
pub(crate) fn iris_tree() -> Tree {
    // The iris tree from the demo: root forks on petal width, node 2 on
    // petal length, three leaves holding raw class counts.
    Tree::new(
        vec![1, LEAF, 3, LEAF, LEAF],
        vec![2, LEAF, 4, LEAF, LEAF],
        vec![3, 0, 2, 0, 0],
        vec![0.8, 0.0, 4.95, 0.0, 0.0],
        vec![
            vec![37.0, 34.0, 41.0],
            vec![37.0, 0.0, 0.0],
            vec![0.0, 34.0, 41.0],
            vec![0.0, 33.0, 3.0],
            vec![0.0, 1.0, 38.0],
        ],
        4,
    )
}
