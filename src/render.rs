//! Rendering of tree structure and decision paths.
//!
//! Both entry points accumulate lines into a buffer and return one string,
//! the caller decides where to write it.
use crate::errors::DecodeError;
use crate::estimator::Estimator;
use crate::tree::Tree;
use crate::utils::{fmt_float, fmt_scores, normalize_l1, MaybeRound};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Options for one [`get_tree_info`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeInfoConfig {
    /// L1-normalize leaf score vectors so they sum to one.
    pub normalize: bool,
    /// Decimal digits for cutoffs and scores, `None` for no rounding.
    pub precision: Option<i32>,
    /// Partial mapping from feature index to a display name. Indices
    /// absent from the map fall back to `feature {index}`.
    pub names: HashMap<usize, String>,
    /// Restrict leaf output to the score of a single class.
    pub label_index: Option<usize>,
    /// Spaces per indentation level.
    pub tab_size: usize,
}

impl Default for TreeInfoConfig {
    fn default() -> Self {
        TreeInfoConfig {
            normalize: true,
            precision: Some(3),
            names: HashMap::new(),
            label_index: None,
            tab_size: 5,
        }
    }
}

impl TreeInfoConfig {
    /// Set whether leaf scores are normalized.
    /// * `normalize` - L1-normalize leaf score vectors.
    pub fn set_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the rounding precision.
    /// * `precision` - Decimal digits, or `None` to skip rounding.
    pub fn set_precision(mut self, precision: Option<i32>) -> Self {
        self.precision = precision;
        self
    }

    /// Set the feature display names.
    /// * `names` - Mapping from feature index to display name.
    pub fn set_names(mut self, names: HashMap<usize, String>) -> Self {
        self.names = names;
        self
    }

    /// Set the label index.
    /// * `label_index` - Class whose score alone is shown at leaves.
    pub fn set_label_index(mut self, label_index: Option<usize>) -> Self {
        self.label_index = label_index;
        self
    }

    /// Set the indentation width.
    /// * `tab_size` - Spaces per depth level, 0 for no indentation.
    pub fn set_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }
}

/// Options for one [`get_decision_info`] call.
///
/// The decision-path walker always normalizes leaf scores and always shows
/// the full per-class vector, so there are no `normalize` or `label_index`
/// options here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionInfoConfig {
    /// Decimal digits for feature values, cutoffs and scores, `None` for
    /// no rounding.
    pub precision: Option<i32>,
    /// Partial mapping from feature index to a display name.
    pub names: HashMap<usize, String>,
    /// Spaces of indentation for the node lines.
    pub tab_size: usize,
}

impl Default for DecisionInfoConfig {
    fn default() -> Self {
        DecisionInfoConfig {
            precision: Some(3),
            names: HashMap::new(),
            tab_size: 5,
        }
    }
}

impl DecisionInfoConfig {
    /// Set the rounding precision.
    /// * `precision` - Decimal digits, or `None` to skip rounding.
    pub fn set_precision(mut self, precision: Option<i32>) -> Self {
        self.precision = precision;
        self
    }

    /// Set the feature display names.
    /// * `names` - Mapping from feature index to display name.
    pub fn set_names(mut self, names: HashMap<usize, String>) -> Self {
        self.names = names;
        self
    }

    /// Set the indentation width.
    /// * `tab_size` - Spaces of indentation, 0 for none.
    pub fn set_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }
}

/// Render the structure of a fitted decision tree.
///
/// Each node becomes one line, either its decision threshold and the nodes
/// it forks to, or its leaf scores. Nodes appear in index order, with
/// indentation proportional to depth and blank lines separating completed
/// subtrees.
pub fn get_tree_info(estimator: &Estimator, config: &TreeInfoConfig) -> Result<String, DecodeError> {
    let clf = estimator.as_classifier()?;
    let tree = clf.tree()?;
    render_tree_info(tree, config)
}

/// Render the path a single feature vector takes through a fitted tree,
/// from the root down to the leaf that scores it.
pub fn get_decision_info(
    estimator: &Estimator,
    row: &[f64],
    config: &DecisionInfoConfig,
) -> Result<String, DecodeError> {
    let clf = estimator.as_classifier()?;
    let tree = clf.tree()?;
    if row.len() != tree.n_features {
        return Err(DecodeError::InvalidFeatureVector {
            expected: tree.n_features,
            actual: row.len(),
        });
    }
    Ok(render_decision_info(tree, row, config))
}

/// Leaf score vector after optional normalization and rounding.
fn leaf_scores(tree: &Tree, node: usize, normalize: bool, precision: Option<i32>) -> Vec<f64> {
    let mut scores = tree.value[node].clone();
    if normalize {
        scores = normalize_l1(&scores);
    }
    scores.maybe_round(precision)
}

fn render_tree_info(tree: &Tree, config: &TreeInfoConfig) -> Result<String, DecodeError> {
    let annotations = tree.annotate();
    let mut lines: Vec<String> = Vec::new();

    let mut previous_leaf = false;
    let mut previous_depth = 0_usize;

    for i in 0..tree.node_count() {
        let node_depth = annotations.depth[i];
        let indent = " ".repeat(config.tab_size * node_depth);

        if annotations.is_leaf[i] {
            // Returning from a deeper subtree, set the leaves apart.
            if previous_leaf && previous_depth > 0 && previous_depth > node_depth {
                lines.push(String::new());
            }

            let scores = leaf_scores(tree, i, config.normalize, config.precision);
            let label = match config.label_index {
                Some(label_index) => {
                    let score = scores.get(label_index).ok_or(DecodeError::LabelIndexOutOfBounds {
                        label_index,
                        n_classes: scores.len(),
                    })?;
                    format!("score = {}", fmt_float(*score))
                }
                None => format!("scores = {}", fmt_scores(&scores)),
            };
            lines.push(format!("{indent}node={i} left node: {label}"));

            previous_depth = node_depth;
            previous_leaf = true;
        } else {
            if previous_leaf {
                previous_leaf = false;
                lines.push(String::new());
            }

            let feature = tree.feature[i];
            let cutoff = tree.threshold[i].maybe_round(config.precision);
            let name = match config.names.get(&feature) {
                Some(name) => name.clone(),
                None => format!("feature {feature}"),
            };
            lines.push(format!(
                "{indent}node={i}: go to node {left} if {name} <= {cutoff} else to node {right}.",
                left = tree.left[i],
                cutoff = fmt_float(cutoff),
                right = tree.right[i],
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn render_decision_info(tree: &Tree, row: &[f64], config: &DecisionInfoConfig) -> String {
    let indent = " ".repeat(config.tab_size);
    let mut lines = vec!["Decision Path for Tree:".to_string()];

    let mut node = 0;
    loop {
        if tree.is_leaf(node) {
            let scores = leaf_scores(tree, node, true, config.precision);
            lines.push(format!(
                "{indent}Decision ID Node {node} : Scores = {}",
                fmt_scores(&scores)
            ));
            break;
        }

        let feature = tree.feature[node];
        let threshold = tree.threshold[node];
        // Branch on the raw values, display the rounded ones.
        let (rel_op, next) = if row[feature] <= threshold {
            ("<=", tree.left[node])
        } else {
            (">", tree.right[node])
        };
        let name = match config.names.get(&feature) {
            Some(name) => name.clone(),
            None => format!("Feature {feature}"),
        };
        lines.push(format!(
            "{indent}Decision ID Node {node} : {name} Score = {value} {rel_op} {cutoff}",
            value = fmt_float(row[feature].maybe_round(config.precision)),
            cutoff = fmt_float(threshold.maybe_round(config.precision)),
        ));
        node = next;
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
