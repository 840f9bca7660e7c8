//! Errors
//!
//! Custom error types used throughout the `tree-decode` crate.
use thiserror::Error;

/// Errors that can occur while decoding a tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The estimator is not one of the supported tree kinds.
    #[error("Function support is only implemented for DecisionTreeClassifier. Support for other trees is forthcoming.")]
    UnsupportedModel,
    /// The estimator has no internal tree structure yet.
    #[error("This {0} instance is not fitted yet. Call fit with appropriate arguments before using this estimator.")]
    NotFitted(String),
    /// A label index was requested beyond the number of classes at a leaf.
    #[error("Label index {label_index} is out of bounds for a tree with {n_classes} classes.")]
    LabelIndexOutOfBounds { label_index: usize, n_classes: usize },
    /// The feature vector does not match the number of features the tree was fitted on.
    #[error("Feature vector has {actual} entries, but the tree was fitted on {expected} features.")]
    InvalidFeatureVector { expected: usize, actual: usize },
}
