//! Estimator kinds accepted at the API boundary.
//!
//! The decoders only understand classification trees, but the whole tree
//! family is modeled as a sum type so additional kinds can be supported
//! later without changing the entry-point signatures.
use crate::errors::DecodeError;
use crate::tree::Tree;
use serde::{Deserialize, Serialize};

/// A fitted (or not yet fitted) decision-tree classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    /// The learned tree structure, `None` until fitting.
    pub tree: Option<Tree>,
}

impl DecisionTreeClassifier {
    /// Create an unfitted classifier.
    pub fn new() -> Self {
        DecisionTreeClassifier { tree: None }
    }

    /// Wrap an already-built tree as a fitted classifier.
    pub fn from_tree(tree: Tree) -> Self {
        DecisionTreeClassifier { tree: Some(tree) }
    }

    /// Whether the estimator holds a tree structure.
    pub fn fitted(&self) -> bool {
        self.tree.is_some()
    }

    /// Borrow the fitted tree, failing when the estimator is unfitted.
    pub fn tree(&self) -> Result<&Tree, DecodeError> {
        self.tree
            .as_ref()
            .ok_or_else(|| DecodeError::NotFitted("DecisionTreeClassifier".to_string()))
    }
}

/// A decision-tree regressor. Recognized but not yet decodable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    pub tree: Option<Tree>,
}

/// An extremely-randomized classification tree. Recognized but not yet
/// decodable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraTreeClassifier {
    pub tree: Option<Tree>,
}

/// An extremely-randomized regression tree. Recognized but not yet
/// decodable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraTreeRegressor {
    pub tree: Option<Tree>,
}

/// The tree-estimator family. Only [`Estimator::DecisionTreeClassifier`]
/// is currently supported by the decoders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Estimator {
    DecisionTreeClassifier(DecisionTreeClassifier),
    DecisionTreeRegressor(DecisionTreeRegressor),
    ExtraTreeClassifier(ExtraTreeClassifier),
    ExtraTreeRegressor(ExtraTreeRegressor),
}

impl Estimator {
    /// Name of the estimator kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::DecisionTreeClassifier(_) => "DecisionTreeClassifier",
            Estimator::DecisionTreeRegressor(_) => "DecisionTreeRegressor",
            Estimator::ExtraTreeClassifier(_) => "ExtraTreeClassifier",
            Estimator::ExtraTreeRegressor(_) => "ExtraTreeRegressor",
        }
    }

    /// Check that this is an estimator kind the decoders support.
    pub fn as_classifier(&self) -> Result<&DecisionTreeClassifier, DecodeError> {
        match self {
            Estimator::DecisionTreeClassifier(clf) => Ok(clf),
            _ => Err(DecodeError::UnsupportedModel),
        }
    }
}

impl From<DecisionTreeClassifier> for Estimator {
    fn from(clf: DecisionTreeClassifier) -> Self {
        Estimator::DecisionTreeClassifier(clf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::iris_tree;

    #[test]
    fn test_as_classifier() {
        let est: Estimator = DecisionTreeClassifier::from_tree(iris_tree()).into();
        assert!(est.as_classifier().is_ok());

        let unsupported = [
            Estimator::DecisionTreeRegressor(DecisionTreeRegressor::default()),
            Estimator::ExtraTreeClassifier(ExtraTreeClassifier::default()),
            Estimator::ExtraTreeRegressor(ExtraTreeRegressor::default()),
        ];
        for est in unsupported {
            let err = est.as_classifier().unwrap_err();
            assert!(err
                .to_string()
                .starts_with("Function support is only implemented for"));
        }
    }

    #[test]
    fn test_unfitted() {
        let clf = DecisionTreeClassifier::new();
        assert!(!clf.fitted());
        let err = clf.tree().unwrap_err();
        assert!(err.to_string().contains("instance is not fitted yet"));
    }

    #[test]
    fn test_fitted_tree() {
        let clf = DecisionTreeClassifier::from_tree(iris_tree());
        assert!(clf.fitted());
        assert_eq!(5, clf.tree().unwrap().node_count());
    }

    #[test]
    fn test_estimator_from_json() {
        let raw = r#"{
            "DecisionTreeClassifier": {
                "tree": {
                    "left": [1, 18446744073709551615, 18446744073709551615],
                    "right": [2, 18446744073709551615, 18446744073709551615],
                    "feature": [0, 0, 0],
                    "threshold": [2.5, 0.0, 0.0],
                    "value": [[5.0, 5.0], [5.0, 0.0], [0.0, 5.0]],
                    "n_features": 1
                }
            }
        }"#;
        let est: Estimator = serde_json::from_str(raw).unwrap();
        let clf = est.as_classifier().unwrap();
        assert_eq!(3, clf.tree().unwrap().node_count());
    }
}
