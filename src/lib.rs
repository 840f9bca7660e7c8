// Modules
pub mod errors;
pub mod estimator;
pub mod render;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use errors::DecodeError;
pub use estimator::{DecisionTreeClassifier, Estimator};
pub use render::{get_decision_info, get_tree_info, DecisionInfoConfig, TreeInfoConfig};
pub use tree::{Tree, LEAF};
