//! Decision forest model artifacts.
//!
//! A trained heading model is shipped as a versioned JSON bundle holding the
//! feature column order used at training time, the label encoder (index to
//! label string), and the fitted trees:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "feature_columns": ["font_size", "is_bold", "y_position", "..."],
//!   "labels": ["H1", "H2", "H3", "O", "title"],
//!   "trees": [
//!     { "nodes": [
//!         { "kind": "split", "feature": 0, "threshold": 15.5, "left": 1, "right": 2 },
//!         { "kind": "leaf", "values": [0, 0, 0, 12, 0] },
//!         { "kind": "leaf", "values": [9, 1, 0, 0, 2] }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Prediction walks every tree (`x[feature] <= threshold` goes left), sums
//! the normalized leaf vectors and returns the arg-max class.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Artifact format understood by this build.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Serialized form of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact format version
    pub format_version: u32,
    /// Feature column names, in the order trees index them
    pub feature_columns: Vec<String>,
    /// Class labels, indexed by class id
    pub labels: Vec<String>,
    /// Fitted trees
    pub trees: Vec<DecisionTree>,
}

/// One fitted tree; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Nodes in arena order
    pub nodes: Vec<TreeNode>,
}

/// A tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node
    Split {
        /// Feature column index
        feature: usize,
        /// Values at or below go left
        threshold: f32,
        /// Left child index
        left: usize,
        /// Right child index
        right: usize,
    },
    /// Terminal node with per-class weights
    Leaf {
        /// One weight per label
        values: Vec<f32>,
    },
}

/// A validated, ready-to-run decision forest.
#[derive(Debug, Clone)]
pub struct ForestModel {
    artifact: ModelArtifact,
}

impl ForestModel {
    /// Load and validate a model artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, is not a model artifact,
    /// has an unsupported version, or references nodes, features or classes
    /// that do not exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Model(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse and validate a model artifact from JSON.
    pub fn from_json(data: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(data)
            .map_err(|e| Error::Model(format!("Failed to parse model artifact: {}", e)))?;
        Self::from_artifact(artifact)
    }

    /// Validate an in-memory artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.format_version != MODEL_FORMAT_VERSION {
            return Err(Error::Model(format!(
                "Unsupported model format version {} (expected {})",
                artifact.format_version, MODEL_FORMAT_VERSION
            )));
        }
        if artifact.labels.is_empty() {
            return Err(Error::Model("Model has no labels".to_string()));
        }
        if artifact.trees.is_empty() {
            return Err(Error::Model("Model has no trees".to_string()));
        }

        let n_features = artifact.feature_columns.len();
        let n_labels = artifact.labels.len();

        for (t, tree) in artifact.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(Error::Model(format!("Tree {} is empty", t)));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= n_features {
                            return Err(Error::Model(format!(
                                "Tree {} node {} uses feature {} of {}",
                                t, n, feature, n_features
                            )));
                        }
                        if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                            return Err(Error::Model(format!(
                                "Tree {} node {} has a child out of range",
                                t, n
                            )));
                        }
                        if !threshold.is_finite() {
                            return Err(Error::Model(format!(
                                "Tree {} node {} has a non-finite threshold",
                                t, n
                            )));
                        }
                    }
                    TreeNode::Leaf { values } => {
                        if values.len() != n_labels {
                            return Err(Error::Model(format!(
                                "Tree {} leaf {} has {} values for {} labels",
                                t,
                                n,
                                values.len(),
                                n_labels
                            )));
                        }
                    }
                }
            }
        }

        Ok(Self { artifact })
    }

    /// Feature columns in training order.
    pub fn feature_columns(&self) -> &[String] {
        &self.artifact.feature_columns
    }

    /// Class labels.
    pub fn labels(&self) -> &[String] {
        &self.artifact.labels
    }

    /// Number of trees.
    pub fn tree_count(&self) -> usize {
        self.artifact.trees.len()
    }

    /// Predict the class index for one encoded row.
    pub fn predict(&self, row: &[f32]) -> Result<usize> {
        if row.len() != self.artifact.feature_columns.len() {
            return Err(Error::Classification(format!(
                "Expected {} features, got {}",
                self.artifact.feature_columns.len(),
                row.len()
            )));
        }
        if let Some(i) = row.iter().position(|v| !v.is_finite()) {
            return Err(Error::Classification(format!(
                "Feature '{}' is not finite",
                self.artifact.feature_columns[i]
            )));
        }

        let mut votes = vec![0.0f32; self.artifact.labels.len()];
        for tree in &self.artifact.trees {
            let leaf = walk(tree, row)?;
            let total: f32 = leaf.iter().sum();
            if total > 0.0 {
                for (vote, value) in votes.iter_mut().zip(leaf) {
                    *vote += value / total;
                }
            }
        }

        // First maximum wins, matching arg-max over class order
        let mut best = 0;
        for (i, vote) in votes.iter().enumerate() {
            if *vote > votes[best] {
                best = i;
            }
        }
        Ok(best)
    }

    /// Predict the label string for one encoded row.
    pub fn predict_label(&self, row: &[f32]) -> Result<&str> {
        let class = self.predict(row)?;
        Ok(self.artifact.labels[class].as_str())
    }
}

/// Walk a tree to its leaf. Bounded by the node count so a cyclic tree
/// errors out instead of looping.
fn walk<'a>(tree: &'a DecisionTree, row: &[f32]) -> Result<&'a [f32]> {
    let mut index = 0;
    for _ in 0..=tree.nodes.len() {
        match &tree.nodes[index] {
            TreeNode::Leaf { values } => return Ok(values.as_slice()),
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                index = if row[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
        }
    }
    Err(Error::Classification("Tree does not terminate".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> ModelArtifact {
        ModelArtifact {
            format_version: MODEL_FORMAT_VERSION,
            feature_columns: vec!["font_size".to_string()],
            labels: vec!["H1".to_string(), "O".to_string()],
            trees: vec![DecisionTree {
                nodes: vec![
                    TreeNode::Split {
                        feature: 0,
                        threshold: 15.0,
                        left: 1,
                        right: 2,
                    },
                    TreeNode::Leaf {
                        values: vec![0.0, 10.0],
                    },
                    TreeNode::Leaf {
                        values: vec![8.0, 2.0],
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_predict_stump() {
        let model = ForestModel::from_artifact(stump()).unwrap();
        assert_eq!(model.predict_label(&[12.0]).unwrap(), "O");
        assert_eq!(model.predict_label(&[15.0]).unwrap(), "O");
        assert_eq!(model.predict_label(&[20.0]).unwrap(), "H1");
    }

    #[test]
    fn test_forest_votes_are_summed() {
        let mut artifact = stump();
        // Second tree always says H1 weakly; first tree dominates for small text
        artifact.trees.push(DecisionTree {
            nodes: vec![TreeNode::Leaf {
                values: vec![0.6, 0.4],
            }],
        });
        let model = ForestModel::from_artifact(artifact).unwrap();
        assert_eq!(model.tree_count(), 2);
        // Tree 1: O=1.0; tree 2: H1=0.6, O=0.4 -> O wins
        assert_eq!(model.predict_label(&[10.0]).unwrap(), "O");
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let json = serde_json::to_string(&stump()).unwrap();
        assert!(json.contains(r#""kind":"split""#));
        assert!(json.contains(r#""kind":"leaf""#));
        let model = ForestModel::from_json(&json).unwrap();
        assert_eq!(model.labels(), &["H1".to_string(), "O".to_string()]);
    }

    #[test]
    fn test_rejects_bad_version() {
        let mut artifact = stump();
        artifact.format_version = 99;
        let err = ForestModel::from_artifact(artifact).unwrap_err();
        assert!(err.to_string().contains("Unsupported model format"));
    }

    #[test]
    fn test_rejects_dangling_child() {
        let mut artifact = stump();
        artifact.trees[0].nodes[0] = TreeNode::Split {
            feature: 0,
            threshold: 1.0,
            left: 1,
            right: 7,
        };
        assert!(ForestModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_rejects_unknown_feature_index() {
        let mut artifact = stump();
        artifact.trees[0].nodes[0] = TreeNode::Split {
            feature: 3,
            threshold: 1.0,
            left: 1,
            right: 2,
        };
        assert!(ForestModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_rejects_leaf_width_mismatch() {
        let mut artifact = stump();
        artifact.trees[0].nodes[1] = TreeNode::Leaf { values: vec![1.0] };
        assert!(ForestModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_cyclic_tree_errors() {
        let mut artifact = stump();
        artifact.trees[0].nodes[0] = TreeNode::Split {
            feature: 0,
            threshold: 100.0,
            left: 0,
            right: 2,
        };
        let model = ForestModel::from_artifact(artifact).unwrap();
        assert!(matches!(model.predict(&[1.0]), Err(Error::Classification(_))));
    }

    #[test]
    fn test_non_finite_features_error() {
        let model = ForestModel::from_artifact(stump()).unwrap();
        assert!(matches!(
            model.predict(&[f32::NAN]),
            Err(Error::Classification(_))
        ));
        assert!(model.predict(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ForestModel::load_from_file("nonexistent-model.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_garbage() {
        assert!(matches!(
            ForestModel::from_json("not a model"),
            Err(Error::Model(_))
        ));
    }
}
