//! Pre-trained tree-ensemble crop classifier
//!
//! The artifact stores each decision tree as a flat, pre-order list of nodes.
//! Inputs are rounded to single precision before the walk, as scikit-learn
//! does, and a split sends a sample left when `f32(x[feature]) <= threshold`
//! with the threshold kept in double precision. Leaves carry per-class
//! weights (training sample counts or probabilities). The forest prediction
//! averages the normalized leaf distributions over all trees and picks the
//! class with the highest mean probability. On a tie the class listed first
//! wins.
//!
//! A fitted `RandomForestClassifier` exports to this format as follows:
//!
//! - `n_features` is `n_features_in_` and `classes` is `classes_`.
//! - Each entry of `estimators_` becomes one tree. For node `i` of
//!   `est.tree_`, a node with `children_left[i] == -1` is a leaf whose
//!   `value` is `tree_.value[i][0]`.
//! - Any other node is a split with `feature = tree_.feature[i]`,
//!   `threshold = tree_.threshold[i]`, `left = children_left[i]` and
//!   `right = children_right[i]`.
//!
//! scikit-learn numbers nodes depth first, so node ids can be used as
//! indices unchanged.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::{ScaledFeatures, FEATURE_COUNT};

use super::{artifact, ClassifierSummary, CropClassifier};
use crate::error::{ArtifactError, InferenceError};

/// On-disk node of a decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNodeParams {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

/// On-disk decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeParams {
    pub nodes: Vec<TreeNodeParams>,
}

/// On-disk form of a fitted classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsembleParams {
    /// Number of input features the model was fitted on
    pub n_features: usize,
    /// Class label for each position of a leaf's value vector
    pub classes: Vec<i64>,
    /// Fitted trees; a plain decision tree is an ensemble of one
    pub estimators: Vec<DecisionTreeParams>,
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        probabilities: Vec<f64>,
    },
}

#[derive(Debug, Clone)]
struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Class distribution of the leaf this sample falls into.
    ///
    /// `x` must already be rounded to single precision. Children always sit
    /// after their parent, so the walk terminates.
    fn leaf_for(&self, x: &[f64; FEATURE_COUNT]) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { probabilities } => return probabilities,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if x[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// Forest of decision trees with soft voting
#[derive(Debug, Clone)]
pub struct TreeEnsembleClassifier {
    classes: Vec<i64>,
    trees: Vec<DecisionTree>,
}

impl TreeEnsembleClassifier {
    /// Load a classifier artifact. Any problem with the file is an `ArtifactError`.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let params: TreeEnsembleParams = artifact::read_json(path)?;
        Self::from_params(params).map_err(|reason| ArtifactError::invalid(path, reason))
    }

    /// Validate fitted parameters
    pub fn from_params(params: TreeEnsembleParams) -> Result<Self, String> {
        if params.n_features != FEATURE_COUNT {
            return Err(format!(
                "model expects {} features, the form provides {}",
                params.n_features, FEATURE_COUNT
            ));
        }
        if params.classes.is_empty() {
            return Err("model has no classes".to_string());
        }
        let unique: HashSet<i64> = params.classes.iter().copied().collect();
        if unique.len() != params.classes.len() {
            return Err("model class labels are not unique".to_string());
        }
        if params.estimators.is_empty() {
            return Err("model has no estimators".to_string());
        }

        let n_classes = params.classes.len();
        let trees = params
            .estimators
            .into_iter()
            .enumerate()
            .map(|(tree_index, tree)| {
                build_tree(tree, n_classes).map_err(|reason| format!("tree {}: {}", tree_index, reason))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            classes: params.classes,
            trees,
        })
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn n_estimators(&self) -> usize {
        self.trees.len()
    }

    /// Mean class probabilities over all trees, in `classes()` order
    pub fn predict_proba(&self, features: &ScaledFeatures) -> Result<Vec<f64>, InferenceError> {
        let x = single_precision(features)?;

        let mut totals = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (total, p) in totals.iter_mut().zip(tree.leaf_for(&x)) {
                *total += p;
            }
        }

        let n_trees = self.trees.len() as f64;
        for total in totals.iter_mut() {
            *total /= n_trees;
        }
        Ok(totals)
    }
}

/// Round every input to `f32`. Values outside the `f32` range are rejected.
fn single_precision(features: &ScaledFeatures) -> Result<[f64; FEATURE_COUNT], InferenceError> {
    let mut x = [0.0; FEATURE_COUNT];
    for (index, &value) in features.values().iter().enumerate() {
        let rounded = f64::from(value as f32);
        if !rounded.is_finite() {
            return Err(InferenceError::NonFiniteInput { index, value });
        }
        x[index] = rounded;
    }
    Ok(x)
}

fn build_tree(params: DecisionTreeParams, n_classes: usize) -> Result<DecisionTree, String> {
    if params.nodes.is_empty() {
        return Err("tree has no nodes".to_string());
    }

    let n_nodes = params.nodes.len();
    let nodes = params
        .nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| match node {
            TreeNodeParams::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if feature >= FEATURE_COUNT {
                    return Err(format!("node {} splits on unknown feature {}", index, feature));
                }
                if !threshold.is_finite() {
                    return Err(format!("node {} has a non-finite threshold", index));
                }
                for child in [left, right] {
                    if child <= index || child >= n_nodes {
                        return Err(format!(
                            "node {} points to invalid child {}",
                            index, child
                        ));
                    }
                }
                Ok(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                })
            }
            TreeNodeParams::Leaf { value } => {
                if value.len() != n_classes {
                    return Err(format!(
                        "leaf {} has {} class weights, expected {}",
                        index,
                        value.len(),
                        n_classes
                    ));
                }
                if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(format!("leaf {} has a negative or non-finite weight", index));
                }
                let sum: f64 = value.iter().sum();
                if sum <= 0.0 {
                    return Err(format!("leaf {} has no weight", index));
                }
                Ok(Node::Leaf {
                    probabilities: value.iter().map(|w| w / sum).collect(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DecisionTree { nodes })
}

impl CropClassifier for TreeEnsembleClassifier {
    fn predict(&self, features: &ScaledFeatures) -> Result<i64, InferenceError> {
        let probabilities = self.predict_proba(features)?;

        let mut best: Option<(usize, f64)> = None;
        for (index, &p) in probabilities.iter().enumerate() {
            if best.map_or(true, |(_, top)| p > top) {
                best = Some((index, p));
            }
        }

        let (index, _) = best.ok_or(InferenceError::EmptyVote)?;
        Ok(self.classes[index])
    }

    fn summary(&self) -> ClassifierSummary {
        ClassifierSummary {
            classes: self.classes.len(),
            estimators: self.trees.len(),
        }
    }
}
