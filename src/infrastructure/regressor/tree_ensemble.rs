//! Decision tree ensemble artifact
//!
//! Matches what random forests and gradient boosted trees export: a list of
//! binary trees whose leaf outputs are averaged or summed.

use serde::{Deserialize, Serialize};

use crate::domain::prediction::{FeatureVector, Regressor, RegressorKind, FEATURE_COUNT};
use crate::domain::DomainError;

/// How per-tree outputs are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Random forest
    #[default]
    Mean,
    /// Gradient boosting
    Sum,
}

/// One node of a tree. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Children always sit after their parent, so every walk terminates.
    fn validate(&self, index: usize) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::validation(format!("tree {} has no nodes", index)));
        }

        for (position, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    return Err(DomainError::validation(format!(
                        "tree {} node {} splits on feature {}, model has {} features",
                        index, position, feature, FEATURE_COUNT
                    )));
                }

                for child in [left, right] {
                    if *child <= position || *child >= self.nodes.len() {
                        return Err(DomainError::validation(format!(
                            "tree {} node {} has invalid child index {}",
                            index, position, child
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn evaluate(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut position = 0;

        loop {
            match &self.nodes[position] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    position = if x[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// Artifact as written on disk, before the structural checks
#[derive(Deserialize)]
struct RawTreeEnsemble {
    #[serde(default)]
    aggregation: Aggregation,
    #[serde(default)]
    base_score: f64,
    trees: Vec<Tree>,
}

/// Only constructed through [`TreeEnsembleRegressor::new`] or deserialization,
/// both of which run the structural checks that `Tree::evaluate` relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTreeEnsemble")]
pub struct TreeEnsembleRegressor {
    aggregation: Aggregation,
    base_score: f64,
    trees: Vec<Tree>,
}

impl TryFrom<RawTreeEnsemble> for TreeEnsembleRegressor {
    type Error = DomainError;

    fn try_from(raw: RawTreeEnsemble) -> Result<Self, Self::Error> {
        Self::new(raw.aggregation, raw.base_score, raw.trees)
    }
}

impl TreeEnsembleRegressor {
    pub fn new(
        aggregation: Aggregation,
        base_score: f64,
        trees: Vec<Tree>,
    ) -> Result<Self, DomainError> {
        let regressor = Self {
            aggregation,
            base_score,
            trees,
        };
        regressor.validate()?;
        Ok(regressor)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.trees.is_empty() {
            return Err(DomainError::validation("tree ensemble has no trees"));
        }

        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(index, tree)| tree.validate(index))
    }
}

impl Regressor for TreeEnsembleRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError> {
        let x = features.as_array();
        let total: f64 = self.trees.iter().map(|tree| tree.evaluate(x)).sum();

        let combined = match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => total,
        };

        Ok(self.base_score + combined)
    }

    fn kind(&self) -> RegressorKind {
        RegressorKind::TreeEnsemble
    }
}
