//! Regression-forest scorer deserialized from a JSON artifact.
//!
//! The artifact is exported offline from the training run: one node-array
//! block per tree, in the style of sklearn's tree internals. Prediction is
//! the mean of the per-tree outputs.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::scoring::{RankingScorer, ScoreInput, FEATURE_SCHEMA};

/// A single binary decision tree in node-array form. Leaves carry -1 in both
/// child slots and their output in `value`.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    pub value: Vec<f64>,
}

impl DecisionTree {
    fn predict(&self, features: &[f64; 3]) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left < 0 {
                return self.value[node];
            }
            node = if features[self.feature[node] as usize] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }

    /// Structural validation, so `predict` can walk without bounds checks
    /// failing mid-request.
    fn validate(&self, index: usize) -> Result<()> {
        let len = self.feature.len();
        if len == 0 {
            bail!("tree {index} has no nodes");
        }
        if [
            self.threshold.len(),
            self.children_left.len(),
            self.children_right.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&l| l != len)
        {
            bail!("tree {index} has mismatched node array lengths");
        }
        for node in 0..len {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if (left < 0) != (right < 0) {
                bail!("tree {index} node {node} has a single child");
            }
            if left >= 0 {
                if left as usize >= len || right as usize >= len {
                    bail!("tree {index} node {node} has an out-of-range child");
                }
                let feature = self.feature[node];
                if !(0..FEATURE_SCHEMA.len() as i32).contains(&feature) {
                    bail!("tree {index} node {node} splits on unknown feature {feature}");
                }
            }
        }
        Ok(())
    }
}

/// The full pretrained artifact: feature schema plus the tree ensemble.
#[derive(Debug, Clone, Deserialize)]
pub struct RegressionForest {
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl RegressionForest {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let forest: RegressionForest =
            serde_json::from_slice(bytes).context("failed to parse forest artifact")?;
        forest.validate()?;
        Ok(forest)
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names != FEATURE_SCHEMA {
            bail!(
                "artifact feature schema {:?} does not match expected {:?}",
                self.feature_names,
                FEATURE_SCHEMA
            );
        }
        if self.trees.is_empty() {
            bail!("artifact contains no trees");
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(())
    }

    pub fn predict(&self, features: &[f64; 3]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        total / self.trees.len() as f64
    }
}

/// `RankingScorer` backed by a loaded forest artifact.
pub struct ForestScorer {
    forest: RegressionForest,
}

impl ForestScorer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read model artifact {}", path.display()))?;
        Ok(Self {
            forest: RegressionForest::from_json(&bytes)?,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.forest.trees.len()
    }
}

impl RankingScorer for ForestScorer {
    fn predict(&self, input: &ScoreInput) -> f64 {
        self.forest.predict(&input.features())
    }

    fn backend(&self) -> &'static str {
        "forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // One root split on experience (feature 1): <= 5.0 scores 40, else 80.
    fn stump() -> serde_json::Value {
        json!({
            "feature": [1, -2, -2],
            "threshold": [5.0, 0.0, 0.0],
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "value": [0.0, 40.0, 80.0]
        })
    }

    fn leaf(value: f64) -> serde_json::Value {
        json!({
            "feature": [-2],
            "threshold": [0.0],
            "children_left": [-1],
            "children_right": [-1],
            "value": [value]
        })
    }

    fn forest_from(trees: Vec<serde_json::Value>) -> Result<RegressionForest> {
        let doc = json!({
            "feature_names": ["education", "experience", "skills"],
            "trees": trees
        });
        RegressionForest::from_json(doc.to_string().as_bytes())
    }

    #[test]
    fn test_stump_routes_on_threshold() {
        let forest = forest_from(vec![stump()]).unwrap();
        assert_eq!(forest.predict(&[1.0, 2.0, 3.0]), 40.0);
        assert_eq!(forest.predict(&[1.0, 9.0, 3.0]), 80.0);
        // Boundary goes left.
        assert_eq!(forest.predict(&[1.0, 5.0, 3.0]), 40.0);
    }

    #[test]
    fn test_prediction_is_mean_of_trees() {
        let forest = forest_from(vec![leaf(10.0), leaf(30.0)]).unwrap();
        assert_eq!(forest.predict(&[0.0, 0.0, 0.0]), 20.0);
    }

    #[test]
    fn test_wrong_schema_is_rejected() {
        let doc = json!({
            "feature_names": ["experience", "education", "skills"],
            "trees": [leaf(1.0)]
        });
        assert!(RegressionForest::from_json(doc.to_string().as_bytes()).is_err());
    }

    #[test]
    fn test_empty_forest_is_rejected() {
        assert!(forest_from(vec![]).is_err());
    }

    #[test]
    fn test_out_of_range_child_is_rejected() {
        let bad = json!({
            "feature": [0],
            "threshold": [1.0],
            "children_left": [5],
            "children_right": [6],
            "value": [0.0]
        });
        assert!(forest_from(vec![bad]).is_err());
    }

    #[test]
    fn test_forest_scorer_uses_input_features() {
        let forest = forest_from(vec![stump()]).unwrap();
        let scorer = ForestScorer { forest };
        let junior = ScoreInput {
            education_code: 1,
            experience: 2.0,
            skill_count: 3,
        };
        let senior = ScoreInput {
            education_code: 1,
            experience: 9.0,
            skill_count: 3,
        };
        assert_eq!(scorer.predict(&junior), 40.0);
        assert_eq!(scorer.predict(&senior), 80.0);
        assert_eq!(scorer.backend(), "forest");
    }
}
