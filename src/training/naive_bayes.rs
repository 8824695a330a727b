//! Multinomial Naive Bayes for term-weighted documents.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VeracityError};

/// Multinomial-event-model classifier with Laplace smoothing. Works on any
/// non-negative feature weighting (raw counts or TF-IDF).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    classes: Vec<i64>,
    class_log_priors: Vec<f64>,
    /// Per class, log P(term | class), indexed [class][feature]
    feature_log_probs: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            classes: Vec::new(),
            class_log_priors: Vec::new(),
            feature_log_probs: Vec::new(),
        }
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<i64>) -> Result<()> {
        let n_samples = x.nrows();
        let n_features = x.ncols();
        if n_samples != y.len() {
            return Err(VeracityError::TrainingError(format!(
                "feature rows ({n_samples}) and labels ({}) differ",
                y.len()
            )));
        }
        if n_samples == 0 {
            return Err(VeracityError::TrainingError(
                "cannot fit on an empty matrix".to_string(),
            ));
        }

        let mut classes: Vec<i64> = y.iter().copied().collect();
        classes.sort_unstable();
        classes.dedup();

        let mut class_log_priors = Vec::with_capacity(classes.len());
        let mut feature_log_probs = Vec::with_capacity(classes.len());

        for &class in &classes {
            let class_count = y.iter().filter(|&&label| label == class).count();
            class_log_priors.push((class_count as f64 / n_samples as f64).ln());

            let mut term_weights = vec![self.alpha; n_features];
            let mut total_weight = self.alpha * n_features as f64;
            for (row, &label) in x.rows().into_iter().zip(y.iter()) {
                if label == class {
                    for (j, &value) in row.iter().enumerate() {
                        let value = value.max(0.0);
                        term_weights[j] += value;
                        total_weight += value;
                    }
                }
            }

            feature_log_probs.push(
                term_weights
                    .iter()
                    .map(|&w| (w / total_weight).ln())
                    .collect(),
            );
        }

        self.classes = classes;
        self.class_log_priors = class_log_priors;
        self.feature_log_probs = feature_log_probs;
        Ok(())
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<i64>> {
        let scores = self.joint_log_likelihood(x)?;

        let predictions = scores
            .rows()
            .into_iter()
            .map(|row| {
                let best = row
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.total_cmp(b))
                    .map(|(idx, _)| idx)
                    .unwrap_or(0);
                self.classes[best]
            })
            .collect();

        Ok(predictions)
    }

    fn joint_log_likelihood(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if self.classes.is_empty() {
            return Err(VeracityError::TrainingError(
                "model not fitted".to_string(),
            ));
        }
        if x.ncols() != self.feature_log_probs[0].len() {
            return Err(VeracityError::TrainingError(format!(
                "expected {} features, got {}",
                self.feature_log_probs[0].len(),
                x.ncols()
            )));
        }

        let mut scores = Array2::zeros((x.nrows(), self.classes.len()));
        for (i, row) in x.rows().into_iter().enumerate() {
            for (k, log_probs) in self.feature_log_probs.iter().enumerate() {
                let likelihood: f64 = row
                    .iter()
                    .zip(log_probs.iter())
                    .map(|(&value, &log_p)| value * log_p)
                    .sum();
                scores[[i, k]] = self.class_log_priors[k] + likelihood;
            }
        }

        Ok(scores)
    }
}
