//! Seeded K-Fold cross-validation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VeracityError};

/// K-Fold splitter. Each sample lands in exactly one test fold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KFold {
    pub n_splits: usize,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: true,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate `(train_indices, test_indices)` pairs.
    pub fn split(&self, n_samples: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        if self.n_splits < 2 {
            return Err(VeracityError::TrainingError(
                "n_splits must be at least 2".to_string(),
            ));
        }
        if n_samples < self.n_splits {
            return Err(VeracityError::TrainingError(format!(
                "n_samples ({n_samples}) must be >= n_splits ({})",
                self.n_splits
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            indices.shuffle(&mut rng);
        }

        let base = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut splits = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for fold in 0..self.n_splits {
            let fold_size = if fold < remainder { base + 1 } else { base };
            let test: Vec<usize> = indices[start..start + fold_size].to_vec();
            let train: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[start + fold_size..].iter())
                .copied()
                .collect();
            splits.push((train, test));
            start += fold_size;
        }

        Ok(splits)
    }
}

/// Per-fold scores with their mean and standard deviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvResults {
    pub scores: Vec<f64>,
    pub mean: f64,
    pub std: f64,
}

impl CvResults {
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let n = scores.len().max(1) as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Self {
            scores,
            mean,
            std: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_partition_the_samples() {
        let kfold = KFold::new(5).with_seed(42);
        let splits = kfold.split(103).unwrap();
        assert_eq!(splits.len(), 5);

        let mut all_test: Vec<usize> = splits.iter().flat_map(|(_, t)| t.clone()).collect();
        all_test.sort_unstable();
        assert_eq!(all_test, (0..103).collect::<Vec<_>>());

        for (train, test) in &splits {
            assert_eq!(train.len() + test.len(), 103);
            assert!(test.iter().all(|i| !train.contains(i)));
        }
    }

    #[test]
    fn test_seeded_splits_are_reproducible() {
        let kfold = KFold::new(5).with_seed(7);
        assert_eq!(kfold.split(50).unwrap(), kfold.split(50).unwrap());
    }

    #[test]
    fn test_too_few_samples_rejected() {
        assert!(KFold::new(5).split(3).is_err());
    }

    #[test]
    fn test_cv_results_stats() {
        let results = CvResults::from_scores(vec![0.8, 1.0]);
        assert!((results.mean - 0.9).abs() < 1e-12);
        assert!((results.std - 0.1).abs() < 1e-12);
    }
}
