//! Corpus preparation: reads the two raw article sources, cleans and
//! normalizes them, deduplicates, and persists train/val/test partitions.

mod builder;
mod split;

pub use builder::{drop_duplicate_rows, CorpusBuilder, CorpusSummary};
pub use split::train_test_split;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::text::ReduceStrategy;

/// One cleaned article row. Ids are sequential within each raw source and
/// are not rekeyed after concatenation, so a fabricated and a genuine
/// article can share an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// 0 = fabricated, 1 = genuine
    pub label: i64,
}

/// Configuration for a corpus build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Raw fabricated-article source (needs `title` and `text` columns)
    pub fake_path: PathBuf,
    /// Raw genuine-article source (needs `title` and `text` columns)
    pub true_path: PathBuf,
    /// Directory receiving `train.csv`, `val.csv`, `test.csv`
    pub output_dir: PathBuf,
    /// Token reduction strategy for the whole build
    pub strategy: ReduceStrategy,
    /// Seed for both split stages
    pub seed: u64,
    /// Fraction of the cleaned corpus held out as test
    pub test_fraction: f64,
    /// Fraction of the remainder held out as validation
    pub val_fraction: f64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            fake_path: PathBuf::from("dataset/Fake.csv"),
            true_path: PathBuf::from("dataset/True.csv"),
            output_dir: PathBuf::from("dataset"),
            strategy: ReduceStrategy::Stem,
            seed: 42,
            test_fraction: 0.025,
            val_fraction: 0.10,
        }
    }
}

impl CorpusConfig {
    pub fn with_strategy(mut self, strategy: ReduceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_sources(mut self, fake: impl Into<PathBuf>, genuine: impl Into<PathBuf>) -> Self {
        self.fake_path = fake.into();
        self.true_path = genuine.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
