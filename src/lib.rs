//! Veracity - fake-news corpus preparation and classification
//!
//! A two-phase batch pipeline:
//! - [`corpus`] cleans, deduplicates, and splits the raw ISOT article
//!   sources into persisted train/val/test partitions
//! - [`training`] fits a TF-IDF + Multinomial Naive Bayes classifier on a
//!   named dataset (the local ISOT partitions or the LIAR2 statement
//!   corpus fetched from the HuggingFace Hub) and reports test metrics
//!   plus cross-validated accuracy
//!
//! # Modules
//! - [`text`] - text normalization (cleaning, token filters, stem/lemma)
//! - [`corpus`] - the preprocessor: raw sources to partition files
//! - [`dataset`] - trainer-side loaders for the named datasets
//! - [`features`] - TF-IDF document-term weighting
//! - [`training`] - Naive Bayes, K-Fold CV, metrics

pub mod error;

pub mod corpus;
pub mod dataset;
pub mod features;
pub mod text;
pub mod training;

pub use error::{Result, VeracityError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Result, VeracityError};

    pub use crate::corpus::{Article, CorpusBuilder, CorpusConfig, CorpusSummary};
    pub use crate::dataset::{DatasetName, DatasetSplits, LoaderConfig, Split};
    pub use crate::features::TfidfVectorizer;
    pub use crate::text::{ReduceStrategy, TextNormalizer};
    pub use crate::training::{
        train_and_evaluate, ClassificationReport, CvResults, EvalReport, KFold, MultinomialNb,
        TrainerConfig,
    };
}
