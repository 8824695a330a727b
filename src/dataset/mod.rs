//! Trainer-side dataset loading.
//!
//! Produces six aligned sequences (texts and labels for train/val/test)
//! for a named dataset: the locally preprocessed ISOT partitions, or the
//! externally hosted LIAR2 statement corpus.

pub mod isot;
pub mod liar2;

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, VeracityError};

/// The closed set of datasets the trainer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetName {
    Isot,
    Liar2,
}

impl FromStr for DatasetName {
    type Err = VeracityError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ISOT" => Ok(DatasetName::Isot),
            "LIAR2" => Ok(DatasetName::Liar2),
            other => Err(VeracityError::InvalidDataset(other.to_string())),
        }
    }
}

impl std::fmt::Display for DatasetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetName::Isot => write!(f, "ISOT"),
            DatasetName::Liar2 => write!(f, "LIAR2"),
        }
    }
}

/// One partition: texts and labels, positionally aligned.
#[derive(Debug, Clone)]
pub struct Split {
    pub texts: Vec<String>,
    pub labels: Vec<i64>,
}

/// All three partitions of a dataset. The trainer consumes train and test;
/// val is loaded alongside them but no training step reads it.
#[derive(Debug, Clone)]
pub struct DatasetSplits {
    pub train: Split,
    pub val: Split,
    pub test: Split,
}

/// Where to find each dataset on disk.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory holding the preprocessed ISOT partitions
    pub isot_dir: PathBuf,
    /// Local LIAR2 split directory; `None` fetches from the HuggingFace Hub
    pub liar2_dir: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            isot_dir: PathBuf::from("dataset"),
            liar2_dir: None,
        }
    }
}

/// Load the six aligned sequences for `name`.
pub fn load(name: DatasetName, config: &LoaderConfig) -> Result<DatasetSplits> {
    match name {
        DatasetName::Isot => isot::load(&config.isot_dir),
        DatasetName::Liar2 => liar2::load(config.liar2_dir.as_deref()),
    }
}

pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .map_err(|e| VeracityError::DataError(format!("{}: {e}", path.display())))?;

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(Into::into)
}

pub(crate) fn str_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df
        .column(name)
        .map_err(|_| VeracityError::DataError(format!("missing column `{name}`")))?;
    let values = column.as_materialized_series().str()?;

    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or("").to_string())
        .collect())
}

pub(crate) fn label_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let column = df
        .column(name)
        .map_err(|_| VeracityError::DataError(format!("missing column `{name}`")))?;
    let values = column.as_materialized_series().cast(&DataType::Int64)?;

    values
        .i64()?
        .into_iter()
        .map(|v| v.ok_or_else(|| VeracityError::DataError(format!("null label in `{name}`"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_name_parsing() {
        assert_eq!("ISOT".parse::<DatasetName>().unwrap(), DatasetName::Isot);
        assert_eq!("LIAR2".parse::<DatasetName>().unwrap(), DatasetName::Liar2);
    }

    #[test]
    fn test_unknown_dataset_rejected() {
        let err = "liar2".parse::<DatasetName>().unwrap_err();
        assert!(matches!(err, VeracityError::InvalidDataset(_)));
    }
}
