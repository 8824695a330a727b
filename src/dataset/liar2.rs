//! Loader for the LIAR2 statement corpus.
//!
//! LIAR2 ships pre-split on the HuggingFace Hub with a 6-point
//! truthfulness label. Only the `statement` and `label` fields are used;
//! the ordinal label is collapsed to binary at load time.

use std::path::{Path, PathBuf};

use crate::error::{Result, VeracityError};

use super::{label_column, read_csv, str_column, DatasetSplits, Split};

/// HuggingFace dataset repository holding the three split files.
pub const LIAR2_REPO: &str = "chengxuphd/liar2";

const TRAIN_FILE: &str = "train.csv";
const VAL_FILE: &str = "valid.csv";
const TEST_FILE: &str = "test.csv";

/// Collapse the 0–5 truthfulness scale to binary: 0 (pants-on-fire, false,
/// barely-true) stays false, everything above maps to true.
pub fn collapse_label(label: i64) -> i64 {
    if label <= 2 {
        0
    } else {
        1
    }
}

/// Load the three LIAR2 splits. With `local_dir` set, the split files are
/// read from there; otherwise they are fetched from the Hub (download and
/// caching are hf-hub's concern).
pub fn load(local_dir: Option<&Path>) -> Result<DatasetSplits> {
    let (train, val, test) = match local_dir {
        Some(dir) => (
            dir.join(TRAIN_FILE),
            dir.join(VAL_FILE),
            dir.join(TEST_FILE),
        ),
        None => fetch_from_hub()?,
    };

    Ok(DatasetSplits {
        train: load_split(&train)?,
        val: load_split(&val)?,
        test: load_split(&test)?,
    })
}

fn fetch_from_hub() -> Result<(PathBuf, PathBuf, PathBuf)> {
    let api = hf_hub::api::sync::Api::new()
        .map_err(|e| VeracityError::FetchError(format!("Hub API init failed: {e}")))?;
    let repo = api.dataset(LIAR2_REPO.to_string());

    let get = |file: &str| {
        repo.get(file)
            .map_err(|e| VeracityError::FetchError(format!("{LIAR2_REPO}/{file}: {e}")))
    };

    Ok((get(TRAIN_FILE)?, get(VAL_FILE)?, get(TEST_FILE)?))
}

fn load_split(path: &Path) -> Result<Split> {
    let df = read_csv(path)?;
    let texts = str_column(&df, "statement")?;
    let labels = label_column(&df, "label")?
        .into_iter()
        .map(collapse_label)
        .collect();

    Ok(Split { texts, labels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_is_monotonic() {
        let collapsed: Vec<i64> = (0..=5).map(collapse_label).collect();
        assert_eq!(collapsed, vec![0, 0, 0, 1, 1, 1]);
    }
}
