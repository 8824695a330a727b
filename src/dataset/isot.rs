//! Loader for the preprocessed ISOT partitions.

use std::path::Path;

use crate::error::Result;

use super::{label_column, read_csv, str_column, DatasetSplits, Split};

/// Read the three partition files from `dir`, combining title and body into
/// a single content field (`title + " " + body`). Labels are already binary.
pub fn load(dir: &Path) -> Result<DatasetSplits> {
    Ok(DatasetSplits {
        train: load_partition(&dir.join("train.csv"))?,
        val: load_partition(&dir.join("val.csv"))?,
        test: load_partition(&dir.join("test.csv"))?,
    })
}

fn load_partition(path: &Path) -> Result<Split> {
    let df = read_csv(path)?;
    let titles = str_column(&df, "title")?;
    let bodies = str_column(&df, "body")?;
    let labels = label_column(&df, "label")?;

    let texts = titles
        .into_iter()
        .zip(bodies)
        .map(|(title, body)| format!("{title} {body}"))
        .collect();

    Ok(Split { texts, labels })
}
