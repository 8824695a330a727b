//! Corpus builder: the preprocessing pipeline from raw sources to
//! persisted partitions.

use polars::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::error::{Result, VeracityError};
use crate::text::TextNormalizer;

use super::{split::train_test_split, Article, CorpusConfig};

/// Row counts observed during a corpus build.
#[derive(Debug, Clone, Copy)]
pub struct CorpusSummary {
    pub n_fabricated_raw: usize,
    pub n_genuine_raw: usize,
    pub n_cleaned: usize,
    pub n_train: usize,
    pub n_val: usize,
    pub n_test: usize,
}

/// Builds the cleaned, deduplicated, split corpus from the two raw CSV
/// sources and writes the three partition files.
pub struct CorpusBuilder {
    config: CorpusConfig,
    normalizer: TextNormalizer,
}

impl CorpusBuilder {
    pub fn new(config: CorpusConfig) -> Result<Self> {
        let normalizer = TextNormalizer::new(config.strategy)?;
        Ok(Self { config, normalizer })
    }

    /// Run the full pipeline. Overwrites any existing partition files in
    /// the output directory.
    pub fn build(&self) -> Result<CorpusSummary> {
        info!(fake = %self.config.fake_path.display(), genuine = %self.config.true_path.display(), "reading raw sources");
        let fake_df = load_source(&self.config.fake_path)?;
        let true_df = load_source(&self.config.true_path)?;
        let n_fabricated_raw = fake_df.height();
        let n_genuine_raw = true_df.height();

        // Fabricated first, matching the order the partitions were
        // originally built in; dedup keeps first occurrence in this order.
        info!("normalizing titles and bodies");
        let mut articles = self.clean_source(&fake_df, 0, false)?;
        articles.extend(self.clean_source(&true_df, 1, true)?);

        articles.retain(|a| !a.body.is_empty() && !a.title.is_empty());
        let articles = drop_duplicate_rows(articles);
        let n_cleaned = articles.len();
        info!(n_cleaned, "cleaned and deduplicated");

        let (rest, test) = train_test_split(articles, self.config.test_fraction, self.config.seed)?;
        let (train, val) = train_test_split(rest, self.config.val_fraction, self.config.seed)?;

        std::fs::create_dir_all(&self.config.output_dir)?;
        write_partition(&self.config.output_dir.join("train.csv"), &train)?;
        write_partition(&self.config.output_dir.join("val.csv"), &val)?;
        write_partition(&self.config.output_dir.join("test.csv"), &test)?;
        info!(
            n_train = train.len(),
            n_val = val.len(),
            n_test = test.len(),
            out = %self.config.output_dir.display(),
            "partitions written"
        );

        Ok(CorpusSummary {
            n_fabricated_raw,
            n_genuine_raw,
            n_cleaned,
            n_train: train.len(),
            n_val: val.len(),
            n_test: test.len(),
        })
    }

    /// Turn one raw source into cleaned articles. Ids are sequential within
    /// the source starting at 0. Only genuine bodies get the dateline strip.
    fn clean_source(&self, df: &DataFrame, label: i64, genuine: bool) -> Result<Vec<Article>> {
        let titles = str_column(df, "title")?;
        let texts = str_column(df, "text")?;

        let articles = titles
            .into_iter()
            .zip(texts)
            .enumerate()
            .map(|(i, (title, text))| Article {
                id: i as i64,
                title: self.normalizer.normalize(&title, false),
                body: self.normalizer.normalize(&text, genuine),
                label,
            })
            .collect();

        Ok(articles)
    }
}

/// Remove rows whose body duplicates an earlier body, then rows whose title
/// duplicates an earlier title. First occurrence wins in both passes; a row
/// can be dropped by either pass independently. Idempotent.
pub fn drop_duplicate_rows(articles: Vec<Article>) -> Vec<Article> {
    let mut seen_bodies: HashSet<String> = HashSet::new();
    let by_body: Vec<Article> = articles
        .into_iter()
        .filter(|a| seen_bodies.insert(a.body.clone()))
        .collect();

    let mut seen_titles: HashSet<String> = HashSet::new();
    by_body
        .into_iter()
        .filter(|a| seen_titles.insert(a.title.clone()))
        .collect()
}

fn load_source(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .map_err(|e| VeracityError::DataError(format!("{}: {e}", path.display())))?;

    let reader = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(file);

    reader.finish().map_err(Into::into)
}

fn str_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df
        .column(name)
        .map_err(|_| VeracityError::DataError(format!("missing column `{name}`")))?;
    let values = column.as_materialized_series().str()?;

    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or("").to_string())
        .collect())
}

fn write_partition(path: &Path, articles: &[Article]) -> Result<()> {
    let mut df = df!(
        "id" => articles.iter().map(|a| a.id).collect::<Vec<i64>>(),
        "label" => articles.iter().map(|a| a.label).collect::<Vec<i64>>(),
        "title" => articles.iter().map(|a| a.title.clone()).collect::<Vec<String>>(),
        "body" => articles.iter().map(|a| a.body.clone()).collect::<Vec<String>>(),
    )?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64, title: &str, body: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            body: body.to_string(),
            label: 0,
        }
    }

    #[test]
    fn test_duplicate_bodies_dropped_keeping_first() {
        let rows = vec![
            article(0, "a", "same body"),
            article(1, "b", "same body"),
            article(2, "c", "other body"),
        ];
        let out = drop_duplicate_rows(rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 0);
        assert_eq!(out[1].id, 2);
    }

    #[test]
    fn test_duplicate_titles_dropped_after_bodies() {
        let rows = vec![
            article(0, "same title", "body one"),
            article(1, "same title", "body two"),
        ];
        let out = drop_duplicate_rows(rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 0);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let rows = vec![
            article(0, "t1", "b1"),
            article(1, "t1", "b2"),
            article(2, "t2", "b1"),
            article(3, "t3", "b3"),
        ];
        let once = drop_duplicate_rows(rows);
        let twice = drop_duplicate_rows(once.clone());
        assert_eq!(once, twice);
    }
}
