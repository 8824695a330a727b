//! Veracity - Main Entry Point
//!
//! Offline batch CLI: `preprocess` builds the cleaned ISOT partitions,
//! `train` fits and evaluates the classifier on a named dataset.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use veracity::corpus::{CorpusBuilder, CorpusConfig};
use veracity::dataset::{DatasetName, LoaderConfig};
use veracity::text::ReduceStrategy;
use veracity::training::{train_and_evaluate, TrainerConfig};

#[derive(Parser)]
#[command(name = "veracity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fake-news corpus preparation and classification")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean, deduplicate, and split the raw article sources
    Preprocess {
        /// Raw fabricated-article CSV
        #[arg(long, default_value = "dataset/Fake.csv")]
        fake: PathBuf,

        /// Raw genuine-article CSV
        #[arg(long = "true", default_value = "dataset/True.csv")]
        genuine: PathBuf,

        /// Output directory for train.csv / val.csv / test.csv
        #[arg(short, long, default_value = "dataset")]
        out: PathBuf,

        /// Lemmatize tokens instead of stemming them
        #[arg(long)]
        lemmatize: bool,

        /// Seed for both split stages
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Train and evaluate the classifier on a named dataset
    Train {
        /// Dataset name (ISOT or LIAR2)
        #[arg(short, long)]
        dataset: String,

        /// Directory holding the preprocessed ISOT partitions
        #[arg(long, default_value = "dataset")]
        data_dir: PathBuf,

        /// Read LIAR2 splits from a local directory instead of the Hub
        #[arg(long)]
        liar2_dir: Option<PathBuf>,
    },
}

fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", "─".repeat(56).truecolor(100, 100, 100));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veracity=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preprocess {
            fake,
            genuine,
            out,
            lemmatize,
            seed,
        } => {
            let strategy = if lemmatize {
                ReduceStrategy::Lemmatize
            } else {
                ReduceStrategy::Stem
            };
            let config = CorpusConfig::default()
                .with_sources(fake, genuine)
                .with_output_dir(out)
                .with_strategy(strategy)
                .with_seed(seed);

            let summary = CorpusBuilder::new(config)?.build()?;

            section("Corpus");
            println!(
                "  {:<12} {} fabricated, {} genuine",
                muted("Raw"),
                summary.n_fabricated_raw,
                summary.n_genuine_raw
            );
            println!("  {:<12} {}", muted("Cleaned"), summary.n_cleaned);
            println!(
                "  {:<12} {} train / {} val / {} test",
                muted("Split"),
                summary.n_train,
                summary.n_val,
                summary.n_test
            );
            println!();
        }

        Commands::Train {
            dataset,
            data_dir,
            liar2_dir,
        } => {
            let dataset: DatasetName = dataset.parse()?;
            let mut config = TrainerConfig::new(dataset);
            config.loader = LoaderConfig {
                isot_dir: data_dir,
                liar2_dir,
            };

            let report = train_and_evaluate(&config)?;

            section(&format!("Evaluation - {dataset}"));
            println!(
                "  {:<12} {} docs, {} terms",
                muted("Train"),
                report.n_train,
                report.vocabulary_len
            );
            println!("  {:<12} {} docs", muted("Test"), report.n_test);
            println!(
                "  {:<12} {}",
                muted("Accuracy"),
                format!("{:.4}", report.accuracy).white().bold()
            );
            println!();
            println!("{}", report.report);
            println!();
            println!(
                "  {:<12} {:.4} (±{:.4} over {} folds)",
                muted("CV accuracy"),
                report.cv.mean,
                report.cv.std,
                report.cv.scores.len()
            );
            println!("  {:<12} {:.2}s", muted("Time"), report.elapsed_secs);
            println!();
        }
    }

    Ok(())
}
