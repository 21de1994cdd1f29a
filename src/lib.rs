//! Share of per-sample p-values below a fixed significance threshold,
//! read from line-delimited JSON.

pub mod config;
pub mod data;
pub mod error;
pub mod flags;
pub mod metric;

use anyhow::{Context, Result};

pub use config::Config;
pub use data::model::{Record, RecordSet};
pub use error::{InvalidBooleanLiteral, ScoreError};
pub use flags::{bool_flag, parse_bool};
pub use metric::{compute_tpr, summarize, TprSummary, SIGNIFICANCE_THRESHOLD};

/// Load the configured scores file and compute its summary.
pub fn run(config: &Config) -> Result<TprSummary> {
    let path = config.scores_file();
    log::debug!("reading scores from {}", path.display());

    let records = data::loader::load_scores(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    let summary = summarize(records.as_slice())
        .with_context(|| format!("scoring {}", path.display()))?;

    log::info!(
        "{} of {} samples below p = {SIGNIFICANCE_THRESHOLD}",
        summary.positives,
        summary.total
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn config_for(dir: &std::path::Path) -> Config {
        Config {
            scores_path: dir.to_path_buf(),
        }
    }

    #[test]
    fn run_reads_scores_file_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("scores.jsonl"),
            "{\"pvalue\": 0.00001}\n{\"pvalue\": 0.001}\n{\"pvalue\": 0.00005}\n",
        )
        .unwrap();

        let summary = run(&config_for(dir.path())).unwrap();
        assert_eq!(summary, TprSummary { positives: 2, total: 3 });
        assert_eq!(summary.to_string(), "TPR: 0.6666666666666666");
    }

    #[test]
    fn run_fails_on_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scores.jsonl"), "").unwrap();

        let err = run(&config_for(dir.path())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScoreError>(),
            Some(ScoreError::EmptyInput)
        ));
    }

    #[test]
    fn run_fails_without_scores_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config_for(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("scores.jsonl"));
    }
}
