use std::path::PathBuf;

use clap::Parser;

/// Name of the scores file inside `--scores_path`.
pub const SCORES_FILE: &str = "scores.jsonl";

pub const DEFAULT_SCORES_PATH: &str = "output/importance";

/// Command line for the metric binary. Built once in `main` and passed down.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pvalue-tpr", disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Directory containing `scores.jsonl`.
    #[arg(long = "scores_path", default_value = DEFAULT_SCORES_PATH)]
    pub scores_path: PathBuf,
}

impl Config {
    pub fn scores_file(&self) -> PathBuf {
        self.scores_path.join(SCORES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults_to_output_importance() {
        let config = Config::try_parse_from(["pvalue-tpr"]).unwrap();
        assert_eq!(config.scores_path, PathBuf::from("output/importance"));
        assert_eq!(
            config.scores_file(),
            Path::new("output/importance").join("scores.jsonl")
        );
    }

    #[test]
    fn takes_scores_path() {
        let config = Config::try_parse_from(["pvalue-tpr", "--scores_path", "/tmp/run1"]).unwrap();
        assert_eq!(config.scores_file(), PathBuf::from("/tmp/run1/scores.jsonl"));
    }

    #[test]
    fn help_and_unknown_flags_are_rejected() {
        assert!(Config::try_parse_from(["pvalue-tpr", "--help"]).is_err());
        assert!(Config::try_parse_from(["pvalue-tpr", "-h"]).is_err());
        assert!(Config::try_parse_from(["pvalue-tpr", "--threshold", "0.05"]).is_err());
    }
}
