//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use sts_eval_workflow::Analysis;

pub const DEFAULT_STS_DATA: &str = "stsbenchmark/sts-dev.csv";

/// Correlate string-similarity metrics with human similarity judgements
#[derive(Debug, Parser)]
#[command(name = "sts-eval", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Correlate NIST, BLEU, word error rate, longest common substring and
    /// edit distance with the labels
    Pearson(DataArgs),

    /// Inspect symmetrical NIST scores over a sample of pairs
    Nist(DataArgs),

    /// Correlate TF-IDF cosine similarity, raw and preprocessed, with the labels
    Tfidf(DataArgs),
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// Tab-separated data in STS benchmark format
    #[arg(long = "sts-data", value_name = "PATH", default_value = DEFAULT_STS_DATA)]
    pub sts_data: PathBuf,
}

impl Command {
    pub fn analysis(&self) -> Analysis {
        match self {
            Command::Pearson(_) => Analysis::Pearson,
            Command::Nist(_) => Analysis::Nist,
            Command::Tfidf(_) => Analysis::Tfidf,
        }
    }

    pub fn data(&self) -> &DataArgs {
        match self {
            Command::Pearson(args) | Command::Nist(args) | Command::Tfidf(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_data_path() {
        let cli = Cli::try_parse_from(["sts-eval", "nist"]).unwrap();
        assert_eq!(cli.command.analysis(), Analysis::Nist);
        assert_eq!(cli.command.data().sts_data, PathBuf::from(DEFAULT_STS_DATA));
    }

    #[test]
    fn explicit_data_path() {
        let cli = Cli::try_parse_from(["sts-eval", "tfidf", "--sts-data", "train.csv"]).unwrap();
        assert_eq!(cli.command.data().sts_data, PathBuf::from("train.csv"));
    }
}
