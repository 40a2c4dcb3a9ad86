// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands a PreproConfig to the use
// cases in Layer 2 and prints a one-line summary per pass.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Commands;

use crate::application::{
    config::PreproConfig,
    questions_use_case::QuestionsUseCase,
    relations_use_case::RelationsUseCase,
    vocab_use_case::VocabUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "dqa-prepro",
    version,
    about = "Preprocess a diagram QA dataset into vocab.json, questions.json and relations.json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::All(args) => {
                let config: PreproConfig = args.into();
                run_vocab(&config)?;
                run_questions(&config)?;
                run_relations(&config)
            }
            Commands::Vocab(args)     => run_vocab(&args.into()),
            Commands::Questions(args) => run_questions(&args.into()),
            Commands::Relations(args) => run_relations(&args.into()),
        }
    }
}

fn run_vocab(config: &PreproConfig) -> Result<()> {
    tracing::info!("Building vocabulary from '{}'", config.data_dir.display());
    let vocab = VocabUseCase::new(config.clone()).execute()?;
    println!("vocab size: {}", vocab.len());
    Ok(())
}

fn run_questions(config: &PreproConfig) -> Result<()> {
    tracing::info!("Indexing questions from '{}'", config.questions_dir().display());
    let artifact = QuestionsUseCase::new(config.clone()).execute()?;
    println!(
        "number of questions: {}, max sent size: {}",
        artifact.question_count(),
        artifact.max_sent_size
    );
    Ok(())
}

fn run_relations(config: &PreproConfig) -> Result<()> {
    tracing::info!("Extracting relations from '{}'", config.annotations_dir().display());
    let artifact = RelationsUseCase::new(config.clone()).execute()?;
    println!(
        "relations: {} across {} images",
        artifact.relation_count(),
        artifact.image_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_dirs_and_default_min_count() {
        let cli = Cli::try_parse_from(["dqa-prepro", "all", "data", "out"]).unwrap();
        let Commands::All(args) = cli.command else { panic!("expected `all`") };

        let config: PreproConfig = args.into();
        assert_eq!(config.data_dir, std::path::PathBuf::from("data"));
        assert_eq!(config.target_dir, std::path::PathBuf::from("out"));
        assert_eq!(config.min_count, 5);
    }

    #[test]
    fn test_min_count_flag() {
        let cli = Cli::try_parse_from(["dqa-prepro", "vocab", "d", "t", "--min-count", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Vocab(ref a) if a.min_count == 2));
    }

    #[test]
    fn test_target_dir_is_required() {
        assert!(Cli::try_parse_from(["dqa-prepro", "relations", "data"]).is_err());
    }
}
