// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Four subcommands: `all` runs the three passes in order, the
// others run a single pass. Every subcommand takes the same
// arguments so a pass can be rerun on its own.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::config::{PreproConfig, DEFAULT_MIN_COUNT};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary, then index questions and relations
    All(PreproArgs),

    /// Build vocab.json only
    Vocab(PreproArgs),

    /// Index questions against an existing vocab.json
    Questions(PreproArgs),

    /// Extract relations against an existing vocab.json
    Relations(PreproArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PreproArgs {
    /// Dataset root containing `annotations/` and `questions/`
    pub data_dir: PathBuf,

    /// Directory the JSON artifacts are written to
    pub target_dir: PathBuf,

    /// Keep only words seen more than this many times
    #[arg(long, default_value_t = DEFAULT_MIN_COUNT)]
    pub min_count: usize,
}

impl From<PreproArgs> for PreproConfig {
    fn from(a: PreproArgs) -> Self {
        PreproConfig {
            data_dir:   a.data_dir,
            target_dir: a.target_dir,
            min_count:  a.min_count,
        }
    }
}
