// ============================================================
// Layer 2 — Preprocessing Configuration
// ============================================================
// Everything a run needs to know. Built from the CLI arguments.

use std::path::PathBuf;

/// Words must occur more than this many times to get an index.
pub const DEFAULT_MIN_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct PreproConfig {
    /// Dataset root containing `annotations/` and `questions/`
    pub data_dir:   PathBuf,
    /// Where vocab.json, questions.json and relations.json go
    pub target_dir: PathBuf,
    pub min_count:  usize,
}

impl PreproConfig {
    pub fn annotations_dir(&self) -> PathBuf {
        self.data_dir.join("annotations")
    }

    pub fn questions_dir(&self) -> PathBuf {
        self.data_dir.join("questions")
    }
}

impl Default for PreproConfig {
    fn default() -> Self {
        Self {
            data_dir:   PathBuf::from("data"),
            target_dir: PathBuf::from("data/prepro"),
            min_count:  DEFAULT_MIN_COUNT,
        }
    }
}
