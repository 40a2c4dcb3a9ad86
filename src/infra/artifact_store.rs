// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Reads and writes the three output artifacts under the target
// directory:
//
//   vocab.json      word → index, "UNK": 0 included
//   questions.json  { sents, answers, max_sent_size }
//   relations.json  image id → [relation record]
//
// Writes go to a sibling `.tmp` file which is renamed over the
// target once it is complete, so a failed or interrupted pass
// leaves the previous artifact (or nothing) in place.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::data::vocab::Vocabulary;
use crate::domain::question::QuestionsArtifact;
use crate::domain::relation::RelationsArtifact;
use crate::domain::traits::Persistable;

pub const VOCAB_FILE: &str = "vocab.json";
pub const QUESTIONS_FILE: &str = "questions.json";
pub const RELATIONS_FILE: &str = "relations.json";

/// Knows where each artifact lives inside the target directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the target directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create target directory '{}'", self.dir.display()))
    }

    pub fn vocab_path(&self) -> PathBuf {
        self.dir.join(VOCAB_FILE)
    }

    pub fn questions_path(&self) -> PathBuf {
        self.dir.join(QUESTIONS_FILE)
    }

    pub fn relations_path(&self) -> PathBuf {
        self.dir.join(RELATIONS_FILE)
    }

    pub fn load_vocab(&self) -> Result<Vocabulary> {
        Vocabulary::load(&self.vocab_path())
    }
}

/// Serialise `value` in full, then replace `path` with it.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .with_context(|| format!("Cannot serialise '{}'", path.display()))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)
        .with_context(|| format!("Cannot write '{}'", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Cannot move '{}' into place", path.display()))?;

    tracing::debug!("Wrote '{}'", path.display());
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))
}

impl Persistable for Vocabulary {
    fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    fn load(path: &Path) -> Result<Self> {
        let index: BTreeMap<String, u32> = read_json(path)?;
        Vocabulary::from_index(index)
            .with_context(|| format!("Unusable vocabulary in '{}'", path.display()))
    }
}

impl Persistable for QuestionsArtifact {
    fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

impl Persistable for RelationsArtifact {
    fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}
