// ============================================================
// Layer 3 — Core Traits
// ============================================================
// DocumentSource: anything that can hand over a whole corpus of
// parsed input files (the JSON directory loader in data/loader.rs).
//
// Persistable: the three output artifacts, written once at the
// end of their pass and read back by later passes.

use anyhow::Result;
use std::path::Path;

use crate::domain::document::SourceDocument;

pub trait DocumentSource {
    type Content;

    /// Load and parse every document, in a stable order.
    fn load_all(&self) -> Result<Vec<SourceDocument<Self::Content>>>;
}

pub trait Persistable: Sized {
    /// Write the whole artifact to `path`, replacing any previous file.
    fn save(&self, path: &Path) -> Result<()>;

    fn load(path: &Path) -> Result<Self>;
}
