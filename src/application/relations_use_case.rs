// ============================================================
// Layer 2 — RelationsUseCase
// ============================================================
// Step 1: Load vocab.json                          (Layer 6 - infra)
// Step 2: Extract relation records per annotation  (Layer 4 - data)
// Step 3: Write relations.json                     (Layer 6 - infra)
//
// Images whose annotation has no `relationships` section get no
// entry. Any data error aborts the pass with the file name attached.

use anyhow::{Context, Result};

use crate::application::config::PreproConfig;
use crate::data::{extractor::RelationExtractor, loader::JsonDirLoader};
use crate::domain::{
    annotation::AnnotationDocument,
    relation::RelationsArtifact,
    traits::{DocumentSource, Persistable},
};
use crate::infra::artifact_store::ArtifactStore;

pub struct RelationsUseCase {
    config: PreproConfig,
}

impl RelationsUseCase {
    pub fn new(config: PreproConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<RelationsArtifact> {
        let store = ArtifactStore::new(&self.config.target_dir);
        let vocab = store.load_vocab()?;

        let loader    = JsonDirLoader::<AnnotationDocument>::new(self.config.annotations_dir());
        let extractor = RelationExtractor::new(&vocab);
        let mut artifact = RelationsArtifact::default();

        for doc in loader.load_all()? {
            let records = extractor
                .extract(&doc.content)
                .with_context(|| format!("Bad annotation '{}'", doc.source))?;

            match records {
                Some(records) => {
                    tracing::debug!("{}: {} relations", doc.source, records.len());
                    artifact.0.insert(doc.image_id(), records);
                }
                None => tracing::debug!("{}: no relationships, skipped", doc.source),
            }
        }

        tracing::info!(
            "Extracted {} relations from {} images",
            artifact.relation_count(),
            artifact.image_count()
        );

        store.ensure_dir()?;
        artifact.save(&store.relations_path())?;

        Ok(artifact)
    }
}
