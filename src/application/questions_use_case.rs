// ============================================================
// Layer 2 — QuestionsUseCase
// ============================================================
// Step 1: Load vocab.json                        (Layer 6 - infra)
// Step 2: Index every question file, in order    (Layer 4 - data)
// Step 3: Write questions.json                   (Layer 6 - infra)

use anyhow::Result;

use crate::application::config::PreproConfig;
use crate::data::{indexer::QuestionIndexer, loader::JsonDirLoader};
use crate::domain::{
    question::{QuestionFile, QuestionsArtifact},
    traits::{DocumentSource, Persistable},
};
use crate::infra::artifact_store::ArtifactStore;

pub struct QuestionsUseCase {
    config: PreproConfig,
}

impl QuestionsUseCase {
    pub fn new(config: PreproConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<QuestionsArtifact> {
        let store = ArtifactStore::new(&self.config.target_dir);
        let vocab = store.load_vocab()?;

        let loader = JsonDirLoader::<QuestionFile>::new(self.config.questions_dir());
        let mut indexer  = QuestionIndexer::new(&vocab);
        let mut artifact = QuestionsArtifact::default();

        for doc in loader.load_all()? {
            let indexed = indexer.index_file(&doc.content);
            tracing::debug!("{}: {} questions", doc.source, indexed.len());
            for question in indexed {
                artifact.push(question);
            }
        }

        tracing::info!("Number of questions: {}", indexer.indexed());
        tracing::info!("Max sent size: {}", artifact.max_sent_size);

        store.ensure_dir()?;
        artifact.save(&store.questions_path())?;

        Ok(artifact)
    }
}
