// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Step 1: Count every annotation text value     (Layer 4 - data)
// Step 2: Count every question and answer text  (Layer 4 - data)
// Step 3: Filter by min_count and index         (Layer 4 - data)
// Step 4: Write vocab.json                      (Layer 6 - infra)

use anyhow::{Context, Result};

use crate::application::config::PreproConfig;
use crate::data::{loader::JsonDirLoader, vocab::{VocabCounter, Vocabulary}};
use crate::domain::{
    annotation::AnnotationDocument,
    question::QuestionFile,
    traits::{DocumentSource, Persistable},
};
use crate::infra::artifact_store::ArtifactStore;

pub struct VocabUseCase {
    config: PreproConfig,
}

impl VocabUseCase {
    pub fn new(config: PreproConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vocabulary> {
        let cfg = &self.config;

        let counter = self.count_corpus()?;
        tracing::info!("Counted {} distinct words", counter.distinct_words());

        let vocab = counter
            .build(cfg.min_count)
            .with_context(|| format!("Vocabulary build failed (min_count = {})", cfg.min_count))?;
        tracing::info!("Vocabulary size: {} (min_count = {})", vocab.len(), cfg.min_count);

        let store = ArtifactStore::new(&cfg.target_dir);
        store.ensure_dir()?;
        vocab.save(&store.vocab_path())?;

        Ok(vocab)
    }

    /// One sequential scan over annotations then questions.
    fn count_corpus(&self) -> Result<VocabCounter> {
        let mut counter = VocabCounter::new();

        let annotations = JsonDirLoader::<AnnotationDocument>::new(self.config.annotations_dir());
        for doc in annotations.load_all()? {
            for value in doc.content.text_values() {
                counter.count_text(value);
            }
        }

        let questions = JsonDirLoader::<QuestionFile>::new(self.config.questions_dir());
        for doc in questions.load_all()? {
            for (question, detail) in &doc.content.questions {
                counter.count_text(question);
                for choice in &detail.answer_texts {
                    counter.count_text(choice);
                }
            }
        }

        Ok(counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{cat_annotation, cat_questions, Dataset};
    use serde_json::json;

    #[test]
    fn test_counts_annotations_questions_and_choices() {
        let ds = Dataset::new(0);
        ds.annotation("1.png.json", cat_annotation())
            .questions("1.png.json", cat_questions());

        let vocab = VocabUseCase::new(ds.config.clone()).execute().unwrap();

        // annotation text, question text and answer choices all count
        for word in ["cat", "which", "animal", "dog", "yes"] {
            assert_ne!(vocab.get(word), 0, "{word} missing");
        }
        assert_eq!(ds.out("vocab.json")["UNK"], json!(0));
        assert_eq!(ds.out("vocab.json").as_object().unwrap().len(), vocab.len());
    }

    #[test]
    fn test_min_count_threshold() {
        let ds = Dataset::new(2);
        ds.annotation("1.png.json", cat_annotation())
            .questions("1.png.json", cat_questions());

        // "cat": annotation + one question + one choice = 3 occurrences
        let vocab = VocabUseCase::new(ds.config.clone()).execute().unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("cat"), 1);
    }

    #[test]
    fn test_annotation_without_text_aborts_with_file_name() {
        let ds = Dataset::new(0);
        ds.annotation("1.png.json", cat_annotation())
            .annotation("2.png.json", json!({ "objects": {}, "blobs": {} }));

        let err = VocabUseCase::new(ds.config.clone()).execute().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("2.png.json"));
        assert!(msg.contains("missing field `text`"));
        assert!(!ds.config.target_dir.join("vocab.json").exists());
    }

    #[test]
    fn test_question_file_without_questions_aborts_with_file_name() {
        let ds = Dataset::new(0);
        ds.annotation("1.png.json", cat_annotation())
            .questions("5.png.json", json!({ "imageName": "5.png" }));

        let err = VocabUseCase::new(ds.config.clone()).execute().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("5.png.json"));
        assert!(msg.contains("missing field `questions`"));
    }

    #[test]
    fn test_degenerate_vocabulary_writes_nothing() {
        let ds = Dataset::new(100);
        ds.annotation("1.png.json", cat_annotation());

        let err = VocabUseCase::new(ds.config.clone()).execute().unwrap_err();
        assert!(format!("{err:#}").contains("more than 100 times"));
        assert!(!ds.config.target_dir.join("vocab.json").exists());
    }
}
