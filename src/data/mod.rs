// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the JSON files on disk and the artifacts
// written at the end of each pass:
//
//   annotations/*.json, questions/*.json
//       │
//       ▼
//   JsonDirLoader       → parses every file in a directory
//       │
//       ▼
//   tokenize            → lowercase word tokens
//       │
//       ▼
//   VocabCounter        → corpus-wide counts → Vocabulary
//       │
//       ├──────────────────────────┐
//       ▼                          ▼
//   QuestionIndexer             AnnotationResolver
//   (question + choice ids)         │
//                                   ▼
//                               RelationExtractor
//                               (one record per relationship)

/// Reads a directory of JSON documents
pub mod loader;

/// Word tokenizer
pub mod tokenizer;

/// Frequency counting and the word → index mapping
pub mod vocab;

/// Key → center / key → tokens resolution inside one annotation document
pub mod resolver;

/// Relationship walk and classification
pub mod extractor;

/// Question + answer-choice indexing
pub mod indexer;
