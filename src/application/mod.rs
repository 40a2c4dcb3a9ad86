// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per preprocessing pass. Each pass is a blocking
// scan of the whole corpus that writes its artifact once, at the
// end. Passes run in this order because the last two read the
// vocabulary the first one writes:
//
//   VocabUseCase      → vocab.json
//   QuestionsUseCase  → questions.json
//   RelationsUseCase  → relations.json
//
// No printing here (that's Layer 1) and no parsing logic (that's
// Layer 4); only workflow coordination and error context.

// Shared run configuration
pub mod config;

// Corpus scan and vocabulary build
pub mod vocab_use_case;

// Question indexing
pub mod questions_use_case;

// Relation extraction
pub mod relations_use_case;

#[cfg(test)]
mod fixtures;
