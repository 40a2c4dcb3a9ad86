// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system side of the outputs:
//
//   artifact_store.rs — where vocab.json, questions.json and
//                       relations.json live, and whole-file
//                       JSON read/write for each of them
//                       (the Persistable impls)

/// Output artifact persistence
pub mod artifact_store;
