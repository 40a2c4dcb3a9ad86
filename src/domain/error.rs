// ============================================================
// Layer 3 — Data Errors
// ============================================================
// Every way an input document or the corpus as a whole can be
// unusable. These are never recovered from: the application
// layer attaches the file name and aborts the run.

use thiserror::Error;

use crate::domain::annotation::EntityKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreproError {
    #[error("empty entity key")]
    EmptyKey,

    #[error("entity key '{0}' has an unknown type prefix")]
    UnknownEntityKind(String),

    #[error("{kind} entity '{key}' is not present in the annotation document")]
    MissingEntity { kind: EntityKind, key: String },

    #[error("reference chain starting at '{0}' is too deep (cyclic object references?)")]
    ReferenceTooDeep(String),

    #[error("entity '{key}' has no vertices to take a center from")]
    MissingGeometry { key: String },

    /// An object with neither a blob nor a text span to fall back on.
    #[error("object '{0}' references neither a blob nor a text span")]
    MalformedObject(String),

    #[error("relationship '{relation}' has an empty '{field}' list")]
    MissingReference { relation: String, field: &'static str },

    #[error("no relation class for ({rel_type}, {subtype}, {category})")]
    UnclassifiedRelationship {
        rel_type: String,
        subtype:  String,
        category: String,
    },

    #[error("no word occurs more than {min_count} times; vocabulary would be empty")]
    DegenerateVocabulary { min_count: usize },

    #[error("vocabulary has no 'UNK' entry at index 0")]
    MissingUnknownToken,
}
