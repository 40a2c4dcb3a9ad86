// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain serde types describing the dataset and the artifacts
// produced from it. No file I/O in here; the only logic is
// key-prefix dispatch, the relation classification table and
// a few accessors.

// Per-image diagram annotations and their entity kinds
pub mod annotation;

// Relationship taxonomy, classification and relation records
pub mod relation;

// Question files and the indexed questions artifact
pub mod question;

// A parsed file tagged with its file name
pub mod document;

// Data errors
pub mod error;

// DocumentSource and Persistable
pub mod traits;
