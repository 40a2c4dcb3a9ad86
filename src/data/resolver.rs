// ============================================================
// Layer 4 — Annotation Resolver
// ============================================================
// Turns an entity key into something a model can use:
//
//   center(key)           → rounded mean of the entity's vertices
//   tokens(key)           → vocabulary indices of the entity's text
//   arrowhead_center(key) → center of an arrow's first head
//
// Objects have no geometry or text of their own, so they are
// followed to what they reference:
//
//   O ──blobs[0]──▶ B ──polygon──▶ center
//     └─text[0]───▶ T ──rectangle─▶ center
//                     └─value─────▶ tokens
//
// Everything here is a pure function of the document and the
// vocabulary. A missing key or an object with nothing to follow
// is corrupt input and comes back as an error.

use crate::data::vocab::Vocabulary;
use crate::domain::annotation::{AnnotationDocument, EntityKind, Point, Vertex};
use crate::domain::error::PreproError;

/// Longest object → object chain followed before giving up.
const MAX_REFERENCE_DEPTH: usize = 8;

pub struct AnnotationResolver<'a> {
    doc:   &'a AnnotationDocument,
    vocab: &'a Vocabulary,
}

impl<'a> AnnotationResolver<'a> {
    pub fn new(doc: &'a AnnotationDocument, vocab: &'a Vocabulary) -> Self {
        Self { doc, vocab }
    }

    /// Representative point of any entity. Objects prefer their first
    /// blob and fall back to their first text span.
    pub fn center(&self, key: &str) -> Result<Point, PreproError> {
        self.center_at_depth(key, key, 0)
    }

    fn center_at_depth(&self, start: &str, key: &str, depth: usize) -> Result<Point, PreproError> {
        if depth > MAX_REFERENCE_DEPTH {
            return Err(PreproError::ReferenceTooDeep(start.to_string()));
        }

        match EntityKind::from_key(key)? {
            EntityKind::Object => {
                let object = self.doc.object(key)?;
                let next = object
                    .blobs
                    .first()
                    .or_else(|| object.text.first())
                    .ok_or_else(|| PreproError::MalformedObject(key.to_string()))?;
                self.center_at_depth(start, next, depth + 1)
            }
            kind => mean_point(self.doc.vertices(kind, key)?, key),
        }
    }

    /// Indexed tokens of a text span, or of an object's first text span.
    /// Anything without text yields an empty sequence.
    pub fn tokens(&self, key: &str) -> Result<Vec<u32>, PreproError> {
        self.tokens_at_depth(key, key, 0)
    }

    fn tokens_at_depth(&self, start: &str, key: &str, depth: usize) -> Result<Vec<u32>, PreproError> {
        if depth > MAX_REFERENCE_DEPTH {
            return Err(PreproError::ReferenceTooDeep(start.to_string()));
        }

        match EntityKind::from_key(key)? {
            EntityKind::Text => Ok(self.vocab.encode(&self.doc.text_entity(key)?.value)),
            EntityKind::Object => match self.doc.object(key)?.text.first() {
                Some(text_key) => self.tokens_at_depth(start, text_key, depth + 1),
                None => Ok(Vec::new()),
            },
            _ => Ok(Vec::new()),
        }
    }

    /// Center of the arrow's first head, or the origin if it has none.
    pub fn arrowhead_center(&self, arrow_key: &str) -> Result<Point, PreproError> {
        match self.doc.arrow(arrow_key)?.arrow_heads.first() {
            Some(head_key) => self.center(head_key),
            None => Ok(Point::ORIGIN),
        }
    }
}

/// Component-wise mean, rounded half away from zero.
fn mean_point(vertices: &[Vertex], key: &str) -> Result<Point, PreproError> {
    if vertices.is_empty() {
        return Err(PreproError::MissingGeometry { key: key.to_string() });
    }

    let n = vertices.len() as f64;
    let (sum_x, sum_y) = vertices
        .iter()
        .fold((0.0_f64, 0.0_f64), |(sx, sy), &[x, y]| (sx + x, sy + y));

    Ok(Point((sum_x / n).round() as i64, (sum_y / n).round() as i64))
}
