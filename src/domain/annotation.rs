// ============================================================
// Layer 3 — Annotation Document
// ============================================================
// One per image. Every diagram element lives in a sub-map keyed
// by a string whose first character says what kind of element it
// is:
//
//   T → text        rectangle + literal value
//   O → objects     no geometry, points at blobs and/or text
//   B → blobs       polygon
//   A → arrows      polygon + list of arrow heads
//   H → arrowHeads  rectangle
//   R → regions     polygon
//
// The optional `relationships` section is a three-level taxonomy
// (type → subtype → relationship id); see relation.rs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::PreproError;
use crate::domain::relation::RelationshipTaxonomy;

/// A vertex as it appears in the source JSON. Coordinates are
/// usually whole pixels but are not guaranteed to be.
pub type Vertex = [f64; 2];

/// A resolved, rounded 2D point. Serialises as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point(pub i64, pub i64);

impl Point {
    /// Placeholder for "no arrow" / "no arrow head".
    pub const ORIGIN: Point = Point(0, 0);
}

/// The entity type encoded in a key's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Text,
    Object,
    Blob,
    Arrow,
    ArrowHead,
    Region,
}

impl EntityKind {
    pub fn from_key(key: &str) -> Result<Self, PreproError> {
        match key.chars().next() {
            None      => Err(PreproError::EmptyKey),
            Some('T') => Ok(Self::Text),
            Some('O') => Ok(Self::Object),
            Some('B') => Ok(Self::Blob),
            Some('A') => Ok(Self::Arrow),
            Some('H') => Ok(Self::ArrowHead),
            Some('R') => Ok(Self::Region),
            Some(_)   => Err(PreproError::UnknownEntityKind(key.to_string())),
        }
    }

    /// Name of the sub-map this kind lives in.
    pub fn section(self) -> &'static str {
        match self {
            Self::Text      => "text",
            Self::Object    => "objects",
            Self::Blob      => "blobs",
            Self::Arrow     => "arrows",
            Self::ArrowHead => "arrowHeads",
            Self::Region    => "regions",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextEntity {
    pub value: String,

    #[serde(default)]
    pub rectangle: Vec<Vertex>,
}

/// Objects carry no geometry of their own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectEntity {
    #[serde(default)]
    pub blobs: Vec<String>,

    #[serde(default)]
    pub text: Vec<String>,
}

/// Blobs and regions: a bare polygon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolygonEntity {
    #[serde(default)]
    pub polygon: Vec<Vertex>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArrowEntity {
    #[serde(default)]
    pub polygon: Vec<Vertex>,

    #[serde(default, rename = "arrowHeads")]
    pub arrow_heads: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArrowHeadEntity {
    #[serde(default)]
    pub rectangle: Vec<Vertex>,
}

/// Parsed `annotations/<image>.json`. Unknown fields are ignored.
/// `text` is required; every vocabulary scan reads it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationDocument {
    pub text: BTreeMap<String, TextEntity>,

    #[serde(default)]
    pub objects: BTreeMap<String, ObjectEntity>,

    #[serde(default)]
    pub blobs: BTreeMap<String, PolygonEntity>,

    #[serde(default)]
    pub arrows: BTreeMap<String, ArrowEntity>,

    #[serde(default, rename = "arrowHeads")]
    pub arrow_heads: BTreeMap<String, ArrowHeadEntity>,

    #[serde(default)]
    pub regions: BTreeMap<String, PolygonEntity>,

    #[serde(default)]
    pub relationships: Option<RelationshipTaxonomy>,
}

impl AnnotationDocument {
    pub fn text_entity(&self, key: &str) -> Result<&TextEntity, PreproError> {
        lookup(&self.text, EntityKind::Text, key)
    }

    pub fn object(&self, key: &str) -> Result<&ObjectEntity, PreproError> {
        lookup(&self.objects, EntityKind::Object, key)
    }

    pub fn arrow(&self, key: &str) -> Result<&ArrowEntity, PreproError> {
        lookup(&self.arrows, EntityKind::Arrow, key)
    }

    /// The vertex list a geometric entity takes its center from:
    /// the rectangle for text and arrow heads, the polygon for the rest.
    /// Objects have none and must be resolved through their references.
    pub fn vertices(&self, kind: EntityKind, key: &str) -> Result<&[Vertex], PreproError> {
        let vertices = match kind {
            EntityKind::Text      => &self.text_entity(key)?.rectangle,
            EntityKind::Blob      => &lookup(&self.blobs, kind, key)?.polygon,
            EntityKind::Arrow     => &self.arrow(key)?.polygon,
            EntityKind::ArrowHead => &lookup(&self.arrow_heads, kind, key)?.rectangle,
            EntityKind::Region    => &lookup(&self.regions, kind, key)?.polygon,
            EntityKind::Object    => {
                return Err(PreproError::MissingGeometry { key: key.to_string() })
            }
        };
        Ok(vertices.as_slice())
    }

    /// Every literal text value in the document, in key order.
    pub fn text_values(&self) -> impl Iterator<Item = &str> {
        self.text.values().map(|t| t.value.as_str())
    }
}

fn lookup<'a, T>(
    map:  &'a BTreeMap<String, T>,
    kind: EntityKind,
    key:  &str,
) -> Result<&'a T, PreproError> {
    map.get(key).ok_or_else(|| PreproError::MissingEntity {
        kind,
        key: key.to_string(),
    })
}
