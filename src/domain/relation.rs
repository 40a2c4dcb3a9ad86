// ============================================================
// Layer 3 — Relationships and Relation Records
// ============================================================
// A relationship in the source data is filed under
//
//   relationships → <type> → <subtype> → <relationship id>
//
// and carries its own `category`. The (type, subtype, category)
// triple decides which of the four relation classes it belongs to.
// The table is closed: a triple that is not listed is an error,
// never a silent default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::annotation::Point;
use crate::domain::error::PreproError;

/// type → subtype → relationship id → relationship
pub type RelationshipTaxonomy =
    BTreeMap<String, BTreeMap<String, BTreeMap<String, Relationship>>>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    pub category: String,

    #[serde(default)]
    pub origin: Vec<String>,

    #[serde(default)]
    pub destination: Vec<String>,

    /// Arrow keys; absent when the two ends are not connected by an arrow.
    #[serde(default)]
    pub connector: Option<Vec<String>>,
}

impl Relationship {
    /// The first connector key, if the relationship has one.
    pub fn arrow_key(&self) -> Option<&str> {
        self.connector
            .as_ref()
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationClass {
    /// intraObject / label / objectDescription
    ObjectLabel,
    /// intraObject / label / regionDescriptionNoArrow
    RegionLabel,
    /// interObject / linkage / objectToObject
    InterObjectLinkage,
    /// intraObject linkages and text linkages
    IntraObjectLinkage,
}

impl RelationClass {
    #[cfg(test)]
    pub const COUNT: usize = 4;

    pub fn index(self) -> u8 {
        match self {
            Self::ObjectLabel        => 0,
            Self::RegionLabel        => 1,
            Self::InterObjectLinkage => 2,
            Self::IntraObjectLinkage => 3,
        }
    }
}

const CLASSIFICATION_TABLE: [(&str, &str, &str, RelationClass); 6] = [
    ("intraObject", "label",       "objectDescription",        RelationClass::ObjectLabel),
    ("intraObject", "label",       "regionDescriptionNoArrow", RelationClass::RegionLabel),
    ("interObject", "linkage",     "objectToObject",           RelationClass::InterObjectLinkage),
    ("intraObject", "linkage",     "regionDescription",        RelationClass::IntraObjectLinkage),
    ("intraObject", "linkage",     "objectDescription",        RelationClass::IntraObjectLinkage),
    ("intraObject", "textLinkage", "textDescription",          RelationClass::IntraObjectLinkage),
];

pub fn classify(rel_type: &str, subtype: &str, category: &str) -> Result<RelationClass, PreproError> {
    CLASSIFICATION_TABLE
        .iter()
        .find(|(t, s, c, _)| *t == rel_type && *s == subtype && *c == category)
        .map(|&(_, _, _, class)| class)
        .ok_or_else(|| PreproError::UnclassifiedRelationship {
            rel_type: rel_type.to_string(),
            subtype:  subtype.to_string(),
            category: category.to_string(),
        })
}

/// One resolved relationship, in the compact key layout the model
/// loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    #[serde(rename = "type")]
    pub class_index: u8,

    #[serde(rename = "r0")]
    pub origin_center: Point,

    #[serde(rename = "r1")]
    pub destination_center: Point,

    #[serde(rename = "rh")]
    pub arrowhead_center: Point,

    #[serde(rename = "ra")]
    pub arrow_center: Point,

    #[serde(rename = "t0")]
    pub origin_tokens: Vec<u32>,

    #[serde(rename = "t1")]
    pub destination_tokens: Vec<u32>,
}

/// Contents of `relations.json`: image id → that image's records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationsArtifact(pub BTreeMap<String, Vec<RelationRecord>>);

impl RelationsArtifact {
    pub fn image_count(&self) -> usize {
        self.0.len()
    }

    pub fn relation_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}
