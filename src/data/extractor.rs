// ============================================================
// Layer 4 — Relation Extractor
// ============================================================
// Walks relationships → type → subtype → id of one annotation
// document and emits one RelationRecord per relationship:
//
//   type  ← classification table (domain/relation.rs)
//   r0/r1 ← centers of the first origin / destination key
//   ra/rh ← centers of the first connector arrow and its head,
//           or (0, 0) for both when there is no connector
//   t0/t1 ← indexed text of the origin / destination
//
// Relationships listing several origins or destinations are
// collapsed to their first entry.

use tracing::trace;

use crate::data::resolver::AnnotationResolver;
use crate::data::vocab::Vocabulary;
use crate::domain::annotation::{AnnotationDocument, Point};
use crate::domain::error::PreproError;
use crate::domain::relation::{classify, RelationRecord, Relationship};

pub struct RelationExtractor<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> RelationExtractor<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Records for every relationship in `doc`, or `None` when the
    /// document has no `relationships` section at all.
    pub fn extract(&self, doc: &AnnotationDocument) -> Result<Option<Vec<RelationRecord>>, PreproError> {
        let Some(taxonomy) = &doc.relationships else {
            return Ok(None);
        };

        let resolver = AnnotationResolver::new(doc, self.vocab);
        let mut records = Vec::new();

        for (rel_type, subtypes) in taxonomy {
            for (subtype, group) in subtypes {
                if group.is_empty() {
                    continue;
                }
                for (rel_id, rel) in group {
                    trace!("{rel_type}/{subtype}/{rel_id}: {}", rel.category);
                    records.push(self.record(&resolver, rel_type, subtype, rel_id, rel)?);
                }
            }
        }

        Ok(Some(records))
    }

    fn record(
        &self,
        resolver: &AnnotationResolver<'_>,
        rel_type: &str,
        subtype:  &str,
        rel_id:   &str,
        rel:      &Relationship,
    ) -> Result<RelationRecord, PreproError> {
        let class = classify(rel_type, subtype, &rel.category)?;

        let origin      = first_reference(&rel.origin, rel_id, "origin")?;
        let destination = first_reference(&rel.destination, rel_id, "destination")?;

        let (arrow_center, arrowhead_center) = match rel.arrow_key() {
            Some(arrow) => (resolver.center(arrow)?, resolver.arrowhead_center(arrow)?),
            None => (Point::ORIGIN, Point::ORIGIN),
        };

        Ok(RelationRecord {
            class_index:        class.index(),
            origin_center:      resolver.center(origin)?,
            destination_center: resolver.center(destination)?,
            arrowhead_center,
            arrow_center,
            origin_tokens:      resolver.tokens(origin)?,
            destination_tokens: resolver.tokens(destination)?,
        })
    }
}

fn first_reference<'r>(
    keys:   &'r [String],
    rel_id: &str,
    field:  &'static str,
) -> Result<&'r str, PreproError> {
    keys.first()
        .map(String::as_str)
        .ok_or_else(|| PreproError::MissingReference {
            relation: rel_id.to_string(),
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vocab::VocabCounter;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> AnnotationDocument {
        serde_json::from_value(value).unwrap()
    }

    fn vocab(words: &str) -> Vocabulary {
        let mut counter = VocabCounter::new();
        counter.count_text(words);
        counter.build(0).unwrap()
    }

    fn cat_document(relationships: serde_json::Value) -> AnnotationDocument {
        doc(json!({
            "text":    { "T0": { "value": "cat", "rectangle": [[0, 0], [2, 2]] } },
            "objects": { "O0": { "blobs": ["B0"], "text": ["T0"] } },
            "blobs":   { "B0": { "polygon": [[4, 4], [6, 6]] } },
            "arrows":  { "A0": { "polygon": [[8, 8], [10, 12]], "arrowHeads": ["H0"] } },
            "arrowHeads": { "H0": { "rectangle": [[9, 11], [11, 13]] } },
            "relationships": relationships
        }))
    }

    #[test]
    fn test_single_object_to_object_relation() {
        let d = cat_document(json!({
            "interObject": { "linkage": {
                "CR0": { "category": "objectToObject", "origin": ["O0"], "destination": ["O0"] }
            } }
        }));
        let v = vocab("cat");

        let records = RelationExtractor::new(&v).extract(&d).unwrap().unwrap();
        assert_eq!(
            records,
            vec![RelationRecord {
                class_index:        2,
                origin_center:      Point(5, 5),
                destination_center: Point(5, 5),
                arrowhead_center:   Point::ORIGIN,
                arrow_center:       Point::ORIGIN,
                origin_tokens:      vec![v.get("cat")],
                destination_tokens: vec![v.get("cat")],
            }]
        );
    }

    #[test]
    fn test_connector_resolves_arrow_and_head() {
        let d = cat_document(json!({
            "intraObject": { "linkage": {
                "CR1": {
                    "category": "objectDescription",
                    "origin": ["T0"], "destination": ["O0"], "connector": ["A0"]
                }
            } }
        }));
        let v = vocab("cat");

        let records = RelationExtractor::new(&v).extract(&d).unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class_index, 3);
        assert_eq!(records[0].origin_center, Point(1, 1));
        assert_eq!(records[0].arrow_center, Point(9, 10));
        assert_eq!(records[0].arrowhead_center, Point(10, 12));
    }

    #[test]
    fn test_only_first_origin_and_destination_are_used() {
        let d = cat_document(json!({
            "intraObject": { "label": {
                "CR2": { "category": "objectDescription", "origin": ["T0", "O0"], "destination": ["B0", "T0"] }
            } }
        }));
        let v = vocab("cat");

        let record = &RelationExtractor::new(&v).extract(&d).unwrap().unwrap()[0];
        assert_eq!(record.class_index, 0);
        assert_eq!(record.origin_center, Point(1, 1));
        assert_eq!(record.destination_center, Point(5, 5));
        assert!(record.destination_tokens.is_empty());
    }

    #[test]
    fn test_document_without_relationships_is_skipped() {
        let d = doc(json!({ "text": {} }));
        let v = vocab("cat");
        assert_eq!(RelationExtractor::new(&v).extract(&d).unwrap(), None);
    }

    #[test]
    fn test_empty_groups_produce_no_records() {
        let d = cat_document(json!({ "intraObject": { "label": {}, "linkage": {} }, "interObject": {} }));
        let v = vocab("cat");
        assert_eq!(RelationExtractor::new(&v).extract(&d).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_unlisted_category_fails() {
        let d = cat_document(json!({
            "intraObject": { "linkage": {
                "CR3": { "category": "arrowDescriptor", "origin": ["O0"], "destination": ["O0"] }
            } }
        }));
        let v = vocab("cat");
        assert!(matches!(
            RelationExtractor::new(&v).extract(&d),
            Err(PreproError::UnclassifiedRelationship { .. })
        ));
    }

    #[test]
    fn test_empty_origin_list_fails() {
        let d = cat_document(json!({
            "interObject": { "linkage": {
                "CR4": { "category": "objectToObject", "origin": [], "destination": ["O0"] }
            } }
        }));
        let v = vocab("cat");
        assert_eq!(
            RelationExtractor::new(&v).extract(&d),
            Err(PreproError::MissingReference { relation: "CR4".into(), field: "origin" })
        );
    }

    #[test]
    fn test_dangling_reference_fails() {
        let d = cat_document(json!({
            "interObject": { "linkage": {
                "CR5": { "category": "objectToObject", "origin": ["O0"], "destination": ["O7"] }
            } }
        }));
        let v = vocab("cat");
        assert!(matches!(
            RelationExtractor::new(&v).extract(&d),
            Err(PreproError::MissingEntity { .. })
        ));
    }
}
