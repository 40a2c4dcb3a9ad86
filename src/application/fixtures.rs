// Small on-disk datasets for the use-case tests.

use serde_json::{json, Value};
use std::{fs, path::Path};
use tempfile::TempDir;

use crate::application::config::PreproConfig;

pub struct Dataset {
    _root:      TempDir,
    pub config: PreproConfig,
}

impl Dataset {
    pub fn new(min_count: usize) -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("data/annotations")).unwrap();
        fs::create_dir_all(root.path().join("data/questions")).unwrap();

        let config = PreproConfig {
            data_dir:   root.path().join("data"),
            target_dir: root.path().join("out"),
            min_count,
        };
        Self { _root: root, config }
    }

    pub fn annotation(&self, name: &str, value: Value) -> &Self {
        write(&self.config.annotations_dir().join(name), &value);
        self
    }

    pub fn questions(&self, name: &str, value: Value) -> &Self {
        write(&self.config.questions_dir().join(name), &value);
        self
    }

    pub fn out(&self, file: &str) -> Value {
        let bytes = fs::read(self.config.target_dir.join(file)).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

fn write(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
}

/// One text span, one object pointing at a blob and that text, and a
/// single objectToObject relationship from the object to itself.
pub fn cat_annotation() -> Value {
    json!({
        "text":       { "T0": { "value": "cat", "rectangle": [[0, 0], [2, 2]] } },
        "objects":    { "O0": { "blobs": ["B0"], "text": ["T0"] } },
        "blobs":      { "B0": { "polygon": [[4, 4], [6, 6]] } },
        "arrows":     {},
        "arrowHeads": {},
        "regions":    {},
        "relationships": {
            "interObject": { "linkage": {
                "CR0": { "category": "objectToObject", "origin": ["O0"], "destination": ["O0"] }
            } },
            "intraObject": { "label": {} }
        }
    })
}

pub fn cat_questions() -> Value {
    json!({
        "questions": {
            "Which animal is shown?": { "answerTexts": ["cat", "big dog"], "correctAnswer": 0 },
            "Is it a cat?":           { "answerTexts": ["yes", "no"],      "correctAnswer": 5 }
        }
    })
}
