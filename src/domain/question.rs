// ============================================================
// Layer 3 — Questions
// ============================================================
// Source side: `questions/<image>.json` maps each question text
// to its answer choices and the index of the correct one.
//
// Output side: `questions.json` holds, per sequential question id,
// the indexed (question + choice) sequences and the correct index,
// plus the longest sequence length seen anywhere in the corpus.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionFile {
    pub questions: BTreeMap<String, QuestionDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDetail {
    #[serde(rename = "answerTexts", default)]
    pub answer_texts: Vec<String>,

    /// Taken as-is from the source; not checked against `answer_texts`.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: i64,
}

impl QuestionDetail {
    pub fn answer_in_range(&self) -> bool {
        usize::try_from(self.correct_answer)
            .map(|idx| idx < self.answer_texts.len())
            .unwrap_or(false)
    }
}

/// One question after tokenisation and vocabulary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedQuestion {
    pub id:             usize,
    /// One sequence per answer choice: question tokens then choice tokens.
    pub sents:          Vec<Vec<u32>>,
    pub correct_answer: i64,
}

impl IndexedQuestion {
    pub fn longest_sent(&self) -> usize {
        self.sents.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Contents of `questions.json`. Ids are decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsArtifact {
    pub sents:         BTreeMap<String, Vec<Vec<u32>>>,
    pub answers:       BTreeMap<String, i64>,
    pub max_sent_size: usize,
}

impl QuestionsArtifact {
    pub fn push(&mut self, question: IndexedQuestion) {
        let id = question.id.to_string();
        self.max_sent_size = self.max_sent_size.max(question.longest_sent());
        self.answers.insert(id.clone(), question.correct_answer);
        self.sents.insert(id, question.sents);
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }
}
