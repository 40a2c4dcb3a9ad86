// ============================================================
// Layer 4 — Question Indexer
// ============================================================
// For every question, one indexed sequence per answer choice:
//
//   tokenize(question) ++ tokenize(choice)  →  vocabulary ids
//
// Question ids are handed out sequentially across the whole
// corpus, in the order files and questions are fed in.

use tracing::warn;

use crate::data::tokenizer::tokenize;
use crate::data::vocab::Vocabulary;
use crate::domain::question::{IndexedQuestion, QuestionFile};

pub struct QuestionIndexer<'a> {
    vocab:   &'a Vocabulary,
    next_id: usize,
}

impl<'a> QuestionIndexer<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab, next_id: 0 }
    }

    pub fn index_file(&mut self, file: &QuestionFile) -> Vec<IndexedQuestion> {
        let mut indexed = Vec::with_capacity(file.questions.len());

        for (text, detail) in &file.questions {
            let question_words = tokenize(text);

            let sents = detail
                .answer_texts
                .iter()
                .map(|choice| {
                    let mut words = question_words.clone();
                    words.extend(tokenize(choice));
                    self.vocab.lookup(&words)
                })
                .collect();

            // passed through unchanged; the model loader decides what to do with it
            if !detail.answer_in_range() {
                warn!(
                    "correctAnswer {} out of range for {} choices: {:?}",
                    detail.correct_answer,
                    detail.answer_texts.len(),
                    text
                );
            }

            indexed.push(IndexedQuestion {
                id: self.next_id,
                sents,
                correct_answer: detail.correct_answer,
            });
            self.next_id += 1;
        }

        indexed
    }

    /// How many questions have been indexed so far.
    pub fn indexed(&self) -> usize {
        self.next_id
    }
}
