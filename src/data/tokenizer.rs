// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Splits text into lowercase runs of ASCII word characters
// (A-Z, a-z, 0-9, underscore). Everything else, non-ASCII letters
// included, is a delimiter and is dropped. No stemming, no stop
// words.
//
// Example:
//   "A1 b_2, C!"  →  ["a1", "b_2", "c"]

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("word pattern is valid"));

pub fn tokenize(raw: &str) -> Vec<String> {
    WORD.find_iter(raw)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}
