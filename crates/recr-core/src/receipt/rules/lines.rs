//! Item line extraction: separates product lines from receipt boilerplate.

use lazy_static::lazy_static;

use crate::models::config::Vocabulary;

use super::normalize::normalize;
use super::patterns::{
    DIGITS_AND_HYPHENS, PRICE_SUFFIX, PRICE_TAIL, TAX_MARKER, WHITESPACE_RUN,
};
use super::FieldExtractor;

lazy_static! {
    static ref DEFAULT_EXTRACTOR: ItemLineExtractor = ItemLineExtractor::new();
}

/// Item line extractor over an injectable vocabulary.
pub struct ItemLineExtractor {
    vocabulary: Vocabulary,
}

impl ItemLineExtractor {
    /// Extractor with the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
        }
    }

    /// Use alternate exclusion/food keyword lists.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Whether a line plausibly describes one purchased product plus its
    /// price.
    ///
    /// A trimmed line qualifies iff it is non-empty, contains no exclusion
    /// keyword, is price-like (a trailing price or a tax-status marker),
    /// is not composed solely of whitespace/digits/hyphens, and its
    /// normalized form contains at least one food keyword.
    pub fn is_item_line(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || self.contains_exclude_word(line) {
            return false;
        }

        let price_like = PRICE_TAIL.is_match(line) || TAX_MARKER.is_match(line);
        if !price_like || DIGITS_AND_HYPHENS.is_match(line) {
            return false;
        }

        let normalized = normalize(line);
        self.vocabulary
            .food_keywords
            .iter()
            .any(|k| normalized.contains(k.as_str()))
    }

    // Exclusion runs on the raw trimmed line; the exclusion vocabulary is
    // written in the forms receipts actually print.
    fn contains_exclude_word(&self, line: &str) -> bool {
        self.vocabulary
            .exclude_words
            .iter()
            .any(|w| line.contains(w.as_str()))
    }

    /// Extract candidate item lines in original top-to-bottom order.
    ///
    /// Lines are split on `\n` (tolerating `\r\n`), whitespace-collapsed
    /// and trimmed. A qualifying line is emitted joined to the physical
    /// line above it, which handles product names that wrap with the price
    /// on the following line. The previous line is only a lookback: it is
    /// never consumed, and it is re-checked for exclusion keywords so a
    /// header or footer is never glued onto a product name.
    pub fn extract_lines(&self, text: &str) -> Vec<String> {
        let lines: Vec<String> = text
            .lines()
            .map(|l| WHITESPACE_RUN.replace_all(l, " ").trim().to_string())
            .collect();

        let mut items = Vec::new();
        for i in 0..lines.len() {
            let curr = &lines[i];
            if !self.is_item_line(curr) {
                continue;
            }
            let prev = if i > 0 { lines[i - 1].as_str() } else { "" };
            if prev.is_empty() || self.contains_exclude_word(prev) {
                items.push(curr.clone());
            } else {
                items.push(format!("{prev} {curr}"));
            }
        }
        items
    }
}

impl Default for ItemLineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ItemLineExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract_lines(text)
    }
}

/// Extract candidate item lines using the built-in vocabulary.
pub fn extract_item_lines(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract_lines(text)
}

/// Remove a trailing price fragment (`" 498"`, `" 498円"`, `" 498¥"`) from
/// an item line, yielding the name to display.
pub fn strip_price_suffix(line: &str) -> String {
    PRICE_SUFFIX.replace(line, "").trim().to_string()
}
