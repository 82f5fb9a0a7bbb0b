//! Core library for Japanese receipt OCR text processing.
//!
//! This crate provides:
//! - Japanese text normalization (katakana and full-width folding)
//! - Purchase date extraction across the common receipt formats
//! - Item line detection with boilerplate exclusion and wrapped-line merging
//! - Food categorization with shelf-life estimation and expiry dates
//!
//! The engine consumes raw OCR text and is purely functional: every
//! operation is synchronous, total over arbitrary UTF-8 input, and free of
//! I/O, so it can be called concurrently without locking. Image capture,
//! OCR inference and presentation are the caller's concern.

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{RecrError, Result, TableError};
pub use models::config::{Rule, RuleTable, Vocabulary};
pub use models::receipt::{CategorizedItem, DateMatch, Receipt};
pub use receipt::rules::{
    add_days, categorize, extract_item_lines, extract_purchase_date, normalize,
    strip_price_suffix, to_hiragana, Categorizer, Category, DateExtractor, FieldExtractor,
    ItemLineExtractor,
};
pub use receipt::{ExtractionResult, ReceiptParser, RuleReceiptParser};
