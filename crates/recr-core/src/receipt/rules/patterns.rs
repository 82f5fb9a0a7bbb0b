//! Compiled regex patterns for receipt text extraction.
//!
//! All digit classes are ASCII `[0-9]`: date and price matching runs on the
//! raw OCR text, where full-width digits are deliberately not recognized
//! (normalization is applied only for keyword containment).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Purchase date patterns, in priority order. Year is exactly 4 digits;
    // month, day and hour are 1-2 digits; minute is exactly 2 digits.
    pub static ref DATE_SLASH_TIME: Regex = Regex::new(
        r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})\s+([0-9]{1,2}):([0-9]{2})"
    ).unwrap();

    pub static ref DATE_KANJI_TIME: Regex = Regex::new(
        r"([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})日\s+([0-9]{1,2}):([0-9]{2})"
    ).unwrap();

    pub static ref DATE_SLASH: Regex = Regex::new(
        r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})"
    ).unwrap();

    pub static ref DATE_KANJI: Regex = Regex::new(
        r"([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})日"
    ).unwrap();

    // A line ending in an optional currency symbol and a 2-6 digit price,
    // optionally with two decimal places.
    pub static ref PRICE_TAIL: Regex = Regex::new(
        r"(?:¥|￥)?\s*[0-9]{2,6}(?:\.[0-9]{2})?$"
    ).unwrap();

    // Tax-status markers (tax included / tax excluded).
    pub static ref TAX_MARKER: Regex = Regex::new(r"税込|税抜").unwrap();

    // Bare subtotal / phone-number remnants: whitespace, digits and hyphens
    // only. Such lines are never items even when price-like.
    pub static ref DIGITS_AND_HYPHENS: Regex = Regex::new(r"^[\s0-9-]+$").unwrap();

    // Runs of whitespace from misaligned OCR columns.
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();

    // Trailing price fragment on an item line, e.g. " 498", " 498円".
    pub static ref PRICE_SUFFIX: Regex = Regex::new(r"\s+[0-9]+(?:円|¥|￥)?$").unwrap();
}
