//! Purchase date extraction and expiry date arithmetic.

use chrono::{Duration, NaiveDateTime};

use crate::models::receipt::DateMatch;

use super::patterns::{DATE_KANJI, DATE_KANJI_TIME, DATE_SLASH, DATE_SLASH_TIME};
use super::FieldExtractor;

/// Purchase date extractor.
///
/// Four patterns are tried against the entire raw text in fixed priority
/// order: slash-delimited timestamp, kanji-delimited timestamp, then the
/// date-only forms of each. The first pattern that matches anywhere wins;
/// patterns are never reordered or merged.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = DateMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// One match per pattern, in priority order, deduplicated by value.
    /// The first entry is the match `extract` returns.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for re in [&*DATE_SLASH_TIME, &*DATE_KANJI_TIME] {
            if let Some(caps) = re.captures(text) {
                let m = DateMatch {
                    year: caps[1].parse().unwrap_or(0),
                    month: caps[2].parse().unwrap_or(0),
                    day: caps[3].parse().unwrap_or(0),
                    hour: caps[4].parse().unwrap_or(0),
                    minute: caps[5].parse().unwrap_or(0),
                };
                if !results.contains(&m) {
                    results.push(m);
                }
            }
        }

        for re in [&*DATE_SLASH, &*DATE_KANJI] {
            if let Some(caps) = re.captures(text) {
                // Date-only receipts default to noon, not midnight.
                let m = DateMatch {
                    year: caps[1].parse().unwrap_or(0),
                    month: caps[2].parse().unwrap_or(0),
                    day: caps[3].parse().unwrap_or(0),
                    hour: 12,
                    minute: 0,
                };
                if !results.contains(&m) {
                    results.push(m);
                }
            }
        }

        results
    }
}

/// Find the first recognizable purchase timestamp in `text`.
///
/// Returns `None` when none of the patterns match; substituting a fallback
/// (commonly "now") is the caller's policy.
pub fn extract_purchase_date(text: &str) -> Option<DateMatch> {
    DateExtractor::new().extract(text)
}

/// Advance a datetime by whole calendar days, preserving time-of-day.
///
/// Month and year boundaries and leap years follow standard calendar
/// arithmetic. The input is not mutated.
pub fn add_days(date: NaiveDateTime, days: i64) -> NaiveDateTime {
    date + Duration::days(days)
}
