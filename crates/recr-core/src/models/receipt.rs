//! Receipt data models produced by the parsing engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::receipt::rules::lines::strip_price_suffix;

/// A structurally matched purchase timestamp.
///
/// Fields are the digit groups as printed on the receipt; the year is
/// always a 4-digit literal from the source text (no 2-digit-year or era
/// parsing). When the receipt prints a date without a time, `hour` is 12
/// and `minute` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMatch {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl DateMatch {
    /// Convert to a calendar datetime.
    ///
    /// `None` when the matched digit groups do not form a valid calendar
    /// date or time (e.g. month 13 from an OCR misread).
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, 0)
    }
}

/// One purchased item with its category and estimated expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedItem {
    /// Candidate line as extracted (product name plus price fragment).
    pub name: String,

    /// Category label from the rule table.
    pub category: String,

    /// Assumed shelf life in days after purchase.
    pub shelf_life_days: i64,

    /// Purchase date advanced by the shelf life; `None` when the receipt
    /// yielded no usable purchase date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDateTime>,
}

impl CategorizedItem {
    /// Item name with any trailing price fragment removed.
    pub fn display_name(&self) -> String {
        strip_price_suffix(&self.name)
    }
}

/// A parsed receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Purchase timestamp; `None` when no date pattern matched. The
    /// fallback (commonly "now") is the caller's policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDateTime>,

    /// Items in receipt order.
    pub items: Vec<CategorizedItem>,
}
