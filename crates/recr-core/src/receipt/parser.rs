//! Rule-based receipt parser tying the extraction stages together.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::{RuleTable, Vocabulary};
use crate::models::receipt::{CategorizedItem, Receipt};

use super::rules::dates::{add_days, DateExtractor};
use super::rules::lines::ItemLineExtractor;
use super::rules::Categorizer;
use super::rules::FieldExtractor;

/// Result of receipt extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted receipt data.
    pub receipt: Receipt,

    /// Raw input text.
    pub raw_text: String,

    /// Extraction warnings ("no purchase date found", "no item lines
    /// found"). Both are recoverable: the caller decides the fallback.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse receipt data from OCR text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based receipt parser with injectable tables.
pub struct RuleReceiptParser {
    lines: ItemLineExtractor,
    categorizer: Categorizer,
}

impl RuleReceiptParser {
    /// Parser over the built-in rule table and vocabulary.
    pub fn new() -> Self {
        Self {
            lines: ItemLineExtractor::new(),
            categorizer: Categorizer::new(),
        }
    }

    /// Use an alternate categorization rule table.
    pub fn with_rules(mut self, table: RuleTable) -> Self {
        self.categorizer = Categorizer::new().with_table(table);
        self
    }

    /// Use alternate exclusion/food keyword lists.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.lines = ItemLineExtractor::new().with_vocabulary(vocabulary);
        self
    }
}

impl Default for RuleReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for RuleReceiptParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing receipt from {} characters of text", text.len());

        let date_match = DateExtractor::new().extract(text);
        let purchase_date = date_match.and_then(|m| m.datetime());
        match (date_match, purchase_date) {
            (None, _) => warnings.push("no purchase date found".to_string()),
            (Some(m), None) => warnings.push(format!(
                "matched date {}-{}-{} is not a valid calendar date",
                m.year, m.month, m.day
            )),
            _ => {}
        }

        let lines = self.lines.extract_lines(text);
        if lines.is_empty() {
            warnings.push("no item lines found".to_string());
        }

        let items: Vec<CategorizedItem> = lines
            .into_iter()
            .map(|name| {
                let assigned = self.categorizer.categorize(&name);
                let expiry_date = purchase_date.map(|d| add_days(d, assigned.days));
                CategorizedItem {
                    name,
                    category: assigned.category,
                    shelf_life_days: assigned.days,
                    expiry_date,
                }
            })
            .collect();

        debug!(
            "extracted {} item(s), purchase date {:?}",
            items.len(),
            purchase_date
        );

        ExtractionResult {
            receipt: Receipt {
                purchase_date,
                items,
            },
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::Rule;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_receipt_end_to_end() {
        let text = "スーパーまるいち\n2024年5月1日 12:30\n\nとり もも肉 498\n小計 498\n合計 498\nありがとうございました\n";

        let result = RuleReceiptParser::new().parse(text);

        assert_eq!(result.receipt.purchase_date, Some(dt(2024, 5, 1, 12, 30)));
        assert_eq!(result.receipt.items.len(), 1);

        let item = &result.receipt.items[0];
        assert_eq!(item.name, "とり もも肉 498");
        assert_eq!(item.category, "鶏肉");
        assert_eq!(item.shelf_life_days, 7);
        assert_eq!(item.expiry_date, Some(dt(2024, 5, 8, 12, 30)));

        assert!(result.warnings.is_empty());
        assert_eq!(result.raw_text, text);
    }

    #[test]
    fn test_parse_without_date_yields_warning_and_no_expiry() {
        let text = "とり もも肉 498\n";

        let result = RuleReceiptParser::new().parse(text);

        assert_eq!(result.receipt.purchase_date, None);
        assert_eq!(result.receipt.items.len(), 1);
        assert_eq!(result.receipt.items[0].expiry_date, None);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("no purchase date")));
    }

    #[test]
    fn test_parse_without_items_yields_warning() {
        let text = "2024/3/5 14:23\n合計 1,200\n現金 2,000\nお釣り 800\n";

        let result = RuleReceiptParser::new().parse(text);

        assert_eq!(result.receipt.purchase_date, Some(dt(2024, 3, 5, 14, 23)));
        assert!(result.receipt.items.is_empty());
        assert!(result.warnings.iter().any(|w| w.contains("no item lines")));
    }

    #[test]
    fn test_parse_multiple_items_in_order() {
        // "みるく" rather than "牛乳": the kanji 牛 would resolve to the
        // earlier 牛肉 rule under first-match-wins.
        let text = "2024/3/5\n\nみるく 238\n\n食パン 158\n\n小計 396";

        let result = RuleReceiptParser::new().parse(text);

        let categories: Vec<&str> = result
            .receipt
            .items
            .iter()
            .map(|i| i.category.as_str())
            .collect();
        assert_eq!(categories, vec!["牛乳", "パン"]);

        // Date-only receipt: noon placeholder flows into the expiry.
        assert_eq!(
            result.receipt.items[0].expiry_date,
            Some(dt(2024, 3, 12, 12, 0))
        );
        assert_eq!(
            result.receipt.items[1].expiry_date,
            Some(dt(2024, 3, 9, 12, 0))
        );
    }

    #[test]
    fn test_parse_with_custom_tables() {
        let table = RuleTable {
            rules: vec![Rule {
                category: "菓子".to_string(),
                days: 30,
                keywords: vec!["ちょこ".to_string()],
            }],
        };
        let vocabulary = Vocabulary {
            exclude_words: vec!["合計".to_string()],
            food_keywords: vec!["ちょこ".to_string()],
        };
        let parser = RuleReceiptParser::new()
            .with_rules(table)
            .with_vocabulary(vocabulary);

        let result = parser.parse("2024/3/5\n\nチョコレート 198\n合計 198\n");

        assert_eq!(result.receipt.items.len(), 1);
        assert_eq!(result.receipt.items[0].category, "菓子");
        assert_eq!(result.receipt.items[0].shelf_life_days, 30);
    }
}
