//! Category rule engine: maps an item line to a food category and shelf
//! life.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::models::config::RuleTable;

use super::normalize::normalize;

/// Category and shelf life returned when no rule matches.
const FALLBACK_CATEGORY: &str = "その他";
const FALLBACK_DAYS: i64 = 7;

lazy_static! {
    static ref DEFAULT_CATEGORIZER: Categorizer = Categorizer::new();
}

/// Category assignment for one item line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category label (e.g. "鶏肉").
    pub category: String,
    /// Assumed shelf life in days after purchase.
    pub days: i64,
}

/// Categorizer over an injectable rule table.
pub struct Categorizer {
    table: RuleTable,
}

impl Categorizer {
    /// Categorizer over the built-in rule table.
    pub fn new() -> Self {
        Self {
            table: RuleTable::default(),
        }
    }

    /// Use an alternate rule table.
    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    /// Category and shelf life for one candidate line.
    ///
    /// The normalized line is checked against each rule in table order and
    /// the first rule with a contained keyword wins: a line matching
    /// several rules resolves to the earliest-listed one, not the most
    /// specific. Falls back to "その他" / 7 days when nothing matches.
    pub fn categorize(&self, line: &str) -> Category {
        let normalized = normalize(line);
        for rule in &self.table.rules {
            if rule
                .keywords
                .iter()
                .any(|k| normalized.contains(k.as_str()))
            {
                return Category {
                    category: rule.category.clone(),
                    days: rule.days,
                };
            }
        }
        Category {
            category: FALLBACK_CATEGORY.to_string(),
            days: FALLBACK_DAYS,
        }
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Categorize a candidate line using the built-in rule table.
pub fn categorize(line: &str) -> Category {
    DEFAULT_CATEGORIZER.categorize(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::Rule;

    #[test]
    fn test_categorize_chicken() {
        let c = categorize("とり もも肉 498");
        assert_eq!(c.category, "鶏肉");
        assert_eq!(c.days, 7);
    }

    #[test]
    fn test_categorize_after_katakana_folding() {
        let c = categorize("チキンカツ 298");
        assert_eq!(c.category, "鶏肉");
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // Matches 鶏肉 ("とり") and 惣菜 ("唐揚げ"); the earlier rule wins.
        let c = categorize("とり唐揚げ 398");
        assert_eq!(c.category, "鶏肉");
        assert_eq!(c.days, 7);
    }

    #[test]
    fn test_first_match_wins_within_meat_rules() {
        // "牛ひき肉" matches 牛肉 ("牛") before 挽肉 ("ひき").
        let c = categorize("牛ひき肉 458");
        assert_eq!(c.category, "牛肉");
        assert_eq!(c.days, 7);
    }

    #[test]
    fn test_fallback_category() {
        let c = categorize("謎の商品 300");
        assert_eq!(
            c,
            Category {
                category: "その他".to_string(),
                days: 7
            }
        );
    }

    #[test]
    fn test_frozen_food_shelf_life() {
        let c = categorize("冷凍ぎょうざ 248");
        assert_eq!(c.category, "冷凍食品");
        assert_eq!(c.days, 90);
    }

    #[test]
    fn test_custom_table_injection() {
        let table = RuleTable {
            rules: vec![Rule {
                category: "調味料".to_string(),
                days: 180,
                keywords: vec!["しょうゆ".to_string()],
            }],
        };
        let categorizer = Categorizer::new().with_table(table);

        let c = categorizer.categorize("ショウユ 特選 298");
        assert_eq!(c.category, "調味料");
        assert_eq!(c.days, 180);
        // Built-in rules are gone in the injected table.
        assert_eq!(categorizer.categorize("とり もも肉 498").category, "その他");
    }
}
