//! Rule table and vocabulary configuration for receipt parsing.
//!
//! Both tables are immutable value types: the built-in data lives in the
//! `Default` impls, and alternate tables can be loaded from JSON and
//! injected into the extractors.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TableError};

/// A single categorization rule: keywords mapping to a category and a
/// shelf life in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Category label (e.g. "鶏肉").
    pub category: String,

    /// Assumed shelf life in days after purchase.
    pub days: i64,

    /// Keywords matched as substrings of the normalized line.
    pub keywords: Vec<String>,
}

/// Ordered categorization rule table.
///
/// The table is scanned top-down and the first rule with a keyword hit
/// wins, so order is a meaningful tie-break: specific meat and seafood
/// rules are listed before broader ones. It must stay an ordered sequence;
/// a keyed lookup would resolve overlapping keyword sets nondeterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Rules in evaluation order.
    pub rules: Vec<Rule>,
}

impl RuleTable {
    /// Load a rule table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: Self = serde_json::from_str(&content).map_err(TableError::Parse)?;
        table.validate()?;
        Ok(table)
    }

    /// Save the rule table to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(TableError::Parse)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check structural invariants: at least one rule, and keywords on
    /// every rule.
    pub fn validate(&self) -> std::result::Result<(), TableError> {
        if self.rules.is_empty() {
            return Err(TableError::Empty);
        }
        for rule in &self.rules {
            if rule.keywords.is_empty() {
                return Err(TableError::EmptyKeywords(rule.category.clone()));
            }
        }
        Ok(())
    }
}

fn rule(category: &str, days: i64, keywords: &[&str]) -> Rule {
    Rule {
        category: category.to_string(),
        days,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: vec![
                rule("鶏肉", 7, &["とり", "ちきん", "鶏", "鶏肉"]),
                rule("牛肉", 7, &["ぎゅう", "牛", "牛肉", "びーふ"]),
                rule("豚肉", 7, &["ぶた", "豚", "豚肉", "ぽーく"]),
                rule("挽肉", 3, &["ひき", "みんち", "挽肉"]),
                rule(
                    "魚介",
                    2,
                    &[
                        "さしみ", "鮮魚", "さーもん", "まぐろ", "たい", "いか", "えび",
                        "ほたて", "さんま", "さば", "ぶり",
                    ],
                ),
                rule("牛乳", 7, &["ぎゅうにゅう", "牛乳", "みるく"]),
                rule("ヨーグルト", 10, &["よーぐると", "ヨーグルト"]),
                rule("パン", 4, &["ぱん", "パン", "食パン", "ろーる", "菓子パン"]),
                rule(
                    "惣菜",
                    2,
                    &[
                        "そうざい", "惣菜", "弁当", "おかず", "サラダ", "ころっけ",
                        "ふらい", "唐揚げ", "からあげ", "総菜",
                    ],
                ),
                rule("冷凍食品", 90, &["れいとう", "冷凍", "ふろーずん"]),
                rule(
                    "野菜",
                    5,
                    &[
                        "やさい", "野菜", "れたす", "きゅうり", "にんじん", "だいこん",
                        "たまねぎ", "じゃがいも", "ねぎ", "ほうれんそう",
                    ],
                ),
                rule("豆腐", 5, &["とうふ", "豆腐"]),
                rule("卵", 14, &["たまご", "卵", "玉子"]),
            ],
        }
    }
}

/// Line classification vocabularies.
///
/// `exclude_words` are boilerplate markers (totals, tax, payment, register
/// and contact labels) that disqualify a line outright; `food_keywords` is
/// the list of which at least one must appear in the normalized line for it
/// to count as an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Substrings that disqualify a line regardless of other signals.
    /// Matched against the raw trimmed line, not the normalized form.
    pub exclude_words: Vec<String>,

    /// Substrings matched against the normalized line.
    pub food_keywords: Vec<String>,
}

impl Vocabulary {
    /// Load a vocabulary from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let vocabulary: Self = serde_json::from_str(&content).map_err(TableError::Parse)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Save the vocabulary to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(TableError::Parse)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that both lists are non-empty.
    pub fn validate(&self) -> std::result::Result<(), TableError> {
        if self.exclude_words.is_empty() {
            return Err(TableError::EmptyVocabulary("exclude_words"));
        }
        if self.food_keywords.is_empty() {
            return Err(TableError::EmptyVocabulary("food_keywords"));
        }
        Ok(())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        let exclude_words = [
            "合計", "小計", "消費税", "内税", "外税", "値引", "割引", "ポイント",
            "現金", "クレジット", "お預り", "お預かり", "お釣り", "レジ", "担当",
            "会員", "バーコード", "問合せ", "返品", "再発行", "tel", "phone",
            "thank", "ご購入", "ご利用", "営業時間", "住所", "店舗", "加盟", "当店",
        ];
        let food_keywords = [
            "とり", "ちきん", "鶏", "ぎゅう", "牛", "ぶた", "豚", "ひき", "みんち",
            "挽肉", "さしみ", "鮮魚", "さーもん", "まぐろ", "たい", "いか", "えび",
            "ほたて", "さんま", "さば", "ぶり", "ぎゅうにゅう", "牛乳", "みるく",
            "よーぐると", "ヨーグルト", "ぱん", "パン", "食パン", "ろーる",
            "菓子パン", "そうざい", "惣菜", "弁当", "おかず", "サラダ", "ころっけ",
            "ふらい", "唐揚げ", "からあげ", "総菜", "れいとう", "冷凍",
            "ふろーずん", "やさい", "野菜", "れたす", "きゅうり", "にんじん",
            "だいこん", "たまねぎ", "じゃがいも", "ねぎ", "ほうれんそう", "とうふ",
            "豆腐", "たまご", "卵", "玉子", "うどん", "ラーメン", "そば",
            "スパゲッティ", "缶詰", "瓶詰", "チーズ", "バター", "ハム",
            "ソーセージ", "ベーコン", "ジャム",
        ];
        Self {
            exclude_words: exclude_words.iter().map(|w| w.to_string()).collect(),
            food_keywords: food_keywords.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_table_is_valid() {
        let table = RuleTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.rules.len(), 13);
        assert_eq!(table.rules[0].category, "鶏肉");
    }

    #[test]
    fn test_default_vocabulary_is_valid() {
        assert!(Vocabulary::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let table = RuleTable { rules: vec![] };
        assert!(matches!(table.validate(), Err(TableError::Empty)));
    }

    #[test]
    fn test_validate_rejects_rule_without_keywords() {
        let table = RuleTable {
            rules: vec![rule("鶏肉", 7, &[])],
        };
        assert!(matches!(
            table.validate(),
            Err(TableError::EmptyKeywords(category)) if category == "鶏肉"
        ));
    }

    #[test]
    fn test_rule_table_json_round_trip() {
        let table = RuleTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let parsed: RuleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_rule_table_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");

        let table = RuleTable::default();
        table.save(&path).unwrap();
        let loaded = RuleTable::from_file(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_from_file_rejects_invalid_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");

        std::fs::write(&path, r#"{"rules": []}"#).unwrap();
        assert!(RuleTable::from_file(&path).is_err());
    }

    #[test]
    fn test_vocabulary_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");

        let vocabulary = Vocabulary::default();
        vocabulary.save(&path).unwrap();
        let loaded = Vocabulary::from_file(&path).unwrap();
        assert_eq!(loaded, vocabulary);
    }
}
