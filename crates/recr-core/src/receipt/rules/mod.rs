//! Rule-based extractors for Japanese receipt text.

pub mod category;
pub mod dates;
pub mod lines;
pub mod normalize;
pub mod patterns;

pub use category::{categorize, Categorizer, Category};
pub use dates::{add_days, extract_purchase_date, DateExtractor};
pub use lines::{extract_item_lines, strip_price_suffix, ItemLineExtractor};
pub use normalize::{normalize, to_hiragana};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
