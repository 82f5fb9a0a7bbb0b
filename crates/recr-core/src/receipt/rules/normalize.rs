//! Japanese text normalization for keyword matching.
//!
//! OCR output mixes katakana/hiragana and full-width/half-width forms for
//! the same printed token, so keyword containment runs on a canonical form:
//! katakana folded to hiragana, full-width alphanumerics folded to ASCII,
//! then lowercased.

/// Convert katakana (U+30A1..U+30F6) to hiragana.
///
/// The two kana blocks are offset by a fixed 0x60 across this contiguous
/// range; characters outside it pass through unchanged.
pub fn to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Canonicalize a text fragment for keyword containment checks.
///
/// Folds katakana to hiragana, full-width Latin letters and digits
/// (U+FF10..U+FF19, U+FF21..U+FF3A, U+FF41..U+FF5A) to their half-width
/// equivalents, then lowercases. Whitespace and punctuation are left
/// untouched; that is the callers' responsibility. Idempotent.
pub fn normalize(s: &str) -> String {
    let folded: String = to_hiragana(s)
        .chars()
        .map(|c| match c {
            '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            _ => c,
        })
        .collect();
    folded.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(to_hiragana("トリニク"), "とりにく");
        assert_eq!(to_hiragana("ヨーグルト"), "よーぐると");
    }

    #[test]
    fn test_kanji_untouched() {
        assert_eq!(to_hiragana("鶏肉"), "鶏肉");
        assert_eq!(normalize("豚肉 100g"), "豚肉 100g");
    }

    #[test]
    fn test_fullwidth_folding() {
        assert_eq!(normalize("ＡＢＣａｂｃ１２３"), "abcabc123");
        assert_eq!(normalize("チーズ ＷＢ５００"), "ちーず wb500");
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(normalize("  パン  398  "), "  ぱん  398  ");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "トリ もも肉 ４９８円",
            "ヨーグルト ＬＢ８１",
            "already ascii 123",
            "小計 1,200",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
