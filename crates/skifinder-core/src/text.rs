// crates/skifinder-core/src/text.rs

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Zermatt-Süd` -> `Zermatt-Sud`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so region keys in the demo catalog
/// match queries regardless of accents or case.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Champéry"), "champery");
        assert_eq!(fold_key("ZERMATT"), "zermatt");
    }

    #[test]
    fn folded_equality() {
        assert!(equals_folded("Davos-Klösters", "davos-klosters"));
        assert!(!equals_folded("Stowe", "Killington"));
    }
}
