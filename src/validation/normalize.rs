use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for pattern matching: NFD, drop combining marks, lower-case.
///
/// "Début des symptômes" → "debut des symptomes".
pub fn fold_for_matching(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_french_accents() {
        assert_eq!(fold_for_matching("Début des symptômes"), "debut des symptomes");
        assert_eq!(fold_for_matching("NON RENSEIGNÉ"), "non renseigne");
        assert_eq!(fold_for_matching("Hémiparésie à 14h"), "hemiparesie a 14h");
    }

    #[test]
    fn leaves_ascii_untouched_apart_from_case() {
        assert_eq!(fold_for_matching("NIHSS 8 sur table"), "nihss 8 sur table");
    }

    #[test]
    fn precomposed_and_decomposed_fold_identically() {
        assert_eq!(fold_for_matching("e\u{0301}"), fold_for_matching("\u{00e9}"));
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(fold_for_matching(""), "");
    }
}
